use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

use wagt::Locale;
use wagt::article::{ArticleTransformer, Item};
use wagt::format;
use wagt::util::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "wagt", version, about = "Localized display formatting for articles")]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format a timestamp relative to now ("5 minutes ago", "9 January, 2024")
    Ago {
        timestamp: String,
        /// tkm, rus or eng (defaults to the configured locale)
        #[arg(short, long)]
        locale: Option<Locale>,
        /// Evaluate as if this were the current time
        #[arg(long)]
        now: Option<String>,
    },
    /// Print the local HH:MM of a timestamp
    Clock { timestamp: String },
    /// Format a duration in seconds as [HH:]MM:SS
    Duration { seconds: f64 },
    /// Transform API items from a JSON file (or - for stdin) into articles
    Transform {
        input: PathBuf,
        #[arg(short, long)]
        locale: Option<Locale>,
        #[arg(long)]
        now: Option<String>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemInput {
    Many(Vec<Item>),
    One(Box<Item>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    let _guard = setup_logging(&config, cli.debug)?;

    info!(locale = %config.locale.default, "wagt starting");

    match cli.command {
        Command::Ago {
            timestamp,
            locale,
            now,
        } => {
            let locale = locale.unwrap_or(config.locale.default);
            let now = resolve_now(now.as_deref())?;
            println!("{}", format::created_at_at(&timestamp, locale, now)?);
        }
        Command::Clock { timestamp } => {
            println!("{}", format::clock_time(&timestamp)?);
        }
        Command::Duration { seconds } => {
            println!("{}", format::second_to_time(seconds)?);
        }
        Command::Transform { input, locale, now } => {
            let locale = locale.unwrap_or(config.locale.default);
            let now = resolve_now(now.as_deref())?;
            let content = read_input(&input)?;
            let items: ItemInput =
                serde_json::from_str(&content).context("Failed to parse items JSON")?;

            let transformer = ArticleTransformer::at(locale, config.article.clone(), now);
            let output = match items {
                ItemInput::Many(items) => {
                    serde_json::to_string_pretty(&transformer.transform_all(&items)?)?
                }
                ItemInput::One(item) => {
                    serde_json::to_string_pretty(&transformer.transform(&item)?)?
                }
            };
            println!("{output}");
        }
    }

    Ok(())
}

fn resolve_now(now: Option<&str>) -> Result<DateTime<Local>> {
    match now {
        Some(s) => format::parse_timestamp(s, &Local).context("Invalid --now timestamp"),
        None => Ok(Local::now()),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "wagt.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("wagt=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
