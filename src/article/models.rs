use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::locale::Locale;

/// Raw item as returned by the content API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    pub main_photo: Option<String>,
    pub main_video: Option<Video>,
    pub title: Option<String>,
    pub slug_name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub published_date: Option<String>,
    pub category: Option<Vec<Category>>,
    pub view_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Video {
    pub url: Option<String>,
    pub photo: Option<String>,
    pub poster: Option<String>,
    pub duration: Option<NumberOrText>,
}

/// The API sends durations both as JSON numbers and as numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrText::Number(n) => Some(*n),
            NumberOrText::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    pub category_id: Option<i64>,
    pub category_slug: Option<String>,
    pub parent_category_slug: Option<String>,
    pub parent_id: Option<i64>,
    /// Localized fields such as `name_tm` or `parent_name_en`.
    #[serde(flatten)]
    pub localized: BTreeMap<String, Value>,
}

impl Category {
    /// A zero parent id means top level.
    pub fn has_parent(&self) -> bool {
        self.parent_id.is_some_and(|id| id != 0)
    }

    pub fn name(&self, locale: Locale) -> Option<&str> {
        self.localized_field("name", locale)
    }

    pub fn parent_name(&self, locale: Locale) -> Option<&str> {
        self.localized_field("parent_name", locale)
    }

    fn localized_field(&self, prefix: &str, locale: Locale) -> Option<&str> {
        let key = format!("{}_{}", prefix, locale.translation());
        self.localized.get(&key).and_then(Value::as_str)
    }
}

/// Display-ready article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub photo: Option<String>,
    pub video: Option<String>,
    pub duration: Option<f64>,
    pub title: Option<String>,
    pub slug_name: Option<String>,
    pub link: String,
    pub description: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category: Vec<ArticleCategory>,
    pub published_date: Option<String>,
    pub message: Option<String>,
    pub visibility: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCategory {
    pub id: Option<i64>,
    pub category_slug: Option<String>,
    pub parent_category_slug: Option<String>,
    pub parent_id: Option<i64>,
    pub link: String,
    pub name: Option<String>,
    pub parent_name: Option<String>,
}

/// Route prefixes and image variant used when building an [`Article`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleOptions {
    #[serde(default = "default_link")]
    pub link: String,
    #[serde(default = "default_category_link")]
    pub category_link: String,
    #[serde(default)]
    pub photo_size: Option<String>,
}

fn default_link() -> String {
    "/news".to_string()
}
fn default_category_link() -> String {
    "/category".to_string()
}

impl Default for ArticleOptions {
    fn default() -> Self {
        Self {
            link: default_link(),
            category_link: default_category_link(),
            photo_size: None,
        }
    }
}
