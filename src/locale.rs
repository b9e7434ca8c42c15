//! Supported display languages and their lookup tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Turkmen
    Tkm,
    /// Russian
    Rus,
    /// English
    #[default]
    Eng,
}

const MONTHS_TKM: [&str; 12] = [
    "Ýanwar", "Fewral", "Mart", "Aprel", "Maý", "Iýun", "Iyul", "Awgust", "Sentýabr", "Oktýabr",
    "Noýabr", "Dekabr",
];

const MONTHS_RUS: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

const MONTHS_ENG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Tkm, Locale::Rus, Locale::Eng];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Tkm => "tkm",
            Locale::Rus => "rus",
            Locale::Eng => "eng",
        }
    }

    /// Two-letter suffix used by localized API fields (`name_tm`, `name_ru`, ...).
    pub fn translation(self) -> &'static str {
        match self {
            Locale::Tkm => "tm",
            Locale::Rus => "ru",
            Locale::Eng => "en",
        }
    }

    pub(crate) fn months(self) -> &'static [&'static str; 12] {
        match self {
            Locale::Tkm => &MONTHS_TKM,
            Locale::Rus => &MONTHS_RUS,
            Locale::Eng => &MONTHS_ENG,
        }
    }

    /// Month name for a 1-based month number. Out of range months yield `None`.
    pub fn month_name(self, month: u32) -> Option<&'static str> {
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        self.months().get(idx).copied()
    }

    pub fn just_now(self) -> &'static str {
        match self {
            Locale::Tkm => "şu wagt",
            Locale::Rus => "прямо сейчас",
            Locale::Eng => "right now",
        }
    }

    /// Suffix appended directly after the minute count, leading space included.
    pub fn minutes_ago(self) -> &'static str {
        match self {
            Locale::Tkm => " minut öň",
            Locale::Rus => " минут назад",
            Locale::Eng => " minutes ago",
        }
    }

    /// Suffix appended directly after the hour count, leading space included.
    pub fn hours_ago(self) -> &'static str {
        match self {
            Locale::Tkm => " sagat öň",
            Locale::Rus => " часов назад",
            Locale::Eng => " hours ago",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tkm" => Ok(Locale::Tkm),
            "rus" => Ok(Locale::Rus),
            "eng" => Ok(Locale::Eng),
            other => Err(FormatError::UnsupportedLocale(other.to_string())),
        }
    }
}
