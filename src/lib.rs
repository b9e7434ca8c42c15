//! Localized display formatting for article timestamps, media durations and
//! dropdown menus.

pub mod article;
pub mod dropdown;
pub mod error;
pub mod format;
pub mod locale;
pub mod util;

pub use error::{FormatError, Result};
pub use locale::Locale;
