/* src/i18n/rust/src/lib.rs */

pub mod dictionary;
pub mod format;
pub mod language;
pub mod manager;
pub mod resolve;

// Re-exports for ergonomic use
pub use dictionary::translate;
pub use format::{
  DateStyle, format_clock, format_date, format_time, month_name, weekday_long, weekday_short,
};
pub use language::{Language, UnsupportedLanguage};
pub use manager::{LanguageListener, LanguageManager};
pub use resolve::{LANGUAGE_STORAGE_KEY, resolve_language};
