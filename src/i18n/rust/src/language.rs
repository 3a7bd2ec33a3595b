/* src/i18n/rust/src/language.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  #[default]
  Zh,
  En,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl Language {
  pub const ALL: [Self; 2] = [Self::Zh, Self::En];

  pub fn code(self) -> &'static str {
    match self {
      Self::Zh => "zh",
      Self::En => "en",
    }
  }

  /// Value for the document's `lang` attribute.
  pub fn html_lang(self) -> &'static str {
    match self {
      Self::Zh => "zh-CN",
      Self::En => "en-US",
    }
  }

  pub fn toggle(self) -> Self {
    match self {
      Self::Zh => Self::En,
      Self::En => Self::Zh,
    }
  }

  /// Pick the variant of a `(zh, en)` pair for this language.
  pub fn pick<T>(self, zh: T, en: T) -> T {
    match self {
      Self::Zh => zh,
      Self::En => en,
    }
  }
}

impl FromStr for Language {
  type Err = UnsupportedLanguage;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "zh" => Ok(Self::Zh),
      "en" => Ok(Self::En),
      other => Err(UnsupportedLanguage(other.to_string())),
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}
