/* src/app/rust/src/state.rs */

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use craft_i18n::Language;

use crate::storage::Storage;

pub const STATE_STORAGE_KEY: &str = "app-state";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

impl Theme {
  pub fn name(self) -> &'static str {
    match self {
      Self::Light => "light",
      Self::Dark => "dark",
    }
  }
}

impl fmt::Display for Theme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Theme {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "light" => Ok(Self::Light),
      "dark" => Ok(Self::Dark),
      other => Err(format!("unknown theme: {other}")),
    }
  }
}

/// Snapshot persisted under [`STATE_STORAGE_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
  pub language: Language,
  pub theme: Theme,
  pub last_visit: DateTime<Utc>,
  pub version: String,
}

impl AppState {
  pub fn new(language: Language, theme: Theme, last_visit: DateTime<Utc>) -> Self {
    Self { language, theme, last_visit, version: APP_VERSION.to_string() }
  }
}

/// Previously saved state. Undecodable data is logged and treated as absent.
pub fn load_state(storage: &dyn Storage) -> Option<AppState> {
  let raw = storage.get(STATE_STORAGE_KEY)?;
  match serde_json::from_str(&raw) {
    Ok(state) => Some(state),
    Err(err) => {
      warn!(%err, "discarding unreadable app state");
      None
    }
  }
}

pub fn save_state(storage: &dyn Storage, state: &AppState) {
  match serde_json::to_string(state) {
    Ok(json) => storage.set(STATE_STORAGE_KEY, &json),
    Err(err) => warn!(%err, "failed to encode app state"),
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;
  use crate::storage::MemoryStorage;

  #[test]
  fn uses_camel_case_keys() {
    let at = Utc.with_ymd_and_hms(2025, 8, 8, 3, 22, 50).unwrap();
    let state = AppState::new(Language::En, Theme::Dark, at);
    let json: serde_json::Value = serde_json::to_value(&state).unwrap();
    assert_eq!(json["language"], "en");
    assert_eq!(json["theme"], "dark");
    assert_eq!(json["lastVisit"], "2025-08-08T03:22:50Z");
    assert_eq!(json["version"], APP_VERSION);
  }

  #[test]
  fn save_then_load() {
    let storage = MemoryStorage::new();
    let state = AppState::new(Language::Zh, Theme::Light, Utc::now());
    save_state(&storage, &state);
    assert_eq!(load_state(&storage), Some(state));
  }

  #[test]
  fn corrupt_state_is_absent() {
    let storage = MemoryStorage::with_items([(STATE_STORAGE_KEY, "{not json")]);
    assert_eq!(load_state(&storage), None);
    assert_eq!(load_state(&MemoryStorage::new()), None);
  }
}
