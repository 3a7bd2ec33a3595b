/* src/router/core/rust/src/route.rs */

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every page the app can show. Dispatch on this enum is exhaustive, so a
/// new page cannot be added without a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteId {
  Home,
  Calendar,
  Features,
  About,
}

impl RouteId {
  pub const ALL: [Self; 4] = [Self::Home, Self::Calendar, Self::Features, Self::About];

  pub fn name(self) -> &'static str {
    match self {
      Self::Home => "home",
      Self::Calendar => "calendar",
      Self::Features => "features",
      Self::About => "about",
    }
  }

  pub fn parse(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|r| r.name() == name)
  }

  /// Address-bar path: `/` for home, `/<name>` otherwise.
  pub fn path(self) -> String {
    match self {
      Self::Home => "/".to_string(),
      other => format!("/{}", other.name()),
    }
  }

  pub fn default_title(self) -> &'static str {
    match self {
      Self::Home => "日历工艺 · CalendarCraft",
      Self::Calendar => "智能日历 · CalendarCraft",
      Self::Features => "功能特色 · CalendarCraft",
      Self::About => "关于我们 · CalendarCraft",
    }
  }
}

impl fmt::Display for RouteId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Route name for an address-bar path. The result may not be a known
/// route; navigation reports that as not found.
pub fn route_name_from_path(path: &str) -> &str {
  let trimmed = path.trim_start_matches('/').trim_end_matches('/');
  if trimmed.is_empty() { RouteId::Home.name() } else { trimmed }
}
