/* src/app/rust/src/document.rs */

use std::sync::{Mutex, PoisonError};

use craft_router::RouteId;

use crate::state::Theme;

/// The parts of the page the shell owns: everything outside the router's
/// mount point.
pub trait Document: Send + Sync {
  fn set_title(&self, title: &str);
  fn set_lang(&self, html_lang: &str);
  fn set_theme(&self, theme: Theme);
  /// Status-bar clock text.
  fn set_clock(&self, text: &str);
  fn set_active_nav(&self, route: RouteId);
  fn set_shortcuts_panel(&self, visible: bool);
  fn set_transition_overlay(&self, active: bool);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSnapshot {
  pub title: String,
  pub lang: String,
  pub theme: Theme,
  pub clock: String,
  pub active_nav: Option<RouteId>,
  pub shortcuts_panel: bool,
  pub transition_overlay: bool,
}

/// Records every write for headless runs and tests.
#[derive(Default)]
pub struct MemoryDocument {
  state: Mutex<DocumentSnapshot>,
}

impl MemoryDocument {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn snapshot(&self) -> DocumentSnapshot {
    self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  fn update(&self, f: impl FnOnce(&mut DocumentSnapshot)) {
    f(&mut self.state.lock().unwrap_or_else(PoisonError::into_inner));
  }
}

impl Document for MemoryDocument {
  fn set_title(&self, title: &str) {
    self.update(|s| s.title = title.to_string());
  }

  fn set_lang(&self, html_lang: &str) {
    self.update(|s| s.lang = html_lang.to_string());
  }

  fn set_theme(&self, theme: Theme) {
    self.update(|s| s.theme = theme);
  }

  fn set_clock(&self, text: &str) {
    self.update(|s| s.clock = text.to_string());
  }

  fn set_active_nav(&self, route: RouteId) {
    self.update(|s| s.active_nav = Some(route));
  }

  fn set_shortcuts_panel(&self, visible: bool) {
    self.update(|s| s.shortcuts_panel = visible);
  }

  fn set_transition_overlay(&self, active: bool) {
    self.update(|s| s.transition_overlay = active);
  }
}
