/* src/router/core/rust/src/host.rs */

//! Seams between the router and whatever displays it. A browser host
//! implements these over the DOM; the in-memory versions drive the app
//! headlessly and in tests.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::page::BoxFuture;
use crate::route::RouteId;

/// The element pages render into.
pub trait MountPoint: Send + Sync {
  fn clear(&self);
  fn set_html(&self, html: &str);
  fn set_class(&self, class: &str);
  /// Replace the content of the placeholder `data-slot="<name>"` inside
  /// the current page, leaving the rest untouched.
  fn set_slot(&self, name: &str, html: &str);
  fn play_enter_animation(&self);
  /// Swap bilingual text to `code`. Hosts without text swapping ignore it.
  fn set_language(&self, _code: &str) {}
}

/// Entry pushed onto the host's session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
  pub route: RouteId,
  pub path: String,
  pub title: String,
}

pub trait AddressBar: Send + Sync {
  fn push_state(&self, state: HistoryState);
  fn location_path(&self) -> String;
}

/// Callbacks around the page-transition overlay.
pub trait TransitionHooks: Send + Sync {
  fn transition_start(&self) {}
  fn transition_end(&self) {}
}

pub struct NoopHooks;

impl TransitionHooks for NoopHooks {}

pub trait Delay: Send + Sync {
  fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

pub struct TokioDelay;

impl Delay for TokioDelay {
  fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
    Box::pin(tokio::time::sleep(duration))
  }
}

/// Completes immediately; for hosts that do not animate.
pub struct Immediate;

impl Delay for Immediate {
  fn sleep(&self, _duration: Duration) -> BoxFuture<'static, ()> {
    Box::pin(async {})
  }
}

#[derive(Default)]
struct MountState {
  html: String,
  class: String,
  slots: BTreeMap<String, String>,
  language: Option<String>,
  enter_animations: usize,
}

/// Mount point that keeps its content as strings.
#[derive(Default)]
pub struct MemoryMount {
  state: Mutex<MountState>,
}

impl MemoryMount {
  pub fn new() -> Self {
    Self::default()
  }

  fn with<R>(&self, f: impl FnOnce(&mut MountState) -> R) -> R {
    f(&mut self.state.lock().unwrap_or_else(PoisonError::into_inner))
  }

  /// Current content with slots filled in and bilingual text swapped to
  /// the last language set.
  pub fn html(&self) -> String {
    self.with(|s| {
      let mut html = s.html.clone();
      for (name, content) in &s.slots {
        let marker = format!("data-slot=\"{name}\">");
        if let Some(at) = html.find(&marker) {
          html.insert_str(at + marker.len(), content);
        }
      }
      match &s.language {
        Some(code) => craft_markup::localize(&html, code),
        None => html,
      }
    })
  }

  pub fn class(&self) -> String {
    self.with(|s| s.class.clone())
  }

  pub fn slot(&self, name: &str) -> Option<String> {
    self.with(|s| s.slots.get(name).cloned())
  }

  pub fn enter_animations(&self) -> usize {
    self.with(|s| s.enter_animations)
  }
}

impl MountPoint for MemoryMount {
  fn clear(&self) {
    self.with(|s| {
      s.html.clear();
      s.slots.clear();
    });
  }

  fn set_html(&self, html: &str) {
    self.with(|s| {
      s.html = html.to_string();
      s.slots.clear();
    });
  }

  fn set_class(&self, class: &str) {
    self.with(|s| s.class = class.to_string());
  }

  fn set_slot(&self, name: &str, html: &str) {
    self.with(|s| {
      s.slots.insert(name.to_string(), html.to_string());
    });
  }

  fn play_enter_animation(&self) {
    self.with(|s| s.enter_animations += 1);
  }

  fn set_language(&self, code: &str) {
    self.with(|s| s.language = Some(code.to_string()));
  }
}

/// Address bar backed by a vector of pushed states.
pub struct MemoryAddressBar {
  initial_path: String,
  entries: Mutex<Vec<HistoryState>>,
}

impl MemoryAddressBar {
  pub fn new(initial_path: impl Into<String>) -> Self {
    Self { initial_path: initial_path.into(), entries: Mutex::new(Vec::new()) }
  }

  pub fn entries(&self) -> Vec<HistoryState> {
    self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  /// Title of the most recent entry.
  pub fn title(&self) -> Option<String> {
    self.entries.lock().unwrap_or_else(PoisonError::into_inner).last().map(|e| e.title.clone())
  }
}

impl Default for MemoryAddressBar {
  fn default() -> Self {
    Self::new("/")
  }
}

impl AddressBar for MemoryAddressBar {
  fn push_state(&self, state: HistoryState) {
    self.entries.lock().unwrap_or_else(PoisonError::into_inner).push(state);
  }

  fn location_path(&self) -> String {
    let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
    entries.last().map(|e| e.path.clone()).unwrap_or_else(|| self.initial_path.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn slots_fill_placeholders() {
    let mount = MemoryMount::new();
    mount.set_html(r#"<main><div data-slot="calendar"></div></main>"#);
    mount.set_slot("calendar", "<p>grid</p>");
    assert_eq!(mount.html(), r#"<main><div data-slot="calendar"><p>grid</p></div></main>"#);
    mount.set_slot("calendar", "<p>next</p>");
    assert!(mount.html().contains("<p>next</p>"));
    assert!(!mount.html().contains("<p>grid</p>"));
  }

  #[test]
  fn set_html_drops_slots() {
    let mount = MemoryMount::new();
    mount.set_html(r#"<div data-slot="a"></div>"#);
    mount.set_slot("a", "x");
    mount.set_html(r#"<div data-slot="a"></div>"#);
    assert_eq!(mount.slot("a"), None);
  }

  #[test]
  fn language_swaps_rendered_text() {
    let mount = MemoryMount::new();
    mount.set_html(r#"<h1 data-zh="首页" data-en="Home">首页</h1>"#);
    mount.set_language("en");
    assert!(mount.html().contains(">Home</h1>"));
  }

  #[test]
  fn address_bar_tracks_last_path() {
    let bar = MemoryAddressBar::new("/calendar");
    assert_eq!(bar.location_path(), "/calendar");
    bar.push_state(HistoryState { route: RouteId::About, path: "/about".into(), title: "t".into() });
    assert_eq!(bar.location_path(), "/about");
    assert_eq!(bar.title().as_deref(), Some("t"));
  }
}
