/* src/cli/core/src/render.rs */

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::warn;

use craft_app::{App, CraftConfig, FixedClock, Host, MemoryDocument, MemoryStorage};
use craft_i18n::{LANGUAGE_STORAGE_KEY, Language};
use craft_router::{Immediate, MemoryAddressBar, MemoryMount, Navigation, RouteId};

/// Mounted HTML and document title after a headless navigation.
pub struct Rendered {
  pub html: String,
  pub title: String,
  pub navigation: Navigation,
}

/// Boot the app against in-memory host seams at the path for `route` and
/// return what ends up mounted. Unknown routes go through the normal
/// fallback and render home.
pub async fn render_route(
  route: &str,
  lang: Language,
  now: NaiveDateTime,
  config: CraftConfig,
) -> Rendered {
  let path = RouteId::parse(route).map_or_else(|| format!("/{route}"), RouteId::path);
  let mount = Arc::new(MemoryMount::new());
  let document = Arc::new(MemoryDocument::new());
  let host = Host {
    mount: mount.clone(),
    address: Arc::new(MemoryAddressBar::new(path)),
    document: document.clone(),
    storage: Arc::new(MemoryStorage::with_items([(LANGUAGE_STORAGE_KEY, lang.code())])),
    clock: Arc::new(FixedClock(now)),
    preferred_languages: None,
    prefers_dark: false,
  };
  let app = App::builder(host).config(config).delay(Arc::new(Immediate)).build();
  let navigation = app.start().await;
  if !navigation.succeeded() {
    warn!(route, ?navigation, "route did not render as requested");
  }
  let rendered = Rendered { html: mount.html(), title: document.snapshot().title, navigation };
  app.destroy();
  rendered
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, 8).unwrap().and_hms_opt(9, 0, 0).unwrap()
  }

  #[tokio::test]
  async fn renders_calendar_in_english() {
    let out = render_route("calendar", Language::En, now(), CraftConfig::default()).await;
    assert_eq!(out.navigation, Navigation::Committed);
    assert_eq!(out.title, "Smart Calendar · CalendarCraft");
    assert!(out.html.contains("calendar-view"));
    assert!(out.html.contains(">Smart Calendar</h1>"));
    assert!(out.html.contains(">Friday</span>"));
  }

  #[tokio::test]
  async fn unknown_route_falls_back_home() {
    let out = render_route("nope", Language::Zh, now(), CraftConfig::default()).await;
    assert!(matches!(out.navigation, Navigation::FellBack(_)));
    assert!(out.html.contains("home-view"));
  }
}
