/* src/app/rust/src/titles.rs */

use craft_i18n::Language;
use craft_router::RouteId;

pub fn page_title(route: RouteId, lang: Language) -> &'static str {
  match (route, lang) {
    (RouteId::Home, Language::Zh) => "日历工艺 · CalendarCraft",
    (RouteId::Home, Language::En) => "CalendarCraft · Home",
    (RouteId::Calendar, Language::Zh) => "智能日历 · CalendarCraft",
    (RouteId::Calendar, Language::En) => "Smart Calendar · CalendarCraft",
    (RouteId::Features, Language::Zh) => "功能特色 · CalendarCraft",
    (RouteId::Features, Language::En) => "Features · CalendarCraft",
    (RouteId::About, Language::Zh) => "关于我们 · CalendarCraft",
    (RouteId::About, Language::En) => "About Us · CalendarCraft",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn chinese_titles_match_router_defaults() {
    for route in RouteId::ALL {
      assert_eq!(page_title(route, Language::Zh), route.default_title());
    }
  }

  #[test]
  fn english_titles() {
    assert_eq!(page_title(RouteId::About, Language::En), "About Us · CalendarCraft");
  }
}
