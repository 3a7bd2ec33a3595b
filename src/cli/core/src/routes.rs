/* src/cli/core/src/routes.rs */

use craft_app::page_title;
use craft_i18n::Language;
use craft_router::RouteId;

use crate::ui::{BOLD, DIM, RESET};

/// One line per route: name, path and both titles.
pub fn route_table() -> Vec<String> {
  RouteId::ALL
    .iter()
    .map(|route| {
      format!(
        "{BOLD}{:<10}{RESET} {:<11} {}  {DIM}{}{RESET}",
        route.name(),
        route.path(),
        page_title(*route, Language::Zh),
        page_title(*route, Language::En),
      )
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lists_every_route() {
    let table = route_table();
    assert_eq!(table.len(), RouteId::ALL.len());
    assert!(table[0].contains("home"));
    assert!(table.iter().any(|line| line.contains("/calendar") && line.contains("Smart Calendar")));
  }
}
