/* src/app/rust/src/config/types.rs */

use serde::Deserialize;

use craft_calendar::CalendarConfig;
use craft_i18n::Language;
use craft_router::RouterConfig;

/// Contents of `craft.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CraftConfig {
  pub router: RouterConfig,
  pub calendar: CalendarConfig,
  pub i18n: I18nSection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct I18nSection {
  /// Language used when neither storage nor the host expresses a preference.
  pub default: Language,
}
