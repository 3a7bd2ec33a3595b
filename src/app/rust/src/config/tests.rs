/* src/app/rust/src/config/tests.rs */

use std::fs;

use craft_calendar::WeekStart;
use craft_i18n::Language;

use super::*;

#[test]
fn empty_file_gives_defaults() {
  let config: CraftConfig = toml::from_str("").unwrap();
  assert_eq!(config, CraftConfig::default());
  assert_eq!(config.router.transition_ms, 800);
  assert_eq!(config.router.history_limit, 50);
  assert!(config.calendar.show_lunar);
}

#[test]
fn sections_override_defaults() {
  let config: CraftConfig = toml::from_str(
    r#"
[router]
transition_ms = 300

[calendar]
week_start = "monday"
show_lunar = false

[i18n]
default = "en"
"#,
  )
  .unwrap();
  assert_eq!(config.router.transition_ms, 300);
  assert_eq!(config.router.history_keep, 25);
  assert_eq!(config.calendar.week_start, WeekStart::Monday);
  assert!(!config.calendar.show_lunar);
  assert!(config.calendar.show_festivals);
  assert_eq!(config.i18n.default, Language::En);
}

#[test]
fn discovers_config_in_parent_directory() {
  let tmp = tempfile::tempdir().unwrap();
  fs::write(tmp.path().join(CONFIG_FILE_NAME), "[i18n]\ndefault = \"en\"\n").unwrap();
  let nested = tmp.path().join("a/b");
  fs::create_dir_all(&nested).unwrap();

  let found = find_craft_config(&nested).unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join(CONFIG_FILE_NAME));

  let (path, config) = load_or_default(None, &nested).unwrap();
  assert!(path.is_some());
  assert_eq!(config.i18n.default, Language::En);
}

#[test]
fn missing_config_falls_back_to_defaults() {
  let tmp = tempfile::tempdir().unwrap();
  let (path, config) = load_or_default(None, tmp.path()).unwrap();
  assert!(path.is_none());
  assert_eq!(config, CraftConfig::default());
}

#[test]
fn explicit_missing_file_is_an_error() {
  let tmp = tempfile::tempdir().unwrap();
  let err = load_or_default(Some(&tmp.path().join("nope.toml")), tmp.path()).unwrap_err();
  assert!(err.to_string().contains("failed to read"));
}

#[test]
fn rejects_keep_above_limit() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join(CONFIG_FILE_NAME);
  fs::write(&path, "[router]\nhistory_limit = 10\nhistory_keep = 20\n").unwrap();
  let err = load_craft_config(&path).unwrap_err();
  assert!(err.to_string().contains("history_keep"));
}

#[test]
fn invalid_toml_reports_path() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join(CONFIG_FILE_NAME);
  fs::write(&path, "[router\n").unwrap();
  let err = load_craft_config(&path).unwrap_err();
  assert!(err.to_string().contains("failed to parse"));
}
