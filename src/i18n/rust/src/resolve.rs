/* src/i18n/rust/src/resolve.rs */

use crate::language::Language;

/// Local-storage key holding the user's explicit language choice.
pub const LANGUAGE_STORAGE_KEY: &str = "app-language";

/// Resolve chain: stored preference -> host preference list -> default.
///
/// `preferred` uses `Accept-Language` syntax (`zh-CN,en;q=0.5`), which is
/// also what `navigator.languages` joins into.
pub fn resolve_language(
  stored: Option<&str>,
  preferred: Option<&str>,
  default: Language,
) -> Language {
  if let Some(lang) = stored.and_then(|s| s.trim().parse().ok()) {
    return lang;
  }
  if let Some(lang) = preferred.and_then(parse_preference_list) {
    return lang;
  }
  default
}

fn parse_preference_list(header: &str) -> Option<Language> {
  let mut entries: Vec<(&str, f64)> = Vec::new();
  for part in header.split(',') {
    let part = part.trim();
    if part.is_empty() {
      continue;
    }
    let mut segments = part.split(';');
    let tag = segments.next().unwrap_or("").trim();
    let mut q = 1.0_f64;
    for s in segments {
      if let Some(val) = s.trim().strip_prefix("q=") {
        if let Ok(v) = val.parse::<f64>() {
          q = v;
        }
      }
    }
    entries.push((tag, q));
  }

  entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

  entries.iter().find_map(|(tag, _)| {
    // Prefix match: zh-CN -> zh
    let primary = tag.split_once('-').map_or(*tag, |(p, _)| p);
    primary.to_ascii_lowercase().parse().ok()
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stored_preference_wins() {
    assert_eq!(resolve_language(Some("en"), Some("zh-CN"), Language::Zh), Language::En);
  }

  #[test]
  fn invalid_stored_value_falls_through() {
    assert_eq!(resolve_language(Some("fr"), Some("en-US"), Language::Zh), Language::En);
  }

  #[test]
  fn preference_list_prefix_match() {
    assert_eq!(resolve_language(None, Some("zh-TW,en;q=0.5"), Language::En), Language::Zh);
  }

  #[test]
  fn preference_list_q_value_priority() {
    assert_eq!(resolve_language(None, Some("zh;q=0.4,en;q=0.9"), Language::Zh), Language::En);
  }

  #[test]
  fn unknown_preferences_fall_back_to_default() {
    assert_eq!(resolve_language(None, Some("fr,de"), Language::Zh), Language::Zh);
    assert_eq!(resolve_language(None, Some(""), Language::En), Language::En);
    assert_eq!(resolve_language(None, None, Language::Zh), Language::Zh);
  }
}
