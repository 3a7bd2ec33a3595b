/* src/i18n/rust/src/manager.rs */

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{info, warn};

use crate::language::Language;

/// Called with `(new, previous)` after the language actually changed.
pub type LanguageListener = Arc<dyn Fn(Language, Language) + Send + Sync>;

/// Holds the active language and fans changes out to listeners.
/// Shared as `Arc<LanguageManager>` with every component that renders text.
pub struct LanguageManager {
  current: RwLock<Language>,
  listeners: Mutex<Vec<LanguageListener>>,
}

impl LanguageManager {
  pub fn new(initial: Language) -> Self {
    Self { current: RwLock::new(initial), listeners: Mutex::new(Vec::new()) }
  }

  pub fn current(&self) -> Language {
    *self.current.read().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn subscribe(&self, listener: LanguageListener) {
    self.listeners.lock().unwrap_or_else(PoisonError::into_inner).push(listener);
  }

  /// Switch to `lang`. Returns true when `lang` is now active; listeners
  /// only run when it differs from the previous language.
  pub fn set_language(&self, lang: Language) -> bool {
    let previous = {
      let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
      if *current == lang {
        return true;
      }
      std::mem::replace(&mut *current, lang)
    };

    info!(from = %previous, to = %lang, "language switched");
    let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner).clone();
    for listener in &listeners {
      listener(lang, previous);
    }
    true
  }

  /// Like [`set_language`](Self::set_language) but from a raw code.
  pub fn set_language_code(&self, code: &str) -> bool {
    match code.parse() {
      Ok(lang) => self.set_language(lang),
      Err(err) => {
        warn!(%err, "ignoring language change");
        false
      }
    }
  }

  pub fn toggle(&self) -> bool {
    self.set_language(self.current().toggle())
  }

  pub fn is_supported(code: &str) -> bool {
    code.parse::<Language>().is_ok()
  }
}

impl Default for LanguageManager {
  fn default() -> Self {
    Self::new(Language::default())
  }
}
