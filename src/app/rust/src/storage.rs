/* src/app/rust/src/storage.rs */

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// String key/value store with local-storage semantics.
pub trait Storage: Send + Sync {
  fn get(&self, key: &str) -> Option<String>;
  fn set(&self, key: &str, value: &str);
  fn remove(&self, key: &str);
}

#[derive(Default)]
pub struct MemoryStorage {
  items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
    let items = items.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    Self { items: Mutex::new(items) }
  }
}

impl Storage for MemoryStorage {
  fn get(&self, key: &str) -> Option<String> {
    self.items.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
  }

  fn set(&self, key: &str, value: &str) {
    self.items.lock().unwrap_or_else(PoisonError::into_inner).insert(key.into(), value.into());
  }

  fn remove(&self, key: &str) {
    self.items.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
  }
}
