/* src/markup/rust/src/class.rs */

use std::fmt;

/// Space-separated `class` attribute value. Empty names are skipped so
/// conditional classes can be chained without leaving double spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
  names: Vec<String>,
}

impl ClassList {
  pub fn new(base: &str) -> Self {
    let mut list = Self::default();
    list.push(base);
    list
  }

  pub fn add(mut self, name: &str) -> Self {
    self.push(name);
    self
  }

  pub fn add_if(self, cond: bool, name: &str) -> Self {
    if cond { self.add(name) } else { self }
  }

  pub fn contains(&self, name: &str) -> bool {
    self.names.iter().any(|n| n == name)
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  fn push(&mut self, name: &str) {
    let name = name.trim();
    if !name.is_empty() && !self.contains(name) {
      self.names.push(name.to_string());
    }
  }
}

impl fmt::Display for ClassList {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.names.join(" "))
  }
}
