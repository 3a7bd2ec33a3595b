/* src/markup/rust/src/bilingual.rs */

use std::fmt;

use crate::escape::escape_html;

/// An element carrying both translations in `data-zh` / `data-en`.
/// The visible text starts as Chinese; the language layer swaps it in place.
#[derive(Debug, Clone, Copy)]
pub struct Bilingual<'a> {
  tag: &'a str,
  class: Option<&'a str>,
  zh: &'a str,
  en: &'a str,
}

pub fn bilingual<'a>(tag: &'a str, zh: &'a str, en: &'a str) -> Bilingual<'a> {
  Bilingual { tag, class: None, zh, en }
}

impl<'a> Bilingual<'a> {
  pub fn class(mut self, class: &'a str) -> Self {
    self.class = Some(class);
    self
  }
}

impl fmt::Display for Bilingual<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let zh = escape_html(self.zh);
    let en = escape_html(self.en);
    write!(f, "<{}", self.tag)?;
    if let Some(class) = self.class {
      write!(f, " class=\"{}\"", escape_html(class))?;
    }
    write!(f, " data-zh=\"{zh}\" data-en=\"{en}\">{zh}</{}>", self.tag)
  }
}
