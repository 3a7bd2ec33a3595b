/* src/markup/rust/src/localize.rs */

/// Swap the text of every bilingual element to the language `code`
/// (`"zh"` or `"en"`). Only the text run directly after the opening tag is
/// replaced, matching how [`crate::bilingual`] lays elements out.
/// Attribute values are already escaped, so they are copied verbatim.
pub fn localize(html: &str, code: &str) -> String {
  let needle = format!(" data-{code}=\"");
  let mut out = String::with_capacity(html.len());
  let mut rest = html;

  while let Some(open) = rest.find('<') {
    let Some(close) = rest[open..].find('>').map(|i| open + i) else { break };
    let tag = &rest[open..=close];
    out.push_str(&rest[..=close]);
    rest = &rest[close + 1..];

    if tag.starts_with("</") || !is_bilingual(tag) {
      continue;
    }
    let Some(value) = attr_value(tag, &needle) else { continue };
    let text_end = rest.find('<').unwrap_or(rest.len());
    out.push_str(value);
    rest = &rest[text_end..];
  }
  out.push_str(rest);
  out
}

fn is_bilingual(tag: &str) -> bool {
  tag.contains(" data-zh=\"") && tag.contains(" data-en=\"")
}

fn attr_value<'a>(tag: &'a str, needle: &str) -> Option<&'a str> {
  let start = tag.find(needle)? + needle.len();
  let len = tag[start..].find('"')?;
  Some(&tag[start..start + len])
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bilingual;

  #[test]
  fn swaps_text_to_english() {
    let html = format!("<nav>{}</nav>", bilingual("a", "首页", "Home").class("nav-link"));
    assert_eq!(
      localize(&html, "en"),
      r#"<nav><a class="nav-link" data-zh="首页" data-en="Home">Home</a></nav>"#
    );
  }

  #[test]
  fn swapping_back_restores_chinese() {
    let html = bilingual("span", "节日", "Festivals").to_string();
    assert_eq!(localize(&localize(&html, "en"), "zh"), html);
  }

  #[test]
  fn keeps_child_elements_and_plain_tags() {
    let html = r#"<p data-zh="你好" data-en="Hi">你好<b>!</b></p><p>固定</p>"#;
    assert_eq!(
      localize(html, "en"),
      r#"<p data-zh="你好" data-en="Hi">Hi<b>!</b></p><p>固定</p>"#
    );
  }

  #[test]
  fn escaped_values_stay_escaped() {
    let html = bilingual("span", "甲", "A & B").to_string();
    assert!(localize(&html, "en").ends_with(">A &amp; B</span>"));
  }

  #[test]
  fn unknown_code_leaves_text() {
    let html = bilingual("span", "甲", "A").to_string();
    assert_eq!(localize(&html, "fr"), html);
  }
}
