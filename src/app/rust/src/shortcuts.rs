/* src/app/rust/src/shortcuts.rs */

use craft_markup::bilingual;
use craft_router::RouteId;

/// A key event as the host reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
  pub key: String,
  pub ctrl: bool,
  pub meta: bool,
  /// Focus is in an input, textarea or select.
  pub in_input: bool,
}

impl KeyPress {
  pub fn new(key: impl Into<String>) -> Self {
    Self { key: key.into(), ctrl: false, meta: false, in_input: false }
  }

  pub fn ctrl(mut self) -> Self {
    self.ctrl = true;
    self
  }

  pub fn meta(mut self) -> Self {
    self.meta = true;
    self
  }

  pub fn typing(mut self) -> Self {
    self.in_input = true;
    self
  }

  fn modified(&self) -> bool {
    self.ctrl || self.meta
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
  Navigate(RouteId),
  ToggleLanguage,
  ToggleShortcutsPanel,
  /// Close the shortcuts panel, or go home when it is closed.
  Escape,
  /// Context action for the current page.
  QuickAction,
}

pub fn shortcut_for(press: &KeyPress) -> Option<Shortcut> {
  if press.in_input {
    return None;
  }
  let plain = !press.modified();
  match press.key.to_lowercase().as_str() {
    "h" if plain => Some(Shortcut::Navigate(RouteId::Home)),
    "c" if plain => Some(Shortcut::Navigate(RouteId::Calendar)),
    "f" if plain => Some(Shortcut::Navigate(RouteId::Features)),
    "l" if plain => Some(Shortcut::ToggleLanguage),
    "?" if plain => Some(Shortcut::ToggleShortcutsPanel),
    "escape" => Some(Shortcut::Escape),
    "enter" if !plain => Some(Shortcut::QuickAction),
    _ => None,
  }
}

/// Key label with its Chinese and English descriptions.
pub const SHORTCUT_HELP: &[(&str, &str, &str)] = &[
  ("H", "返回首页", "Go to home"),
  ("C", "打开日历", "Open calendar"),
  ("F", "查看功能", "View features"),
  ("L", "切换语言", "Switch language"),
  ("?", "显示快捷键", "Show shortcuts"),
  ("Esc", "关闭面板 / 返回首页", "Close panel / go home"),
  ("Ctrl+Enter", "快速操作", "Quick action"),
];

pub fn render_shortcuts_list() -> String {
  let items: String = SHORTCUT_HELP
    .iter()
    .map(|(key, zh, en)| {
      format!(
        r#"<li class="shortcut-item"><kbd>{key}</kbd>{}</li>"#,
        bilingual("span", zh, en).class("shortcut-desc")
      )
    })
    .collect();
  format!(r#"<ul class="shortcut-list">{items}</ul>"#)
}
