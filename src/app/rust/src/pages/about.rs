/* src/app/rust/src/pages/about.rs */

use craft_markup::bilingual;
use craft_router::{BoxFuture, PageContext, PageError, PageModule};

use crate::shortcuts::render_shortcuts_list;
use crate::state::APP_VERSION;

pub struct AboutPage {
  ctx: PageContext,
  rendered: bool,
}

impl AboutPage {
  pub fn new(ctx: PageContext) -> Self {
    Self { ctx, rendered: false }
  }
}

impl PageModule for AboutPage {
  fn render(&mut self) -> BoxFuture<'_, Result<(), PageError>> {
    Box::pin(async move {
      if !self.rendered {
        self.ctx.container.set_html(&about_html());
        self.rendered = true;
      }
      Ok(())
    })
  }

  fn destroy(&mut self) {}
}

fn about_html() -> String {
  format!(
    concat!(
      r#"<div class="page-view about-view">"#,
      r#"<header class="page-header">{title}{subtitle}</header>"#,
      r#"<section class="about-card">{mission_title}{mission}</section>"#,
      r#"<section class="about-card">{shortcuts_title}{shortcuts}</section>"#,
      r#"<footer class="about-footer">{version_label}<span class="app-version">v{version}</span></footer>"#,
      r#"</div>"#,
    ),
    title = bilingual("h1", "关于我们", "About").class("page-title"),
    subtitle = bilingual("p", "让时间更有温度", "Making time feel warmer").class("page-subtitle"),
    mission_title = bilingual("h2", "我们的初衷", "Our Mission").class("section-title"),
    mission = bilingual(
      "p",
      "日历工艺把二十四节气、传统节日和农历带进日常的日程安排中。",
      "CalendarCraft brings the solar terms, traditional festivals and the lunar calendar into everyday planning.",
    )
    .class("about-text"),
    shortcuts_title = bilingual("h2", "键盘快捷键", "Keyboard Shortcuts").class("section-title"),
    shortcuts = render_shortcuts_list(),
    version_label = bilingual("span", "版本", "Version").class("version-label"),
    version = APP_VERSION,
  )
}
