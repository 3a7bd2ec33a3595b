/* src/app/rust/src/pages/features.rs */

use craft_markup::bilingual;
use craft_router::{BoxFuture, PageContext, PageError, PageModule};

const FEATURES: &[(&str, &str, &str, &str, &str)] = &[
  (
    "🏮",
    "二十四节气",
    "24 Solar Terms",
    "每个节气都标注在日历上，并附有中英文名称。",
    "Every solar term is marked on the grid with its Chinese and English name.",
  ),
  (
    "🎉",
    "传统与国际节日",
    "Traditional & Global Festivals",
    "春节、清明、七夕、中秋与国际节日一并呈现。",
    "Spring Festival, Qingming, Qixi and Mid-Autumn alongside international holidays.",
  ),
  (
    "🌙",
    "农历信息",
    "Lunar Calendar",
    "显示农历日期、干支年份与生肖。",
    "Lunar dates with the stem-branch year and zodiac.",
  ),
  (
    "📤",
    "多格式导出",
    "Multi-format Export",
    "导出为文本、CSV、iCal 或 JSON。",
    "Export a month as plain text, CSV, iCal or JSON.",
  ),
  (
    "🌐",
    "中英双语",
    "Bilingual Interface",
    "随时在中文与英文之间切换，偏好会被记住。",
    "Switch between Chinese and English at any time; the choice is remembered.",
  ),
  (
    "⌨️",
    "键盘快捷键",
    "Keyboard Shortcuts",
    "无需鼠标即可在页面之间切换。",
    "Move between pages without touching the mouse.",
  ),
];

pub struct FeaturesPage {
  ctx: PageContext,
  rendered: bool,
}

impl FeaturesPage {
  pub fn new(ctx: PageContext) -> Self {
    Self { ctx, rendered: false }
  }
}

impl PageModule for FeaturesPage {
  fn render(&mut self) -> BoxFuture<'_, Result<(), PageError>> {
    Box::pin(async move {
      if !self.rendered {
        self.ctx.container.set_html(&features_html());
        self.rendered = true;
      }
      Ok(())
    })
  }

  fn destroy(&mut self) {}
}

fn features_html() -> String {
  let cards: String = FEATURES
    .iter()
    .map(|(icon, zh, en, zh_desc, en_desc)| {
      format!(
        r#"<div class="feature-detail-card hover-lift"><div class="feature-icon">{icon}</div>{}{}</div>"#,
        bilingual("h3", zh, en).class("feature-title"),
        bilingual("p", zh_desc, en_desc).class("feature-description"),
      )
    })
    .collect();
  format!(
    r#"<div class="page-view features-view"><header class="page-header">{}{}</header><div class="features-detail-grid">{cards}</div><div class="page-actions"><button class="btn-primary" data-route="calendar">{}</button></div></div>"#,
    bilingual("h1", "功能特色", "Features").class("page-title"),
    bilingual("p", "传统智慧与现代体验的结合", "Traditional wisdom meets a modern experience")
      .class("page-subtitle"),
    bilingual("span", "立即体验", "Try it now"),
  )
}
