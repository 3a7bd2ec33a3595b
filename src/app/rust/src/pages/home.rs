/* src/app/rust/src/pages/home.rs */

use std::sync::Arc;

use chrono::Datelike;
use tokio::task::JoinHandle;
use tracing::debug;

use craft_calendar::{AnnotationStore, MonthGrid, YearMonth, generate_month, month_subtitle};
use craft_i18n::{Language, format_clock, month_name, weekday_long, weekday_short};
use craft_markup::{ClassList, bilingual};
use craft_router::{BoxFuture, PageContext, PageError, PageModule};

use super::PageServices;
use crate::timers::{CLOCK_TICK, spawn_ticker};

pub struct HomePage {
  ctx: PageContext,
  services: PageServices,
  rendered: bool,
  ticker: Option<JoinHandle<()>>,
}

impl HomePage {
  pub fn new(ctx: PageContext, services: PageServices) -> Self {
    Self { ctx, services, rendered: false, ticker: None }
  }

  fn fill_preview(&self) {
    let today = self.services.clock.today();
    let grid = generate_month(YearMonth::containing(today), today, today);
    self.ctx.container.set_slot("preview", &render_preview_card(&grid));
  }

  fn stop_ticker(&mut self) {
    if let Some(ticker) = self.ticker.take() {
      ticker.abort();
    }
  }
}

impl PageModule for HomePage {
  fn render(&mut self) -> BoxFuture<'_, Result<(), PageError>> {
    Box::pin(async move {
      if !self.rendered {
        self.ctx.container.set_html(&home_html());
        self.rendered = true;
      }
      Ok(())
    })
  }

  fn init(&mut self) -> BoxFuture<'_, Result<(), PageError>> {
    Box::pin(async move {
      self.fill_preview();
      self.stop_ticker();
      let container = self.ctx.container.clone();
      let clock = self.services.clock.clone();
      self.ticker = spawn_ticker(
        "home-clock",
        CLOCK_TICK,
        Arc::new(move || container.set_slot("hero-time", &format_clock(clock.now()))),
      );
      debug!("home page ready");
      Ok(())
    })
  }

  fn destroy(&mut self) {
    self.stop_ticker();
    debug!("home page destroyed");
  }
}

fn home_html() -> String {
  let tags: String = [
    ("🏮", "二十四节气", "24 Solar Terms"),
    ("🌍", "国际节日", "Global Holidays"),
    ("🎨", "个性定制", "Customization"),
    ("📱", "响应式设计", "Responsive Design"),
  ]
  .iter()
  .map(|(icon, zh, en)| {
    format!(
      r#"<div class="feature-tag"><span class="tag-icon">{icon}</span>{}</div>"#,
      bilingual("span", zh, en).class("tag-text")
    )
  })
  .collect();

  let cards: String = [
    ("features", "🏮", "传统节气", "Solar Terms", "完整的二十四节气信息，传承千年的时间智慧", "Complete 24 solar terms information, millennium-old time wisdom"),
    ("calendar", "📅", "智能日历", "Smart Calendar", "集成农历、节日、提醒的全功能日历系统", "Full-featured calendar system with lunar calendar, holidays, and reminders"),
    ("features", "🌍", "国际化", "Internationalization", "支持多语言界面和各国节日信息", "Multi-language interface and international holiday information"),
    ("features", "🎨", "个性定制", "Customization", "丰富的主题选项和个性化设置", "Rich theme options and personalization settings"),
  ]
  .iter()
  .map(|(route, icon, zh, en, zh_desc, en_desc)| {
    format!(
      r#"<div class="feature-card hover-lift" data-route="{route}"><div class="feature-icon">{icon}</div>{}{}</div>"#,
      bilingual("h3", zh, en).class("feature-title"),
      bilingual("p", zh_desc, en_desc).class("feature-description"),
    )
  })
  .collect();

  let stats: String = [
    ("24", "节气支持", "Solar Terms"),
    ("12", "年度节日", "Festivals"),
    ("2", "界面语言", "Languages"),
    ("4", "导出格式", "Export Formats"),
  ]
  .iter()
  .map(|(number, zh, en)| {
    format!(
      r#"<div class="stat-item"><div class="stat-number">{number}</div>{}</div>"#,
      bilingual("div", zh, en).class("stat-label")
    )
  })
  .collect();

  format!(
    concat!(
      r#"<div class="page-view home-view">"#,
      r#"<section class="hero-section"><div class="hero-content">"#,
      r#"<div class="greeting-section">{greeting}<p class="greeting-time" data-slot="hero-time"></p></div>"#,
      r#"<h1 class="main-title">{title}{subtitle}</h1>"#,
      r#"<div class="description-section">{description}</div>"#,
      r#"<div class="action-buttons">"#,
      r#"<button class="btn-primary hero-btn" data-route="calendar">{start}</button>"#,
      r#"<button class="btn-secondary hero-btn" data-route="features">{explore}</button>"#,
      r#"</div><div class="feature-tags">{tags}</div></div>"#,
      r#"<div class="hero-preview"><div class="calendar-preview-card" data-route="calendar" data-slot="preview"></div></div>"#,
      r#"</section>"#,
      r#"<section class="features-overview"><div class="section-header">{core}{core_sub}</div><div class="features-grid">{cards}</div></section>"#,
      r#"<section class="stats-section"><div class="stats-grid">{stats}</div></section>"#,
      r#"</div>"#,
    ),
    greeting = bilingual("span", "欢迎回来", "Welcome back").class("badge-text"),
    title = bilingual("span", "日历工艺", "CalendarCraft").class("title-primary"),
    subtitle = bilingual("span", "融合传统与现代的时间艺术", "The Art of Time, Bridging Tradition and Modernity")
      .class("title-secondary"),
    description = bilingual(
      "p",
      "将中华传统节气与现代日历完美融合，创造属于您的个性化时间管理工具。",
      "Blending Chinese traditional solar terms with the modern calendar into a personal time tool.",
    )
    .class("description-text"),
    start = bilingual("span", "开始使用", "Get Started").class("btn-text"),
    explore = bilingual("span", "探索功能", "Explore Features").class("btn-text"),
    tags = tags,
    core = bilingual("h2", "核心功能", "Core Features").class("section-title"),
    core_sub = bilingual("p", "精心设计的功能，让时间管理更加优雅", "Thoughtfully designed features for elegant time management")
      .class("section-subtitle"),
    cards = cards,
    stats = stats,
  )
}

/// Header, mini grid and today highlight for the home preview card.
fn render_preview_card(grid: &MonthGrid) -> String {
  let month = grid.month + 1;
  let zh_month = month_name(Language::Zh, month).unwrap_or_default();
  let en_month = month_name(Language::En, month).unwrap_or_default();
  let title_zh = format!("{zh_month} {}", grid.year);
  let title_en = format!("{en_month} {}", grid.year);
  let subtitle = month_subtitle(AnnotationStore::builtin(), grid.year, month);

  let today = grid
    .current_days()
    .find(|d| d.is_today)
    .map(|day| {
      let weekday = day.date.weekday();
      let lunar = day
        .lunar
        .map(|l| format!(r#"<span class="today-lunar">{}</span>"#, l.month_day()))
        .unwrap_or_default();
      format!(
        r#"<div class="today-highlight">{}<span class="today-date">{}</span><div class="today-details">{}{lunar}</div></div>"#,
        bilingual("span", "今日", "Today").class("today-label"),
        day.day,
        bilingual("span", weekday_long(Language::Zh, weekday), weekday_long(Language::En, weekday))
          .class("today-weekday"),
      )
    })
    .unwrap_or_default();

  format!(
    r#"<div class="preview-header">{}<div class="preview-subtitle">{subtitle}</div></div><div class="preview-calendar">{}</div><div class="preview-footer">{today}</div>"#,
    bilingual("div", &title_zh, &title_en).class("preview-title"),
    render_preview(grid),
  )
}

/// Compact month grid: weekday initials and day numbers only.
pub fn render_preview(grid: &MonthGrid) -> String {
  let weekdays: String = grid
    .week_start
    .weekdays()
    .iter()
    .map(|w| format!(r#"<div class="preview-weekday">{}</div>"#, weekday_short(Language::Zh, *w)))
    .collect();
  let dates: String = grid
    .days()
    .map(|day| {
      if !day.is_current_month() {
        return r#"<div class="preview-date empty"></div>"#.to_string();
      }
      let classes = ClassList::new("preview-date")
        .add_if(day.is_today, "today")
        .add_if(day.solar_term.is_some(), "solar-term")
        .add_if(day.festival.is_some(), "festival");
      format!(r#"<div class="{classes}">{}</div>"#, day.day)
    })
    .collect();
  format!(r#"<div class="preview-weekdays">{weekdays}</div><div class="preview-dates">{dates}</div>"#)
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use craft_router::RouteId;

  use super::*;
  use crate::pages::fixture;

  fn august() -> MonthGrid {
    let today = NaiveDate::from_ymd_opt(2025, 8, 8).unwrap();
    generate_month(YearMonth::new(2025, 7).unwrap(), today, today)
  }

  #[test]
  fn preview_marks_annotated_days() {
    let html = render_preview(&august());
    assert!(html.contains(r#"<div class="preview-date today">8</div>"#));
    assert!(html.contains(r#"<div class="preview-date solar-term">7</div>"#));
    assert!(html.contains(r#"<div class="preview-date festival">13</div>"#));
    assert_eq!(html.matches("preview-date empty").count(), 11);
  }

  #[test]
  fn preview_card_has_title_and_today() {
    let html = render_preview_card(&august());
    assert!(html.contains(r#"data-zh="八月 2025" data-en="August 2025""#));
    assert!(html.contains("立秋 · 处暑"));
    assert!(html.contains(r#"<span class="today-date">8</span>"#));
    assert!(html.contains("七月初四"));
  }

  #[test]
  fn home_markup_has_slots_and_routes() {
    let html = home_html();
    assert!(html.contains(r#"data-slot="hero-time""#));
    assert!(html.contains(r#"data-slot="preview""#));
    assert!(html.contains(r#"data-route="calendar""#));
    assert!(html.starts_with(r#"<div class="page-view home-view">"#));
  }

  #[tokio::test(start_paused = true)]
  async fn render_twice_keeps_filled_slots() {
    let (mount, ctx) = fixture::context(RouteId::Home);
    let mut page = HomePage::new(ctx, fixture::services());
    page.render().await.unwrap();
    page.init().await.unwrap();
    tokio::time::sleep(CLOCK_TICK / 2).await;
    let filled = mount.html();
    page.render().await.unwrap();
    assert_eq!(mount.html(), filled);
    assert!(mount.slot("preview").is_some());
    assert_eq!(mount.slot("hero-time").as_deref(), Some("2025-08-08 09:30:00"));
    page.destroy();
  }

  #[tokio::test(start_paused = true)]
  async fn init_again_replaces_the_clock_ticker() {
    let (_mount, ctx) = fixture::context(RouteId::Home);
    let mut page = HomePage::new(ctx, fixture::services());
    page.render().await.unwrap();
    page.init().await.unwrap();
    let first = page.ticker.as_ref().unwrap().abort_handle();
    page.init().await.unwrap();
    tokio::task::yield_now().await;
    assert!(first.is_finished());
    assert!(page.ticker.is_some());
    page.destroy();
    assert!(page.ticker.is_none());
  }
}
