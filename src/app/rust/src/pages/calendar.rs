/* src/app/rust/src/pages/calendar.rs */

use std::sync::Arc;

use chrono::Datelike;
use tokio::task::JoinHandle;
use tracing::debug;

use craft_calendar::{CalendarDay, CalendarWidget};
use craft_i18n::{DateStyle, Language, format_date, weekday_long};
use craft_markup::{bilingual, escape_html};
use craft_router::{BoxFuture, MountPoint, PageContext, PageError, PageModule};

use super::PageServices;
use crate::timers::{STATE_SYNC, spawn_ticker};

pub struct CalendarPage {
  ctx: PageContext,
  services: PageServices,
  rendered: bool,
  ticker: Option<JoinHandle<()>>,
}

impl CalendarPage {
  pub fn new(ctx: PageContext, services: PageServices) -> Self {
    Self { ctx, services, rendered: false, ticker: None }
  }

  fn stop_ticker(&mut self) {
    if let Some(ticker) = self.ticker.take() {
      ticker.abort();
    }
  }
}

impl PageModule for CalendarPage {
  fn render(&mut self) -> BoxFuture<'_, Result<(), PageError>> {
    Box::pin(async move {
      if !self.rendered {
        self.ctx.container.set_html(&calendar_html());
        self.rendered = true;
      }
      Ok(())
    })
  }

  fn init(&mut self) -> BoxFuture<'_, Result<(), PageError>> {
    Box::pin(async move {
      {
        let mut widget = self.services.calendar();
        widget.refresh_today(self.services.clock.today());
        render_calendar_slots(self.ctx.container.as_ref(), &widget);
      }

      // Midnight rollover while the page stays open.
      self.stop_ticker();
      let container = self.ctx.container.clone();
      let services = self.services.clone();
      self.ticker = spawn_ticker(
        "calendar-refresh",
        STATE_SYNC,
        Arc::new(move || {
          let mut widget = services.calendar();
          if widget.refresh_today(services.clock.today()) {
            debug!(today = %widget.today(), "calendar day rolled over");
            render_calendar_slots(container.as_ref(), &widget);
          }
        }),
      );
      debug!("calendar page ready");
      Ok(())
    })
  }

  fn destroy(&mut self) {
    self.stop_ticker();
    debug!("calendar page destroyed");
  }
}

/// Fill the widget and today-info slots from the current widget state.
pub fn render_calendar_slots(container: &dyn MountPoint, widget: &CalendarWidget) {
  container.set_slot("calendar", &widget.render_html());
  container.set_slot("today-info", &render_today_info(&widget.day_info(widget.today())));
}

pub fn render_today_info(day: &CalendarDay) -> String {
  let weekday = day.date.weekday();
  let mut rows = vec![
    format!(
      r#"<div class="info-row">{}{}</div>"#,
      bilingual("span", "日期", "Date").class("info-label"),
      bilingual(
        "span",
        &format_date(Language::Zh, day.date, DateStyle::Full),
        &format_date(Language::En, day.date, DateStyle::Full),
      )
      .class("info-value"),
    ),
    format!(
      r#"<div class="info-row">{}{}</div>"#,
      bilingual("span", "星期", "Weekday").class("info-label"),
      bilingual("span", weekday_long(Language::Zh, weekday), weekday_long(Language::En, weekday))
        .class("info-value"),
    ),
  ];
  if let Some(term) = day.solar_term {
    rows.push(format!(
      r#"<div class="info-row solar-term">{}{}</div>"#,
      bilingual("span", "节气", "Solar Term").class("info-label"),
      bilingual("span", term.zh(), term.en()).class("info-value"),
    ));
  }
  if let Some(festival) = day.festival {
    rows.push(format!(
      r#"<div class="info-row festival">{}{}</div>"#,
      bilingual("span", "节日", "Festival").class("info-label"),
      bilingual("span", festival.zh, festival.en).class("info-value"),
    ));
  }
  if let Some(lunar) = day.lunar {
    rows.push(format!(
      r#"<div class="info-row lunar">{}<span class="info-value">{}{} ({}年 {})</span></div>"#,
      bilingual("span", "农历", "Lunar").class("info-label"),
      lunar.year,
      escape_html(&lunar.month_day()),
      lunar.zodiac,
      lunar.element,
    ));
  }
  rows.concat()
}

fn calendar_html() -> String {
  let formats = [("text", "文本", "Text"), ("csv", "CSV", "CSV"), ("ics", "iCal", "iCal"), ("json", "JSON", "JSON")];
  let exports: String = formats
    .iter()
    .map(|(format, zh, en)| {
      format!(
        r#"<button class="export-btn" data-action="export" data-format="{format}">{}</button>"#,
        bilingual("span", zh, en)
      )
    })
    .collect();

  format!(
    concat!(
      r#"<div class="page-view calendar-view">"#,
      r#"<header class="page-header">{title}{subtitle}</header>"#,
      r#"<div class="calendar-layout">"#,
      r#"<section class="calendar-main" data-slot="calendar"></section>"#,
      r#"<aside class="calendar-sidebar">"#,
      r#"<div class="sidebar-card">{today}<div class="today-info" data-slot="today-info"></div></div>"#,
      r#"<div class="sidebar-card">{export}<div class="export-actions">{exports}</div></div>"#,
      r#"<div class="sidebar-card">{hint}</div>"#,
      r#"</aside></div></div>"#,
    ),
    title = bilingual("h1", "智能日历", "Smart Calendar").class("page-title"),
    subtitle = bilingual("p", "节气、节日与农历一目了然", "Solar terms, festivals and lunar dates at a glance")
      .class("page-subtitle"),
    today = bilingual("h3", "今日信息", "Today").class("card-title"),
    export = bilingual("h3", "导出日历", "Export").class("card-title"),
    exports = exports,
    hint = bilingual("p", "按 Ctrl+Enter 快速导出", "Press Ctrl+Enter to export quickly").class("card-hint"),
  )
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use craft_calendar::{CalendarConfig, GridOptions, day_info};
  use craft_router::RouteId;

  use super::*;
  use crate::pages::fixture;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn today_info_lists_annotations() {
    let day = day_info(date(2025, 8, 8), date(2025, 8, 8), date(2025, 8, 8), &GridOptions::default());
    let html = render_today_info(&day);
    assert!(html.contains("2025年8月8日"));
    assert!(html.contains(r#"data-en="Friday""#));
    assert!(html.contains("七月初四"));
    assert!(html.contains("乙巳年"));
    assert!(!html.contains("info-row solar-term"));
  }

  #[test]
  fn today_info_on_a_solar_term() {
    let day = day_info(date(2025, 8, 7), date(2025, 8, 7), date(2025, 8, 7), &GridOptions::default());
    let html = render_today_info(&day);
    assert!(html.contains(r#"data-zh="立秋" data-en="Beginning of Autumn""#));
  }

  #[test]
  fn slots_filled_from_widget() {
    let mount = craft_router::MemoryMount::new();
    mount.set_html(&calendar_html());
    let widget = CalendarWidget::new(date(2025, 8, 8), CalendarConfig::default());
    render_calendar_slots(&mount, &widget);
    assert!(mount.slot("calendar").unwrap().contains("八月 2025"));
    assert!(mount.html().contains(r#"data-slot="today-info"><div class="info-row">"#));
  }

  #[test]
  fn layout_offers_every_export_format() {
    let html = calendar_html();
    for format in ["text", "csv", "ics", "json"] {
      assert!(html.contains(&format!(r#"data-format="{format}""#)));
    }
  }

  #[tokio::test(start_paused = true)]
  async fn render_twice_keeps_filled_slots() {
    let (mount, ctx) = fixture::context(RouteId::Calendar);
    let mut page = CalendarPage::new(ctx, fixture::services());
    page.render().await.unwrap();
    page.init().await.unwrap();
    let filled = mount.html();
    page.render().await.unwrap();
    assert_eq!(mount.html(), filled);
    assert!(mount.slot("calendar").unwrap().contains("八月 2025"));
    assert!(mount.slot("today-info").is_some());
    page.destroy();
  }

  #[tokio::test(start_paused = true)]
  async fn init_again_replaces_the_refresh_ticker() {
    let (_mount, ctx) = fixture::context(RouteId::Calendar);
    let mut page = CalendarPage::new(ctx, fixture::services());
    page.render().await.unwrap();
    page.init().await.unwrap();
    let first = page.ticker.as_ref().unwrap().abort_handle();
    page.init().await.unwrap();
    tokio::task::yield_now().await;
    assert!(first.is_finished());
    page.destroy();
    assert!(page.ticker.is_none());
  }
}
