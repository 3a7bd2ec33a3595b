/* src/calendar/rust/src/render.rs */

//! HTML for the calendar widget. Output is a string; the host decides
//! where it goes.

use serde::Deserialize;

use craft_i18n::{DateStyle, Language, format_date, month_name, weekday_short};
use craft_markup::{ClassList, bilingual, escape_html};

use crate::annotations::AnnotationStore;
use crate::date::WeekStart;
use crate::grid::{CalendarDay, MonthGrid};

const PREV_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="currentColor"><path d="M10 2L4 8l6 6V2z"/></svg>"#;
const NEXT_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="currentColor"><path d="M6 2l6 6-6 6V2z"/></svg>"#;

/// Display toggles. Deserializes from the `[calendar]` table of `craft.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
  pub show_solar_terms: bool,
  pub show_festivals: bool,
  pub show_lunar: bool,
  pub week_start: WeekStart,
}

impl Default for CalendarConfig {
  fn default() -> Self {
    Self { show_solar_terms: true, show_festivals: true, show_lunar: true, week_start: WeekStart::Sunday }
  }
}

impl CalendarConfig {
  pub fn toggle_solar_terms(&mut self) {
    self.show_solar_terms = !self.show_solar_terms;
  }

  pub fn toggle_festivals(&mut self) {
    self.show_festivals = !self.show_festivals;
  }

  pub fn toggle_lunar(&mut self) {
    self.show_lunar = !self.show_lunar;
  }
}

/// Terms of a 1-based month joined with ` · `; empty for uncurated months.
pub fn month_subtitle(store: &AnnotationStore, year: i32, month: u32) -> String {
  let terms: Vec<&str> = store.solar_terms_in(year, month).into_iter().map(|t| t.zh()).collect();
  terms.join(" · ")
}

pub fn render_widget(grid: &MonthGrid, config: &CalendarConfig, store: &AnnotationStore) -> String {
  let month = grid.month + 1;
  let title = format!("{} {}", month_name(Language::Zh, month).unwrap_or_default(), grid.year);
  let subtitle = month_subtitle(store, grid.year, month);

  let mut html = String::from(r#"<div class="calendar-widget">"#);
  html.push_str(&format!(
    r#"<div class="calendar-header"><button class="nav-btn prev-month" data-action="prevMonth">{PREV_ICON}</button><div class="calendar-title-container"><h3 class="calendar-title">{}</h3><div class="calendar-subtitle">{}</div></div><button class="nav-btn next-month" data-action="nextMonth">{NEXT_ICON}</button></div>"#,
    escape_html(&title),
    escape_html(&subtitle),
  ));
  html.push_str(&format!(r#"<div class="calendar-weekdays">{}</div>"#, render_weekdays(grid.week_start)));
  html.push_str(&format!(r#"<div class="calendar-grid">{}</div>"#, render_grid(grid, config)));
  html.push_str(&format!(
    r#"<div class="calendar-footer"><div class="calendar-legend">{}</div></div>"#,
    render_legend(config)
  ));
  html.push_str("</div>");
  html
}

pub fn render_weekdays(week_start: WeekStart) -> String {
  week_start
    .weekdays()
    .iter()
    .map(|w| {
      bilingual("div", weekday_short(Language::Zh, *w), weekday_short(Language::En, *w))
        .class("weekday")
        .to_string()
    })
    .collect()
}

pub fn render_grid(grid: &MonthGrid, config: &CalendarConfig) -> String {
  let mut html = String::new();
  for week in &grid.weeks {
    html.push_str(r#"<div class="calendar-week">"#);
    for day in week {
      html.push_str(&render_day(day, config));
    }
    html.push_str("</div>");
  }
  html
}

pub fn render_day(day: &CalendarDay, config: &CalendarConfig) -> String {
  let classes = ClassList::new("calendar-day")
    .add(if day.is_current_month() { "current-month" } else { "other-month" })
    .add_if(day.is_today, "today")
    .add_if(day.is_selected, "selected")
    .add_if(day.solar_term.is_some(), "has-solar-term")
    .add_if(day.festival.is_some(), "has-festival")
    .add_if(!day.events.is_empty(), "has-events");

  let mut html = format!(
    r#"<div class="{classes}" data-date="{}" data-day="{}"><div class="day-number">{}</div>"#,
    day.date.format("%Y-%m-%d"),
    day.day,
    day.day
  );
  if let Some(term) = day.solar_term.filter(|_| config.show_solar_terms) {
    html.push_str(&format!(r#"<div class="solar-term">{}</div>"#, term.zh()));
  }
  if let Some(festival) = day.festival.filter(|_| config.show_festivals) {
    html.push_str(&format!(r#"<div class="festival">{}</div>"#, escape_html(festival.zh)));
  }
  if let Some(lunar) = day.lunar.filter(|_| config.show_lunar) {
    html.push_str(&format!(r#"<div class="lunar">{}</div>"#, lunar.day));
  }
  if !day.events.is_empty() {
    html.push_str(r#"<div class="day-events">"#);
    for event in &day.events {
      html.push_str(&format!(
        r#"<span class="event-dot" title="{}"></span>"#,
        escape_html(&event.title)
      ));
    }
    html.push_str("</div>");
  }
  html.push_str("</div>");
  html
}

pub fn render_legend(config: &CalendarConfig) -> String {
  let entries = [
    (config.show_solar_terms, "solar-term-color", "节气", "Solar Terms"),
    (config.show_festivals, "festival-color", "节日", "Festivals"),
    (config.show_lunar, "lunar-color", "农历", "Lunar"),
  ];
  entries
    .into_iter()
    .filter(|(shown, ..)| *shown)
    .map(|(_, color, zh, en)| {
      format!(
        r#"<span class="legend-item"><span class="legend-color {color}"></span>{}</span>"#,
        bilingual("span", zh, en)
      )
    })
    .collect()
}

/// Hover card for a single day.
pub fn render_tooltip(day: &CalendarDay) -> String {
  let mut html = format!(
    r#"<div class="tooltip-date">{}</div>"#,
    format_date(Language::Zh, day.date, DateStyle::Full)
  );
  if let Some(term) = day.solar_term {
    html.push_str(&format!(r#"<div class="tooltip-solar-term">节气: {}</div>"#, term.zh()));
  }
  if let Some(festival) = day.festival {
    html.push_str(&format!(r#"<div class="tooltip-festival">节日: {}</div>"#, escape_html(festival.zh)));
  }
  if let Some(lunar) = day.lunar {
    html.push_str(&format!(r#"<div class="tooltip-lunar">农历: {}</div>"#, lunar.month_day()));
  }
  if !day.events.is_empty() {
    let titles: Vec<&str> = day.events.iter().map(|e| e.title.as_str()).collect();
    html.push_str(&format!(
      r#"<div class="tooltip-events">事件: {}</div>"#,
      escape_html(&titles.join(", "))
    ));
  }
  html
}
