/* src/calendar/wasm/src/lib.rs */

use chrono::NaiveDate;
use craft_calendar::{
  AnnotationStore, CalendarConfig, ExportFormat, GridOptions, MonthGrid, WeekStart, YearMonth,
};
use craft_i18n::Language;
use wasm_bindgen::prelude::*;

fn parse_date(iso: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()
}

fn error_json(message: &str) -> String {
  serde_json::json!({ "error": message }).to_string()
}

/// JS months are 0-based, so `month0` is passed straight through.
fn build_grid(
  year: i32,
  month0: i32,
  today_iso: &str,
  selected_iso: &str,
  week_start: &str,
) -> Result<MonthGrid, String> {
  let ym = YearMonth::new(year, month0).ok_or_else(|| format!("year out of range: {year}"))?;
  let today = parse_date(today_iso).ok_or_else(|| format!("invalid date: {today_iso}"))?;
  let selected = if selected_iso.is_empty() {
    today
  } else {
    parse_date(selected_iso).ok_or_else(|| format!("invalid date: {selected_iso}"))?
  };
  let week_start: WeekStart =
    if week_start.is_empty() { WeekStart::default() } else { week_start.parse()? };
  let opts = GridOptions { week_start, ..GridOptions::default() };
  Ok(craft_calendar::generate_month_with(ym, today, selected, &opts))
}

#[wasm_bindgen]
pub fn generate_month_json(
  year: i32,
  month0: i32,
  today_iso: &str,
  selected_iso: &str,
  week_start: &str,
) -> String {
  match build_grid(year, month0, today_iso, selected_iso, week_start) {
    Ok(grid) => craft_calendar::export(&grid, ExportFormat::Json),
    Err(e) => error_json(&e),
  }
}

#[wasm_bindgen]
pub fn export_month(year: i32, month0: i32, today_iso: &str, format: &str) -> String {
  let format: ExportFormat = match format.parse() {
    Ok(f) => f,
    Err(e) => return error_json(&e),
  };
  match build_grid(year, month0, today_iso, "", "") {
    Ok(grid) => craft_calendar::export(&grid, format),
    Err(e) => error_json(&e),
  }
}

#[wasm_bindgen]
pub fn render_month_html(year: i32, month0: i32, today_iso: &str, selected_iso: &str) -> String {
  match build_grid(year, month0, today_iso, selected_iso, "") {
    Ok(grid) => {
      craft_calendar::render_widget(&grid, &CalendarConfig::default(), AnnotationStore::builtin())
    }
    Err(e) => error_json(&e),
  }
}

/// Label of the solar term on a 1-based month/day, or an empty string.
#[wasm_bindgen]
pub fn solar_term(year: i32, month: u32, day: u32, lang: &str) -> String {
  let lang: Language = lang.parse().unwrap_or_default();
  AnnotationStore::builtin()
    .solar_term(year, month, day)
    .map(|t| t.label(lang).to_string())
    .unwrap_or_default()
}

/// Festival label for a `"MM-DD"` key, or an empty string.
#[wasm_bindgen]
pub fn festival(year: i32, month_day: &str, lang: &str) -> String {
  let lang: Language = lang.parse().unwrap_or_default();
  AnnotationStore::builtin()
    .festival(year, month_day)
    .map(|f| f.label(lang).to_string())
    .unwrap_or_default()
}
