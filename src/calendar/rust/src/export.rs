/* src/calendar/rust/src/export.rs */

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use craft_i18n::{DateStyle, Language, format_date, weekday_long, weekday_short};

use crate::grid::{CalendarDay, MonthGrid};

const CSV_HEADER: &str = "日期,星期,节气,节日,农历";
const ICS_PRODID: &str = "PRODID:-//CalendarCraft//Calendar//EN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
  Text,
  Csv,
  Ics,
  Json,
}

impl ExportFormat {
  pub fn extension(self) -> &'static str {
    match self {
      Self::Text => "txt",
      Self::Csv => "csv",
      Self::Ics => "ics",
      Self::Json => "json",
    }
  }
}

impl FromStr for ExportFormat {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "text" | "txt" => Ok(Self::Text),
      "csv" => Ok(Self::Csv),
      "ics" | "ical" => Ok(Self::Ics),
      "json" => Ok(Self::Json),
      other => Err(format!("unknown export format: {other}")),
    }
  }
}

pub fn export(grid: &MonthGrid, format: ExportFormat) -> String {
  match format {
    ExportFormat::Text => to_text(grid),
    ExportFormat::Csv => to_csv(grid),
    ExportFormat::Ics => to_ics(grid),
    ExportFormat::Json => to_json(grid),
  }
}

fn to_text(grid: &MonthGrid) -> String {
  let mut out = String::new();
  let title = grid
    .current_days()
    .next()
    .map(|d| format_date(Language::Zh, d.date, DateStyle::Month))
    .unwrap_or_default();
  out.push_str(&format!("{title}\n"));

  let header: Vec<String> = grid
    .week_start
    .weekdays()
    .iter()
    .map(|w| format!("{:>3}", weekday_short(Language::En, *w)))
    .collect();
  out.push_str(&format!("{}\n", header.join(" ")));

  for week in &grid.weeks {
    let cells: Vec<String> = week
      .iter()
      .map(|d| if d.is_current_month() { format!("{:>3}", d.day) } else { "   ".to_string() })
      .collect();
    out.push_str(&format!("{}\n", cells.join(" ").trim_end()));
  }

  let notes: Vec<&CalendarDay> = grid.current_days().filter(|d| d.is_annotated()).collect();
  if !notes.is_empty() {
    out.push('\n');
  }
  for day in notes {
    let labels: Vec<&str> =
      day.solar_term.map(|t| t.zh()).into_iter().chain(day.festival.map(|f| f.zh)).collect();
    out.push_str(&format!("{}  {}\n", day.date.format("%Y-%m-%d"), labels.join(" / ")));
  }
  out
}

fn to_csv(grid: &MonthGrid) -> String {
  let mut rows = vec![CSV_HEADER.to_string()];
  rows.extend(grid.current_days().map(|d| {
    [
      d.date.format("%Y-%m-%d").to_string(),
      weekday_long(Language::Zh, d.date.weekday()).to_string(),
      d.solar_term.map(|t| t.zh()).unwrap_or_default().to_string(),
      d.festival.map(|f| f.zh).unwrap_or_default().to_string(),
      d.lunar.map(|l| l.month_day()).unwrap_or_default(),
    ]
    .join(",")
  }));
  rows.join("\n")
}

fn to_ics(grid: &MonthGrid) -> String {
  let mut lines = vec!["BEGIN:VCALENDAR".to_string(), "VERSION:2.0".to_string(), ICS_PRODID.into()];
  for day in grid.current_days() {
    let Some(summary) = day.headline() else { continue };
    lines.push("BEGIN:VEVENT".into());
    lines.push(format!("DTSTART;VALUE=DATE:{}", day.date.format("%Y%m%d")));
    lines.push(format!("SUMMARY:{summary}"));
    lines.push("END:VEVENT".into());
  }
  lines.push("END:VCALENDAR".into());
  lines.join("\r\n")
}

fn to_json(grid: &MonthGrid) -> String {
  // MonthGrid holds only strings, numbers and dates; serialization cannot fail.
  serde_json::to_string_pretty(grid).unwrap_or_else(|e| {
    tracing::error!(error = %e, "month grid serialization failed");
    String::from("{}")
  })
}

/// An all-day event read back from an ICS document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsEvent {
  pub date: NaiveDate,
  pub summary: String,
}

/// Collect `DTSTART`/`SUMMARY` pairs from every `VEVENT`. Events missing
/// either field or carrying an unparsable date are skipped.
pub fn read_ics_events(ics: &str) -> Vec<IcsEvent> {
  let mut events = Vec::new();
  let mut in_event = false;
  let mut date: Option<NaiveDate> = None;
  let mut summary: Option<String> = None;

  for line in ics.lines().map(str::trim_end) {
    match line {
      "BEGIN:VEVENT" => {
        in_event = true;
        date = None;
        summary = None;
      }
      "END:VEVENT" => {
        if let (Some(date), Some(summary)) = (date.take(), summary.take()) {
          events.push(IcsEvent { date, summary });
        }
        in_event = false;
      }
      _ if in_event => {
        let Some((name, value)) = line.split_once(':') else { continue };
        // property parameters follow the name after ';'
        match name.split(';').next() {
          Some("DTSTART") => {
            date = NaiveDate::parse_from_str(value.get(..8).unwrap_or(value), "%Y%m%d").ok();
          }
          Some("SUMMARY") => summary = Some(value.to_string()),
          _ => {}
        }
      }
      _ => {}
    }
  }
  events
}
