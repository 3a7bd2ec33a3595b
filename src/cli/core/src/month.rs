/* src/cli/core/src/month.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};
use tracing::info;

use craft_calendar::{
  ExportFormat, GridOptions, WeekStart, YearMonth, date::YEAR_RANGE, export, generate_month_with,
};

use crate::ui;

pub struct MonthRequest {
  pub year: Option<i32>,
  /// 1-based.
  pub month: Option<u32>,
  pub today: NaiveDate,
  pub selected: Option<NaiveDate>,
  pub week_start: WeekStart,
  pub format: ExportFormat,
}

/// Export one month. Year and month default to the month containing `today`.
pub fn render_month(req: &MonthRequest) -> Result<String> {
  let year = req.year.unwrap_or_else(|| req.today.year());
  let month = req.month.unwrap_or_else(|| req.today.month());
  if !(1..=12).contains(&month) {
    bail!("--month must be between 1 and 12, got {month}");
  }
  let month0 = i32::try_from(month - 1).context("month out of range")?;
  let view = YearMonth::new(year, month0).with_context(|| {
    format!("year {year} is outside {}..={}", YEAR_RANGE.start(), YEAR_RANGE.end())
  })?;
  let opts = GridOptions { week_start: req.week_start, ..GridOptions::default() };
  let grid = generate_month_with(view, req.today, req.selected.unwrap_or(req.today), &opts);
  info!(month = %view, format = req.format.extension(), "month exported");
  Ok(export(&grid, req.format))
}

/// Print to stdout, or write to `out` and report the size.
pub fn emit(content: &str, out: Option<&Path>) -> Result<()> {
  match out {
    None => print!("{content}"),
    Some(path) => {
      if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
      ui::ok(&format!("{}  {}", path.display(), ui::format_size(content.len() as u64)));
    }
  }
  Ok(())
}

/// Default output file name, e.g. `calendar-2025-08.ics`.
pub fn default_file_name(req: &MonthRequest) -> PathBuf {
  let year = req.year.unwrap_or_else(|| req.today.year());
  let month = req.month.unwrap_or_else(|| req.today.month());
  PathBuf::from(format!("calendar-{year:04}-{month:02}.{}", req.format.extension()))
}
