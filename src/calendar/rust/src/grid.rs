/* src/calendar/rust/src/grid.rs */

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::annotations::{AnnotationStore, Festival, LunarInfo, SolarTerm};
use crate::date::{WeekStart, YearMonth};

/// Which month a grid cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
  PrevMonth,
  Current,
  NextMonth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
  pub title: String,
}

/// Supplies events for in-month days. Grids built without one carry empty
/// event lists.
pub trait EventSource {
  fn events_on(&self, date: NaiveDate) -> Vec<Event>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
  pub day: u32,
  pub kind: DayKind,
  pub date: NaiveDate,
  pub is_today: bool,
  pub is_selected: bool,
  pub solar_term: Option<SolarTerm>,
  pub festival: Option<Festival>,
  pub lunar: Option<&'static LunarInfo>,
  pub events: Vec<Event>,
}

impl CalendarDay {
  pub fn is_current_month(&self) -> bool {
    self.kind == DayKind::Current
  }

  pub fn is_annotated(&self) -> bool {
    self.solar_term.is_some() || self.festival.is_some()
  }

  /// Label used when a single annotation has to represent the day.
  /// Solar terms take precedence over festivals.
  pub fn headline(&self) -> Option<&'static str> {
    self.solar_term.map(SolarTerm::zh).or(self.festival.map(|f| f.zh))
  }

  fn padding(date: NaiveDate, kind: DayKind) -> Self {
    Self {
      day: date.day(),
      kind,
      date,
      is_today: false,
      is_selected: false,
      solar_term: None,
      festival: None,
      lunar: None,
      events: Vec::new(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
  pub year: i32,
  /// 0-based month.
  pub month: u32,
  pub days_in_month: u32,
  /// Padding cells before day 1.
  pub leading: u32,
  /// Padding cells after the last day.
  pub trailing: u32,
  pub week_start: WeekStart,
  pub weeks: Vec<Vec<CalendarDay>>,
}

impl MonthGrid {
  pub fn year_month(&self) -> Option<YearMonth> {
    YearMonth::new(self.year, i32::try_from(self.month).ok()?)
  }

  pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
    self.weeks.iter().flatten()
  }

  pub fn current_days(&self) -> impl Iterator<Item = &CalendarDay> {
    self.days().filter(|d| d.is_current_month())
  }

  /// In-month cell for a 1-based day number.
  pub fn day(&self, day: u32) -> Option<&CalendarDay> {
    self.current_days().find(|d| d.day == day)
  }

  pub fn cell_count(&self) -> usize {
    self.weeks.iter().map(Vec::len).sum()
  }
}

pub struct GridOptions<'a> {
  pub week_start: WeekStart,
  pub store: &'static AnnotationStore,
  pub events: Option<&'a dyn EventSource>,
}

impl Default for GridOptions<'_> {
  fn default() -> Self {
    Self { week_start: WeekStart::default(), store: AnnotationStore::builtin(), events: None }
  }
}

/// Sunday-first grid against the built-in annotation tables.
pub fn generate_month(ym: YearMonth, today: NaiveDate, selected: NaiveDate) -> MonthGrid {
  generate_month_with(ym, today, selected, &GridOptions::default())
}

/// Lay out `ym` as whole weeks. Padding cells take their dates from the
/// neighbouring months but are never annotated or flagged.
pub fn generate_month_with(
  ym: YearMonth,
  today: NaiveDate,
  selected: NaiveDate,
  opts: &GridOptions<'_>,
) -> MonthGrid {
  let first = ym.first_day();
  let days_in_month = ym.days_in_month();
  let leading = opts.week_start.column(first.weekday());
  let trailing = (7 - (leading + days_in_month) % 7) % 7;

  // YearMonth keeps the year in 1..=9999, so a week either side stays representable.
  let start = first - Days::new(u64::from(leading));
  let total = (leading + days_in_month + trailing) as usize;

  let cells: Vec<CalendarDay> = start
    .iter_days()
    .take(total)
    .enumerate()
    .map(|(idx, date)| {
      let idx = idx as u32;
      if idx < leading {
        CalendarDay::padding(date, DayKind::PrevMonth)
      } else if idx < leading + days_in_month {
        annotate(date, DayKind::Current, today, selected, opts)
      } else {
        CalendarDay::padding(date, DayKind::NextMonth)
      }
    })
    .collect();

  let weeks = cells.chunks(7).map(<[CalendarDay]>::to_vec).collect();

  MonthGrid {
    year: ym.year(),
    month: ym.month0(),
    days_in_month,
    leading,
    trailing,
    week_start: opts.week_start,
    weeks,
  }
}

/// Full annotation for a single date, independent of any grid. Used for
/// tooltips, where the hovered date may belong to either neighbour month.
pub fn day_info(
  date: NaiveDate,
  today: NaiveDate,
  selected: NaiveDate,
  opts: &GridOptions<'_>,
) -> CalendarDay {
  annotate(date, DayKind::Current, today, selected, opts)
}

fn annotate(
  date: NaiveDate,
  kind: DayKind,
  today: NaiveDate,
  selected: NaiveDate,
  opts: &GridOptions<'_>,
) -> CalendarDay {
  CalendarDay {
    day: date.day(),
    kind,
    date,
    is_today: date == today,
    is_selected: date == selected,
    solar_term: opts.store.solar_term_on(date),
    festival: opts.store.festival_on(date),
    lunar: opts.store.lunar_on(date),
    events: opts.events.map(|src| src.events_on(date)).unwrap_or_default(),
  }
}
