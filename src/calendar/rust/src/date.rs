/* src/calendar/rust/src/date.rs */

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Years a grid can be generated for. Keeps every padding cell and
/// adjacent-month lookup inside chrono's representable range.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// A calendar month with a 0-based month index, always inside [`YEAR_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
  year: i32,
  month0: u32,
}

impl YearMonth {
  /// Out-of-range months roll over into neighbouring years, so
  /// `(2025, 12)` is January 2026 and `(2025, -1)` is December 2024.
  pub fn new(year: i32, month0: i32) -> Option<Self> {
    let total = i64::from(year) * 12 + i64::from(month0);
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month0 = u32::try_from(total.rem_euclid(12)).ok()?;
    YEAR_RANGE.contains(&year).then_some(Self { year, month0 })
  }

  /// The month containing `date`, with the year clamped into [`YEAR_RANGE`].
  pub fn containing(date: NaiveDate) -> Self {
    let year = date.year().clamp(*YEAR_RANGE.start(), *YEAR_RANGE.end());
    Self { year, month0: date.month0() }
  }

  pub fn year(self) -> i32 {
    self.year
  }

  pub fn month0(self) -> u32 {
    self.month0
  }

  /// 1-based month.
  pub fn month(self) -> u32 {
    self.month0 + 1
  }

  pub fn first_day(self) -> NaiveDate {
    // year and month are validated by every constructor
    NaiveDate::from_ymd_opt(self.year, self.month(), 1).unwrap_or_default()
  }

  pub fn last_day(self) -> NaiveDate {
    NaiveDate::from_ymd_opt(self.year, self.month(), self.days_in_month()).unwrap_or_default()
  }

  pub fn days_in_month(self) -> u32 {
    days_in_month(self.year, self.month())
  }

  pub fn offset(self, months: i32) -> Option<Self> {
    let month0 = i32::try_from(self.month0).ok()?.checked_add(months)?;
    Self::new(self.year, month0)
  }

  pub fn prev(self) -> Option<Self> {
    self.offset(-1)
  }

  pub fn next(self) -> Option<Self> {
    self.offset(1)
  }

  pub fn contains(self, date: NaiveDate) -> bool {
    date.year() == self.year && date.month0() == self.month0
  }
}

impl fmt::Display for YearMonth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:04}-{:02}", self.year, self.month())
  }
}

pub fn is_leap_year(year: i32) -> bool {
  (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a 1-based month; 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
  match month {
    1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
    4 | 6 | 9 | 11 => 30,
    2 if is_leap_year(year) => 29,
    2 => 28,
    _ => 0,
  }
}

/// First column of the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
  #[default]
  Sunday,
  Monday,
}

impl WeekStart {
  pub fn first_weekday(self) -> Weekday {
    match self {
      Self::Sunday => Weekday::Sun,
      Self::Monday => Weekday::Mon,
    }
  }

  /// Column index (0..7) of `weekday` in a grid starting on this day.
  pub fn column(self, weekday: Weekday) -> u32 {
    match self {
      Self::Sunday => weekday.num_days_from_sunday(),
      Self::Monday => weekday.num_days_from_monday(),
    }
  }

  /// Header order for a week row.
  pub fn weekdays(self) -> [Weekday; 7] {
    let mut day = self.first_weekday();
    std::array::from_fn(|_| {
      let current = day;
      day = day.succ();
      current
    })
  }
}

impl FromStr for WeekStart {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "sunday" | "sun" | "0" => Ok(Self::Sunday),
      "monday" | "mon" | "1" => Ok(Self::Monday),
      other => Err(format!("unknown week start: {other}")),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_normalizes_overflowing_months() {
    let ym = YearMonth::new(2025, 12).unwrap();
    assert_eq!((ym.year(), ym.month0()), (2026, 0));
    let ym = YearMonth::new(2025, -1).unwrap();
    assert_eq!((ym.year(), ym.month0()), (2024, 11));
    let ym = YearMonth::new(2025, -13).unwrap();
    assert_eq!((ym.year(), ym.month0()), (2023, 11));
  }

  #[test]
  fn new_rejects_years_out_of_range() {
    assert!(YearMonth::new(0, 11).is_none());
    assert!(YearMonth::new(9999, 12).is_none());
    assert!(YearMonth::new(1, 0).is_some());
  }

  #[test]
  fn days_in_month_handles_leap_years() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2025, 2), 28);
    assert_eq!(days_in_month(1900, 2), 28);
    assert_eq!(days_in_month(2000, 2), 29);
    assert_eq!(days_in_month(2025, 13), 0);
  }

  #[test]
  fn first_and_last_day() {
    let ym = YearMonth::new(2025, 7).unwrap();
    assert_eq!(ym.first_day(), NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
    assert_eq!(ym.last_day(), NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
    assert_eq!(ym.to_string(), "2025-08");
  }

  #[test]
  fn offsets_cross_year_boundaries() {
    let dec = YearMonth::new(2025, 11).unwrap();
    assert_eq!(dec.next(), YearMonth::new(2026, 0));
    assert_eq!(YearMonth::new(2026, 0).unwrap().prev(), Some(dec));
    assert_eq!(YearMonth::new(1, 0).unwrap().prev(), None);
  }

  #[test]
  fn containing_clamps_year() {
    let far = NaiveDate::from_ymd_opt(12000, 3, 4).unwrap();
    assert_eq!(YearMonth::containing(far), YearMonth::new(9999, 2).unwrap());
  }

  #[test]
  fn week_start_columns() {
    assert_eq!(WeekStart::Sunday.column(Weekday::Sun), 0);
    assert_eq!(WeekStart::Monday.column(Weekday::Sun), 6);
    assert_eq!(WeekStart::Monday.weekdays()[0], Weekday::Mon);
    assert_eq!(WeekStart::Sunday.weekdays()[6], Weekday::Sat);
  }

  #[test]
  fn week_start_parses() {
    assert_eq!("Monday".parse::<WeekStart>(), Ok(WeekStart::Monday));
    assert!("friday".parse::<WeekStart>().is_err());
  }
}
