/* src/calendar/rust/tests/grid_props.rs */

use chrono::{Datelike, NaiveDate};
use craft_calendar::{DayKind, GridOptions, WeekStart, YearMonth, generate_month_with};
use proptest::prelude::*;

fn week_start() -> impl Strategy<Value = WeekStart> {
  prop_oneof![Just(WeekStart::Sunday), Just(WeekStart::Monday)]
}

proptest! {
  #[test]
  fn grid_is_whole_weeks(year in 1i32..=9999, month0 in 0i32..12, ws in week_start()) {
    let ym = YearMonth::new(year, month0).unwrap();
    let today = ym.first_day();
    let opts = GridOptions { week_start: ws, ..GridOptions::default() };
    let g = generate_month_with(ym, today, today, &opts);

    prop_assert!(g.weeks.iter().all(|w| w.len() == 7));
    prop_assert_eq!(g.cell_count() % 7, 0);
    prop_assert!(g.leading < 7 && g.trailing < 7);
    prop_assert_eq!(g.current_days().count() as u32, ym.days_in_month());
  }

  #[test]
  fn cells_are_consecutive_dates(year in 1i32..=9999, month0 in 0i32..12, ws in week_start()) {
    let ym = YearMonth::new(year, month0).unwrap();
    let today = ym.first_day();
    let opts = GridOptions { week_start: ws, ..GridOptions::default() };
    let g = generate_month_with(ym, today, today, &opts);

    let dates: Vec<NaiveDate> = g.days().map(|d| d.date).collect();
    prop_assert!(dates.windows(2).all(|w| w[0].succ_opt() == Some(w[1])));
    prop_assert_eq!(ws.column(dates[0].weekday()), 0);
    for cell in g.days() {
      let expected = if ym.contains(cell.date) {
        DayKind::Current
      } else if cell.date < ym.first_day() {
        DayKind::PrevMonth
      } else {
        DayKind::NextMonth
      };
      prop_assert_eq!(cell.kind, expected);
      prop_assert_eq!(cell.day, cell.date.day());
    }
  }

  #[test]
  fn only_one_cell_is_today(year in 1i32..=9999, month0 in 0i32..12, day in 1u32..=28) {
    let ym = YearMonth::new(year, month0).unwrap();
    let today = NaiveDate::from_ymd_opt(ym.year(), ym.month(), day).unwrap();
    let g = generate_month_with(ym, today, today, &GridOptions::default());
    prop_assert_eq!(g.days().filter(|d| d.is_today).count(), 1);
    prop_assert_eq!(g.days().filter(|d| d.is_selected).count(), 1);
  }
}
