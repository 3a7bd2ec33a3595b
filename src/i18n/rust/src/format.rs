/* src/i18n/rust/src/format.rs */

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::language::Language;

const MONTHS_ZH: [&str; 12] =
  ["一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月", "十二月"];

const MONTHS_EN: [&str; 12] = [
  "January",
  "February",
  "March",
  "April",
  "May",
  "June",
  "July",
  "August",
  "September",
  "October",
  "November",
  "December",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
  /// Year, month, day and weekday.
  #[default]
  Full,
  /// Month and day only.
  Short,
  /// Year and month.
  Month,
}

/// Month name for a 1-based month; `None` outside 1..=12.
pub fn month_name(lang: Language, month: u32) -> Option<&'static str> {
  let idx = usize::try_from(month.checked_sub(1)?).ok()?;
  lang.pick(MONTHS_ZH.get(idx), MONTHS_EN.get(idx)).copied()
}

/// Single-glyph / three-letter weekday label used in grid headers.
pub fn weekday_short(lang: Language, weekday: Weekday) -> &'static str {
  match lang {
    Language::Zh => ["一", "二", "三", "四", "五", "六", "日"][weekday.num_days_from_monday() as usize],
    Language::En => {
      ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"][weekday.num_days_from_monday() as usize]
    }
  }
}

pub fn weekday_long(lang: Language, weekday: Weekday) -> &'static str {
  let idx = weekday.num_days_from_monday() as usize;
  match lang {
    Language::Zh => ["星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日"][idx],
    Language::En => {
      ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"][idx]
    }
  }
}

pub fn format_date(lang: Language, date: NaiveDate, style: DateStyle) -> String {
  let (y, m, d) = (date.year(), date.month(), date.day());
  let month_en = MONTHS_EN[date.month0() as usize];
  match (lang, style) {
    (Language::Zh, DateStyle::Full) => {
      format!("{y}年{m}月{d}日{}", weekday_long(lang, date.weekday()))
    }
    (Language::Zh, DateStyle::Short) => format!("{m}/{d}"),
    (Language::Zh, DateStyle::Month) => format!("{y}年{m}月"),
    (Language::En, DateStyle::Full) => {
      format!("{}, {month_en} {d}, {y}", weekday_long(lang, date.weekday()))
    }
    (Language::En, DateStyle::Short) => format!("{} {d}", &month_en[..3]),
    (Language::En, DateStyle::Month) => format!("{month_en} {y}"),
  }
}

pub fn format_time(lang: Language, time: NaiveTime, hour12: bool) -> String {
  let (min, sec) = (time.minute(), time.second());
  if !hour12 {
    return format!("{:02}:{min:02}:{sec:02}", time.hour());
  }
  let (pm, hour) = time.hour12();
  match lang {
    Language::Zh => format!("{}{hour}:{min:02}:{sec:02}", if pm { "下午" } else { "上午" }),
    Language::En => format!("{hour}:{min:02}:{sec:02} {}", if pm { "PM" } else { "AM" }),
  }
}

/// Status-bar clock, `YYYY-MM-DD HH:MM:SS` regardless of language.
pub fn format_clock(at: NaiveDateTime) -> String {
  at.format("%Y-%m-%d %H:%M:%S").to_string()
}
