/* src/calendar/rust/src/annotations.rs */

//! Curated solar-term, festival and lunar tables.
//!
//! These are lookup tables for a bounded set of years, not an ephemeris.
//! Anything outside the curated set resolves to `None`.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use craft_i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
  MinorCold,
  MajorCold,
  BeginningOfSpring,
  RainWater,
  AwakeningOfInsects,
  SpringEquinox,
  PureBrightness,
  GrainRain,
  BeginningOfSummer,
  GrainBuds,
  GrainInEar,
  SummerSolstice,
  MinorHeat,
  MajorHeat,
  BeginningOfAutumn,
  EndOfHeat,
  WhiteDew,
  AutumnalEquinox,
  ColdDew,
  FrostsDescent,
  BeginningOfWinter,
  MinorSnow,
  MajorSnow,
  WinterSolstice,
}

impl SolarTerm {
  pub fn zh(self) -> &'static str {
    match self {
      Self::MinorCold => "小寒",
      Self::MajorCold => "大寒",
      Self::BeginningOfSpring => "立春",
      Self::RainWater => "雨水",
      Self::AwakeningOfInsects => "惊蛰",
      Self::SpringEquinox => "春分",
      Self::PureBrightness => "清明",
      Self::GrainRain => "谷雨",
      Self::BeginningOfSummer => "立夏",
      Self::GrainBuds => "小满",
      Self::GrainInEar => "芒种",
      Self::SummerSolstice => "夏至",
      Self::MinorHeat => "小暑",
      Self::MajorHeat => "大暑",
      Self::BeginningOfAutumn => "立秋",
      Self::EndOfHeat => "处暑",
      Self::WhiteDew => "白露",
      Self::AutumnalEquinox => "秋分",
      Self::ColdDew => "寒露",
      Self::FrostsDescent => "霜降",
      Self::BeginningOfWinter => "立冬",
      Self::MinorSnow => "小雪",
      Self::MajorSnow => "大雪",
      Self::WinterSolstice => "冬至",
    }
  }

  pub fn en(self) -> &'static str {
    match self {
      Self::MinorCold => "Minor Cold",
      Self::MajorCold => "Major Cold",
      Self::BeginningOfSpring => "Beginning of Spring",
      Self::RainWater => "Rain Water",
      Self::AwakeningOfInsects => "Awakening of Insects",
      Self::SpringEquinox => "Spring Equinox",
      Self::PureBrightness => "Pure Brightness",
      Self::GrainRain => "Grain Rain",
      Self::BeginningOfSummer => "Beginning of Summer",
      Self::GrainBuds => "Grain Buds",
      Self::GrainInEar => "Grain in Ear",
      Self::SummerSolstice => "Summer Solstice",
      Self::MinorHeat => "Minor Heat",
      Self::MajorHeat => "Major Heat",
      Self::BeginningOfAutumn => "Beginning of Autumn",
      Self::EndOfHeat => "End of Heat",
      Self::WhiteDew => "White Dew",
      Self::AutumnalEquinox => "Autumnal Equinox",
      Self::ColdDew => "Cold Dew",
      Self::FrostsDescent => "Frost's Descent",
      Self::BeginningOfWinter => "Beginning of Winter",
      Self::MinorSnow => "Minor Snow",
      Self::MajorSnow => "Major Snow",
      Self::WinterSolstice => "Winter Solstice",
    }
  }

  pub fn label(self, lang: Language) -> &'static str {
    lang.pick(self.zh(), self.en())
  }
}

// Serialized as the Chinese label, the form every export carries.
impl Serialize for SolarTerm {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.zh())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Festival {
  pub zh: &'static str,
  pub en: &'static str,
}

impl Festival {
  pub fn label(self, lang: Language) -> &'static str {
    lang.pick(self.zh, self.en)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarInfo {
  pub year: &'static str,
  pub month: &'static str,
  pub day: &'static str,
  pub zodiac: &'static str,
  pub element: &'static str,
}

impl LunarInfo {
  /// Month and day together, e.g. `七月初四`.
  pub fn month_day(&self) -> String {
    format!("{}{}", self.month, self.day)
  }
}

type SolarTermTable = &'static [(i32, &'static [(u32, u32, SolarTerm)])];
type FestivalTable = &'static [(i32, &'static [(&'static str, Festival)])];
type LunarTable = &'static [(&'static str, LunarInfo)];

/// Read-only annotation tables. [`AnnotationStore::builtin`] is the
/// process-wide instance; custom stores are only useful in tests.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationStore {
  solar_terms: SolarTermTable,
  festivals: FestivalTable,
  lunar: LunarTable,
}

impl AnnotationStore {
  pub const fn new(solar_terms: SolarTermTable, festivals: FestivalTable, lunar: LunarTable) -> Self {
    Self { solar_terms, festivals, lunar }
  }

  pub fn builtin() -> &'static Self {
    &BUILTIN
  }

  /// Solar term on a 1-based month/day.
  pub fn solar_term(&self, year: i32, month: u32, day: u32) -> Option<SolarTerm> {
    let (_, entries) = self.solar_terms.iter().find(|(y, _)| *y == year)?;
    entries.iter().find(|(m, d, _)| *m == month && *d == day).map(|&(_, _, term)| term)
  }

  pub fn solar_term_on(&self, date: NaiveDate) -> Option<SolarTerm> {
    self.solar_term(date.year(), date.month(), date.day())
  }

  /// Terms falling inside a 1-based month, in date order.
  pub fn solar_terms_in(&self, year: i32, month: u32) -> Vec<SolarTerm> {
    let Some((_, entries)) = self.solar_terms.iter().find(|(y, _)| *y == year) else {
      return Vec::new();
    };
    let mut terms: Vec<(u32, SolarTerm)> =
      entries.iter().filter(|(m, _, _)| *m == month).map(|&(_, d, t)| (d, t)).collect();
    terms.sort_by_key(|(d, _)| *d);
    terms.into_iter().map(|(_, t)| t).collect()
  }

  /// Festival keyed by `"MM-DD"`.
  pub fn festival(&self, year: i32, month_day: &str) -> Option<Festival> {
    let (_, entries) = self.festivals.iter().find(|(y, _)| *y == year)?;
    entries.iter().find(|(key, _)| *key == month_day).map(|&(_, f)| f)
  }

  pub fn festival_on(&self, date: NaiveDate) -> Option<Festival> {
    self.festival(date.year(), &format!("{:02}-{:02}", date.month(), date.day()))
  }

  /// Lunar descriptor keyed by ISO date (`YYYY-MM-DD`).
  pub fn lunar(&self, iso: &str) -> Option<&'static LunarInfo> {
    self.lunar.iter().find(|(key, _)| *key == iso).map(|(_, info)| info)
  }

  pub fn lunar_on(&self, date: NaiveDate) -> Option<&'static LunarInfo> {
    self.lunar(&date.format("%Y-%m-%d").to_string())
  }

  /// Years with at least one curated entry.
  pub fn years(&self) -> Vec<i32> {
    let mut years: Vec<i32> =
      self.solar_terms.iter().map(|(y, _)| *y).chain(self.festivals.iter().map(|(y, _)| *y)).collect();
    years.sort_unstable();
    years.dedup();
    years
  }
}

static BUILTIN: AnnotationStore = AnnotationStore::new(SOLAR_TERMS, FESTIVALS, LUNAR);

const SOLAR_TERMS: SolarTermTable = &[(
  2025,
  &[
    (1, 5, SolarTerm::MinorCold),
    (1, 20, SolarTerm::MajorCold),
    (2, 4, SolarTerm::BeginningOfSpring),
    (2, 19, SolarTerm::RainWater),
    (3, 5, SolarTerm::AwakeningOfInsects),
    (3, 20, SolarTerm::SpringEquinox),
    (4, 5, SolarTerm::PureBrightness),
    (4, 20, SolarTerm::GrainRain),
    (5, 5, SolarTerm::BeginningOfSummer),
    (5, 21, SolarTerm::GrainBuds),
    (6, 5, SolarTerm::GrainInEar),
    (6, 21, SolarTerm::SummerSolstice),
    (7, 7, SolarTerm::MinorHeat),
    (7, 22, SolarTerm::MajorHeat),
    (8, 7, SolarTerm::BeginningOfAutumn),
    (8, 23, SolarTerm::EndOfHeat),
    (9, 7, SolarTerm::WhiteDew),
    (9, 23, SolarTerm::AutumnalEquinox),
    (10, 8, SolarTerm::ColdDew),
    (10, 23, SolarTerm::FrostsDescent),
    (11, 7, SolarTerm::BeginningOfWinter),
    (11, 22, SolarTerm::MinorSnow),
    (12, 7, SolarTerm::MajorSnow),
    (12, 22, SolarTerm::WinterSolstice),
  ],
)];

const fn festival(zh: &'static str, en: &'static str) -> Festival {
  Festival { zh, en }
}

const FESTIVALS: FestivalTable = &[(
  2025,
  &[
    ("01-01", festival("元旦", "New Year's Day")),
    ("02-12", festival("除夕", "Spring Festival Eve")),
    ("02-13", festival("春节", "Spring Festival")),
    ("02-14", festival("情人节", "Valentine's Day")),
    ("03-08", festival("妇女节", "Women's Day")),
    ("04-05", festival("清明节", "Qingming Festival")),
    ("05-01", festival("劳动节", "Labour Day")),
    ("06-01", festival("儿童节", "Children's Day")),
    ("08-13", festival("七夕节", "Qixi Festival")),
    ("09-15", festival("中秋节", "Mid-Autumn Festival")),
    ("10-01", festival("国庆节", "National Day")),
    ("12-25", festival("圣诞节", "Christmas")),
  ],
)];

const LUNAR: LunarTable = &[(
  "2025-08-08",
  LunarInfo { year: "乙巳年", month: "七月", day: "初四", zodiac: "蛇", element: "木" },
)];
