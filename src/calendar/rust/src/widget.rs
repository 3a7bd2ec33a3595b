/* src/calendar/rust/src/widget.rs */

use chrono::NaiveDate;
use tracing::debug;

use crate::annotations::AnnotationStore;
use crate::date::YearMonth;
use crate::export::{ExportFormat, export};
use crate::grid::{CalendarDay, GridOptions, MonthGrid, day_info, generate_month_with};
use crate::render::{CalendarConfig, render_tooltip, render_widget};

/// Calendar view state: which month is shown, what is selected, and what
/// "today" currently is. The clock is always passed in.
#[derive(Debug, Clone)]
pub struct CalendarWidget {
  today: NaiveDate,
  selected: NaiveDate,
  view: YearMonth,
  config: CalendarConfig,
  store: &'static AnnotationStore,
}

impl CalendarWidget {
  pub fn new(today: NaiveDate, config: CalendarConfig) -> Self {
    Self {
      today,
      selected: today,
      view: YearMonth::containing(today),
      config,
      store: AnnotationStore::builtin(),
    }
  }

  pub fn with_store(mut self, store: &'static AnnotationStore) -> Self {
    self.store = store;
    self
  }

  pub fn today(&self) -> NaiveDate {
    self.today
  }

  pub fn selected(&self) -> NaiveDate {
    self.selected
  }

  pub fn view(&self) -> YearMonth {
    self.view
  }

  pub fn config(&self) -> &CalendarConfig {
    &self.config
  }

  pub fn config_mut(&mut self) -> &mut CalendarConfig {
    &mut self.config
  }

  /// Move the view by `delta` months. Returns false, leaving the view
  /// unchanged, when the target falls outside the supported years.
  pub fn navigate_month(&mut self, delta: i32) -> bool {
    match self.view.offset(delta) {
      Some(view) => {
        debug!(from = %self.view, to = %view, "calendar month changed");
        self.view = view;
        true
      }
      None => false,
    }
  }

  pub fn show_month(&mut self, view: YearMonth) {
    self.view = view;
  }

  /// Only dates inside the viewed month can be selected.
  pub fn select_date(&mut self, date: NaiveDate) -> bool {
    if !self.view.contains(date) {
      return false;
    }
    self.selected = date;
    true
  }

  /// Advance "today". Returns true when the date actually changed, which is
  /// when the host should re-render.
  pub fn refresh_today(&mut self, now: NaiveDate) -> bool {
    if now == self.today {
      return false;
    }
    self.today = now;
    true
  }

  fn options(&self) -> GridOptions<'static> {
    GridOptions { week_start: self.config.week_start, store: self.store, events: None }
  }

  pub fn grid(&self) -> MonthGrid {
    generate_month_with(self.view, self.today, self.selected, &self.options())
  }

  pub fn render_html(&self) -> String {
    render_widget(&self.grid(), &self.config, self.store)
  }

  pub fn export(&self, format: ExportFormat) -> String {
    export(&self.grid(), format)
  }

  pub fn day_info(&self, date: NaiveDate) -> CalendarDay {
    day_info(date, self.today, self.selected, &self.options())
  }

  pub fn tooltip_html(&self, date: NaiveDate) -> String {
    render_tooltip(&self.day_info(date))
  }
}
