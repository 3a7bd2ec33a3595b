/* src/calendar/rust/src/lib.rs */

//! Month grids overlaid with solar terms, festivals and lunar notes.
//! Everything here is pure: no clock reads, no I/O, no interior state.

pub mod annotations;
pub mod date;
pub mod export;
pub mod grid;
pub mod render;
pub mod widget;

// Public API re-exports
pub use annotations::{AnnotationStore, Festival, LunarInfo, SolarTerm};
pub use date::{WeekStart, YearMonth};
pub use export::{ExportFormat, IcsEvent, export, read_ics_events};
pub use grid::{
  CalendarDay, DayKind, Event, EventSource, GridOptions, MonthGrid, day_info, generate_month,
  generate_month_with,
};
pub use render::{CalendarConfig, month_subtitle, render_tooltip, render_widget};
pub use widget::CalendarWidget;
