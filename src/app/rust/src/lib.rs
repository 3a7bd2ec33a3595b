/* src/app/rust/src/lib.rs */

//! The CalendarCraft application: pages, the shell that hosts them, and
//! the pieces around it (config, persisted state, shortcuts, timers).

pub mod clock;
pub mod config;
pub mod document;
pub mod pages;
pub mod shell;
pub mod shortcuts;
pub mod state;
pub mod storage;
pub mod timers;
pub mod titles;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CraftConfig, find_craft_config, load_craft_config, load_or_default};
pub use document::{Document, DocumentSnapshot, MemoryDocument};
pub use shell::{Action, App, AppBuilder, CalendarAction, Host};
pub use shortcuts::{KeyPress, Shortcut, shortcut_for};
pub use state::{APP_VERSION, AppState, Theme};
pub use storage::{MemoryStorage, Storage};
pub use titles::page_title;
