/* src/app/rust/src/pages/mod.rs */

mod about;
mod calendar;
mod features;
mod home;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use craft_calendar::CalendarWidget;
use craft_i18n::LanguageManager;
use craft_router::{Loader, PageModule, RouteId, ready_loader};

use crate::clock::Clock;

pub use about::AboutPage;
pub use calendar::{CalendarPage, render_calendar_slots, render_today_info};
pub use features::FeaturesPage;
pub use home::{HomePage, render_preview};

/// Shared state pages read from. Cloned into every page instance.
#[derive(Clone)]
pub struct PageServices {
  pub language: Arc<LanguageManager>,
  pub calendar: Arc<Mutex<CalendarWidget>>,
  pub clock: Arc<dyn Clock>,
}

impl PageServices {
  pub fn calendar(&self) -> MutexGuard<'_, CalendarWidget> {
    self.calendar.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

pub fn loader_for(route: RouteId, services: PageServices) -> Loader {
  match route {
    RouteId::Home => {
      ready_loader(move |ctx| Box::new(HomePage::new(ctx, services.clone())) as Box<dyn PageModule>)
    }
    RouteId::Calendar => ready_loader(move |ctx| {
      Box::new(CalendarPage::new(ctx, services.clone())) as Box<dyn PageModule>
    }),
    RouteId::Features => ready_loader(|ctx| Box::new(FeaturesPage::new(ctx)) as Box<dyn PageModule>),
    RouteId::About => ready_loader(|ctx| Box::new(AboutPage::new(ctx)) as Box<dyn PageModule>),
  }
}

#[cfg(test)]
pub(crate) mod fixture {
  use std::sync::{Arc, Mutex};

  use chrono::NaiveDate;
  use craft_calendar::{CalendarConfig, CalendarWidget};
  use craft_i18n::{Language, LanguageManager};
  use craft_router::{MemoryMount, PageContext, RouteId, RouterHandle};

  use super::PageServices;
  use crate::clock::FixedClock;

  pub fn services() -> PageServices {
    let now = NaiveDate::from_ymd_opt(2025, 8, 8).unwrap().and_hms_opt(9, 30, 0).unwrap();
    PageServices {
      language: Arc::new(LanguageManager::new(Language::Zh)),
      calendar: Arc::new(Mutex::new(CalendarWidget::new(now.date(), CalendarConfig::default()))),
      clock: Arc::new(FixedClock(now)),
    }
  }

  pub fn context(route: RouteId) -> (Arc<MemoryMount>, PageContext) {
    let mount = Arc::new(MemoryMount::new());
    let ctx = PageContext { route, container: mount.clone(), router: RouterHandle::detached() };
    (mount, ctx)
  }
}
