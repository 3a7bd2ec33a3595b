/* src/app/rust/src/shell/mod.rs */

//! Wires the router, language layer and calendar widget to a host.


use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use craft_calendar::{CalendarWidget, ExportFormat, YearMonth};
use craft_i18n::{LANGUAGE_STORAGE_KEY, Language, LanguageManager, format_clock, resolve_language};
use craft_router::{
  AddressBar, Delay, MountPoint, Navigation, RouteId, Router, TokioDelay, TransitionHooks,
};

use crate::clock::Clock;
use crate::config::CraftConfig;
use crate::document::Document;
use crate::pages::{PageServices, loader_for, render_calendar_slots};
use crate::shortcuts::{KeyPress, Shortcut, shortcut_for};
use crate::state::{AppState, Theme, load_state, save_state};
use crate::storage::Storage;
use crate::timers::{AppTimers, CLOCK_TICK, STATE_SYNC};
use crate::titles::page_title;

/// Everything the embedding environment supplies.
#[derive(Clone)]
pub struct Host {
  pub mount: Arc<dyn MountPoint>,
  pub address: Arc<dyn AddressBar>,
  pub document: Arc<dyn Document>,
  pub storage: Arc<dyn Storage>,
  pub clock: Arc<dyn Clock>,
  /// `Accept-Language`-style list, e.g. joined `navigator.languages`.
  pub preferred_languages: Option<String>,
  pub prefers_dark: bool,
}

/// What a key press or quick action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  Navigated(Navigation),
  LanguageChanged(Language),
  ShortcutsPanel(bool),
  Exported { format: ExportFormat, content: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
  PrevMonth,
  NextMonth,
  Today,
  Select(NaiveDate),
  ToggleSolarTerms,
  ToggleFestivals,
  ToggleLunar,
}

struct OverlayHooks(Arc<dyn Document>);

impl TransitionHooks for OverlayHooks {
  fn transition_start(&self) {
    self.0.set_transition_overlay(true);
  }

  fn transition_end(&self) {
    self.0.set_transition_overlay(false);
  }
}

pub struct AppBuilder {
  host: Host,
  config: CraftConfig,
  delay: Arc<dyn Delay>,
}

impl AppBuilder {
  pub fn config(mut self, config: CraftConfig) -> Self {
    self.config = config;
    self
  }

  pub fn delay(mut self, delay: Arc<dyn Delay>) -> Self {
    self.delay = delay;
    self
  }

  pub fn build(self) -> Arc<App> {
    let Self { host, config, delay } = self;

    let stored = host.storage.get(LANGUAGE_STORAGE_KEY);
    let language = Arc::new(LanguageManager::new(resolve_language(
      stored.as_deref(),
      host.preferred_languages.as_deref(),
      config.i18n.default,
    )));
    let theme = match load_state(host.storage.as_ref()) {
      Some(saved) => saved.theme,
      None if host.prefers_dark => Theme::Dark,
      None => Theme::Light,
    };
    let calendar = Arc::new(Mutex::new(CalendarWidget::new(host.clock.today(), config.calendar)));
    let services = PageServices {
      language: language.clone(),
      calendar: calendar.clone(),
      clock: host.clock.clone(),
    };

    let title_lang = language.clone();
    let mut router = Router::builder(host.mount.clone(), host.address.clone())
      .hooks(Arc::new(OverlayHooks(host.document.clone())))
      .delay(delay)
      .config(config.router)
      .title_fn(Arc::new(move |route| page_title(route, title_lang.current()).to_string()));
    for route in RouteId::ALL {
      router = router.route(route, loader_for(route, services.clone()));
    }
    let router = router.build();

    let app = Arc::new_cyclic(|me: &Weak<App>| {
      let mut timers = AppTimers::new();
      let clock = host.clock.clone();
      let document = host.document.clone();
      timers.add(
        "clock",
        CLOCK_TICK,
        Arc::new(move || document.set_clock(&format_clock(clock.now()))),
      );
      let weak = me.clone();
      timers.add(
        "state-sync",
        STATE_SYNC,
        Arc::new(move || {
          if let Some(app) = weak.upgrade() {
            app.save_state();
          }
        }),
      );
      App {
        router,
        language,
        calendar,
        host,
        theme: Mutex::new(theme),
        shortcuts_visible: AtomicBool::new(false),
        timers,
      }
    });
    app.subscribe();
    app
  }
}

pub struct App {
  router: Arc<Router>,
  language: Arc<LanguageManager>,
  calendar: Arc<Mutex<CalendarWidget>>,
  host: Host,
  theme: Mutex<Theme>,
  shortcuts_visible: AtomicBool,
  timers: AppTimers,
}

impl App {
  pub fn builder(host: Host) -> AppBuilder {
    AppBuilder { host, config: CraftConfig::default(), delay: Arc::new(TokioDelay) }
  }

  fn subscribe(self: &Arc<Self>) {
    let weak = Arc::downgrade(self);
    self.router.subscribe(Arc::new(move |route, previous| {
      let Some(app) = weak.upgrade() else { return };
      debug!(%route, ?previous, "route settled");
      app.host.document.set_active_nav(route);
      app.host.document.set_title(&page_title(route, app.language.current()));
      // freshly rendered pages start out in Chinese
      app.host.mount.set_language(app.language.current().code());
    }));

    let weak = Arc::downgrade(self);
    self.language.subscribe(Arc::new(move |lang, _previous| {
      let Some(app) = weak.upgrade() else { return };
      app.host.storage.set(LANGUAGE_STORAGE_KEY, lang.code());
      app.apply_language(lang);
      if let Some(route) = app.router.current_route() {
        app.host.document.set_title(&page_title(route, lang));
      }
      app.rerender_calendar();
    }));
  }

  pub fn router(&self) -> &Arc<Router> {
    &self.router
  }

  pub fn language(&self) -> &Arc<LanguageManager> {
    &self.language
  }

  pub fn calendar(&self) -> MutexGuard<'_, CalendarWidget> {
    self.calendar.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn theme(&self) -> Theme {
    *self.theme.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn set_theme(&self, theme: Theme) {
    *self.theme.lock().unwrap_or_else(PoisonError::into_inner) = theme;
    self.host.document.set_theme(theme);
  }

  pub fn shortcuts_visible(&self) -> bool {
    self.shortcuts_visible.load(Ordering::SeqCst)
  }

  pub fn timers_running(&self) -> bool {
    self.timers.is_running()
  }

  fn apply_language(&self, lang: Language) {
    self.host.document.set_lang(lang.html_lang());
    self.host.mount.set_language(lang.code());
  }

  /// Apply theme and language, mount the page for the current path and
  /// start the app timers.
  pub async fn start(&self) -> Navigation {
    self.host.document.set_theme(self.theme());
    self.apply_language(self.language.current());
    let navigation = self.router.start().await;
    self.timers.start();
    info!(
      language = %self.language.current(),
      theme = %self.theme(),
      route = ?self.router.current_route(),
      "app started"
    );
    navigation
  }

  /// Hidden pages pause the app timers; becoming visible resumes them.
  pub fn set_visibility(&self, visible: bool) {
    if visible {
      debug!("app visible, resuming timers");
      self.timers.start();
    } else {
      debug!("app hidden, pausing timers");
      self.timers.stop();
    }
  }

  pub async fn handle_key(&self, press: &KeyPress) -> Option<Action> {
    let shortcut = shortcut_for(press)?;
    debug!(?shortcut, "shortcut");
    let action = match shortcut {
      Shortcut::Navigate(route) => Action::Navigated(self.router.navigate(route.name()).await),
      Shortcut::ToggleLanguage => {
        self.language.toggle();
        Action::LanguageChanged(self.language.current())
      }
      Shortcut::ToggleShortcutsPanel => {
        Action::ShortcutsPanel(self.set_shortcuts_panel(!self.shortcuts_visible()))
      }
      Shortcut::Escape if self.shortcuts_visible() => {
        Action::ShortcutsPanel(self.set_shortcuts_panel(false))
      }
      Shortcut::Escape => Action::Navigated(self.router.navigate(RouteId::Home.name()).await),
      Shortcut::QuickAction => self.quick_action().await,
    };
    Some(action)
  }

  fn set_shortcuts_panel(&self, visible: bool) -> bool {
    self.shortcuts_visible.store(visible, Ordering::SeqCst);
    self.host.document.set_shortcuts_panel(visible);
    visible
  }

  /// Home opens the calendar, the calendar exports JSON, anything else
  /// goes home.
  pub async fn quick_action(&self) -> Action {
    match self.router.current_route() {
      Some(RouteId::Home) => Action::Navigated(self.router.navigate(RouteId::Calendar.name()).await),
      Some(RouteId::Calendar) => {
        let format = ExportFormat::Json;
        Action::Exported { format, content: self.export_calendar(format) }
      }
      _ => Action::Navigated(self.router.navigate(RouteId::Home.name()).await),
    }
  }

  /// Apply a widget control. Returns whether the widget changed.
  pub fn calendar_action(&self, action: CalendarAction) -> bool {
    let changed = {
      let mut widget = self.calendar();
      match action {
        CalendarAction::PrevMonth => widget.navigate_month(-1),
        CalendarAction::NextMonth => widget.navigate_month(1),
        CalendarAction::Today => {
          let today = self.host.clock.today();
          widget.refresh_today(today);
          widget.show_month(YearMonth::containing(today));
          widget.select_date(today);
          true
        }
        CalendarAction::Select(date) => widget.select_date(date),
        CalendarAction::ToggleSolarTerms => {
          widget.config_mut().toggle_solar_terms();
          true
        }
        CalendarAction::ToggleFestivals => {
          widget.config_mut().toggle_festivals();
          true
        }
        CalendarAction::ToggleLunar => {
          widget.config_mut().toggle_lunar();
          true
        }
      }
    };
    if changed {
      self.rerender_calendar();
    }
    changed
  }

  fn rerender_calendar(&self) {
    if self.router.current_route() != Some(RouteId::Calendar) {
      return;
    }
    let widget = self.calendar();
    render_calendar_slots(self.host.mount.as_ref(), &widget);
    self.host.mount.set_language(self.language.current().code());
  }

  pub fn export_calendar(&self, format: ExportFormat) -> String {
    let widget = self.calendar();
    info!(format = format.extension(), month = %widget.view(), "calendar exported");
    widget.export(format)
  }

  pub fn save_state(&self) {
    let state = AppState::new(self.language.current(), self.theme(), Utc::now());
    save_state(self.host.storage.as_ref(), &state);
    debug!("app state saved");
  }

  /// Stop timers, tear down the mounted page and persist state.
  pub fn destroy(&self) {
    self.timers.stop();
    self.router.unmount();
    self.save_state();
    info!("app destroyed");
  }
}
