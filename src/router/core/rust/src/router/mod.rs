/* src/router/core/rust/src/router/mod.rs */

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use chrono::Utc;
use futures_util::future::join_all;
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::error_view::render_error_view;
use crate::errors::{Rejection, RouteError};
use crate::history::{HistoryEntry, NavigationHistory};
use crate::host::{AddressBar, Delay, HistoryState, MountPoint, NoopHooks, TokioDelay, TransitionHooks};
use crate::page::{Loader, PageContext, PageModule};
use crate::registry::RouteRegistry;
use crate::route::{RouteId, route_name_from_path};

#[cfg(test)]
mod tests;

pub type RouteListener = Arc<dyn Fn(RouteId, Option<RouteId>) + Send + Sync>;
pub type TitleFn = Arc<dyn Fn(RouteId) -> String + Send + Sync>;

/// Router tunables. Deserializes from the `[router]` table of `craft.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
  /// Full transition length; each half brackets the content swap.
  pub transition_ms: u64,
  pub history_limit: usize,
  pub history_keep: usize,
}

impl Default for RouterConfig {
  fn default() -> Self {
    Self { transition_ms: 800, history_limit: 50, history_keep: 25 }
  }
}

impl RouterConfig {
  pub fn half_transition(&self) -> Duration {
    Duration::from_millis(self.transition_ms / 2)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
  #[default]
  Idle,
  TransitionOut,
  Swapping,
  TransitionIn,
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
  Committed,
  /// Turned away before anything changed.
  Rejected(Rejection),
  /// The target failed and home was rendered instead.
  FellBack(RouteError),
  /// Neither the target nor home could be rendered; the error view is up.
  Failed(RouteError),
}

impl Navigation {
  pub fn succeeded(&self) -> bool {
    matches!(self, Self::Committed)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadReport {
  pub loaded: usize,
  pub total: usize,
  pub failures: Vec<RouteError>,
}

struct RouterState {
  current: Option<RouteId>,
  phase: Phase,
  history: NavigationHistory,
  page: Option<Box<dyn PageModule>>,
}

pub struct RouterBuilder {
  mount: Arc<dyn MountPoint>,
  address: Arc<dyn AddressBar>,
  hooks: Arc<dyn TransitionHooks>,
  delay: Arc<dyn Delay>,
  config: RouterConfig,
  title: TitleFn,
  routes: Vec<(RouteId, Loader)>,
}

impl RouterBuilder {
  pub fn hooks(mut self, hooks: Arc<dyn TransitionHooks>) -> Self {
    self.hooks = hooks;
    self
  }

  pub fn delay(mut self, delay: Arc<dyn Delay>) -> Self {
    self.delay = delay;
    self
  }

  pub fn config(mut self, config: RouterConfig) -> Self {
    self.config = config;
    self
  }

  pub fn title_fn(mut self, title: TitleFn) -> Self {
    self.title = title;
    self
  }

  pub fn route(mut self, route: RouteId, loader: Loader) -> Self {
    self.routes.push((route, loader));
    self
  }

  pub fn build(self) -> Arc<Router> {
    let registry = RouteRegistry::new();
    for (route, loader) in self.routes {
      registry.register(route, loader);
    }
    let history = NavigationHistory::new(self.config.history_limit, self.config.history_keep);
    Arc::new_cyclic(|me| Router {
      me: me.clone(),
      mount: self.mount,
      address: self.address,
      hooks: self.hooks,
      delay: self.delay,
      config: self.config,
      title: self.title,
      registry,
      state: Mutex::new(RouterState { current: None, phase: Phase::Idle, history, page: None }),
      listeners: Mutex::new(Vec::new()),
    })
  }
}

pub struct Router {
  me: Weak<Router>,
  mount: Arc<dyn MountPoint>,
  address: Arc<dyn AddressBar>,
  hooks: Arc<dyn TransitionHooks>,
  delay: Arc<dyn Delay>,
  config: RouterConfig,
  title: TitleFn,
  registry: RouteRegistry,
  state: Mutex<RouterState>,
  listeners: Mutex<Vec<RouteListener>>,
}

/// Returns the router to `Idle` however the navigation ends.
struct IdleOnDrop<'a>(&'a Router);

impl Drop for IdleOnDrop<'_> {
  fn drop(&mut self) {
    self.0.set_phase(Phase::Idle);
  }
}

impl Router {
  pub fn builder(mount: Arc<dyn MountPoint>, address: Arc<dyn AddressBar>) -> RouterBuilder {
    RouterBuilder {
      mount,
      address,
      hooks: Arc::new(NoopHooks),
      delay: Arc::new(TokioDelay),
      config: RouterConfig::default(),
      title: Arc::new(|route| route.default_title().to_string()),
      routes: Vec::new(),
    }
  }

  fn state(&self) -> MutexGuard<'_, RouterState> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  fn set_phase(&self, phase: Phase) {
    self.state().phase = phase;
  }

  pub fn handle(&self) -> RouterHandle {
    RouterHandle { router: self.me.clone() }
  }

  pub fn config(&self) -> &RouterConfig {
    &self.config
  }

  pub fn registry(&self) -> &RouteRegistry {
    &self.registry
  }

  pub fn current_route(&self) -> Option<RouteId> {
    self.state().current
  }

  pub fn phase(&self) -> Phase {
    self.state().phase
  }

  pub fn is_transitioning(&self) -> bool {
    self.phase() != Phase::Idle
  }

  pub fn history(&self) -> Vec<HistoryEntry> {
    self.state().history.entries().to_vec()
  }

  pub fn previous_route(&self) -> Option<RouteId> {
    self.state().history.previous()
  }

  pub fn can_go_back(&self) -> bool {
    self.state().history.can_go_back()
  }

  pub fn title_for(&self, route: RouteId) -> String {
    (self.title)(route)
  }

  /// Called with `(route, previous)` once a navigation has fully settled.
  pub fn subscribe(&self, listener: RouteListener) {
    self.listeners.lock().unwrap_or_else(PoisonError::into_inner).push(listener);
  }

  fn notify(&self, route: RouteId, previous: Option<RouteId>) {
    let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner).clone();
    for listener in listeners {
      listener(route, previous);
    }
  }

  /// Navigate to the route named by the current address-bar path.
  pub async fn start(&self) -> Navigation {
    let path = self.address.location_path();
    info!(%path, "router starting");
    self.navigate_with(route_name_from_path(&path), false).await
  }

  pub async fn navigate(&self, name: &str) -> Navigation {
    self.navigate_with(name, true).await
  }

  pub async fn navigate_with(&self, name: &str, update_history: bool) -> Navigation {
    self.run(name, update_history, false).await
  }

  /// Browser back/forward. `state` is the route stored with the entry;
  /// without one the route comes from the current path.
  pub async fn handle_pop_state(&self, state: Option<&str>) -> Navigation {
    let path = self.address.location_path();
    let name = state.unwrap_or_else(|| route_name_from_path(&path));
    self.navigate_with(name, false).await
  }

  pub async fn go_back(&self) -> Navigation {
    match self.previous_route() {
      Some(previous) => self.navigate(previous.name()).await,
      None => Navigation::Rejected(Rejection::NoHistory),
    }
  }

  /// Drop the cached factory for the current route and render it again
  /// without pushing an address-bar entry.
  pub async fn reload(&self) -> Navigation {
    let Some(current) = self.current_route() else {
      return Navigation::Rejected(Rejection::NothingToReload);
    };
    self.registry.invalidate(current);
    self.run(current.name(), false, true).await
  }

  pub async fn preload_route(&self, name: &str) -> Result<(), RouteError> {
    let route =
      RouteId::parse(name).ok_or_else(|| RouteError::NotFound { route: name.to_string() })?;
    self.registry.resolve(route).await?;
    debug!(%route, "page preloaded");
    Ok(())
  }

  pub async fn preload_all_routes(&self) -> PreloadReport {
    let routes = self.registry.routes();
    let results = join_all(routes.iter().map(|r| self.preload_route(r.name()))).await;
    let total = results.len();
    let failures: Vec<RouteError> = results.into_iter().filter_map(Result::err).collect();
    let loaded = total - failures.len();
    info!(loaded, total, "routes preloaded");
    PreloadReport { loaded, total, failures }
  }

  async fn run(&self, name: &str, update_history: bool, force: bool) -> Navigation {
    let route = RouteId::parse(name);
    {
      let mut state = self.state();
      if state.phase != Phase::Idle {
        debug!(route = name, "navigation rejected: transition in progress");
        return Navigation::Rejected(Rejection::Transitioning);
      }
      if !force && route.is_some() && route == state.current {
        return Navigation::Rejected(Rejection::SameRoute);
      }
      state.phase = Phase::TransitionOut;
    }
    let idle = IdleOnDrop(self);

    info!(route = name, "navigating");
    self.hooks.transition_start();
    self.delay.sleep(self.config.half_transition()).await;

    self.set_phase(Phase::Swapping);
    let swapped = match route {
      Some(route) => self.swap(route).await.map(|()| route),
      None => Err(RouteError::NotFound { route: name.to_string() }),
    };

    let (outcome, settled) = match swapped {
      Ok(route) => {
        let previous = self.commit(route, update_history);
        self.set_phase(Phase::TransitionIn);
        self.hooks.transition_end();
        self.delay.sleep(self.config.half_transition()).await;
        self.mount.play_enter_animation();
        (Navigation::Committed, Some((route, previous)))
      }
      Err(err) => {
        error!(route = name, error = %err, "navigation failed");
        let recovered = self.recover(err).await;
        self.hooks.transition_end();
        recovered
      }
    };

    drop(idle);
    if let Some((route, previous)) = settled {
      self.notify(route, previous);
    }
    outcome
  }

  /// Fall back to home, or to the static error view when home is already
  /// current or cannot be rendered either.
  async fn recover(&self, err: RouteError) -> (Navigation, Option<(RouteId, Option<RouteId>)>) {
    if self.current_route() != Some(RouteId::Home) {
      match self.swap(RouteId::Home).await {
        Ok(()) => {
          let previous = self.commit(RouteId::Home, true);
          self.mount.play_enter_animation();
          return (Navigation::FellBack(err), Some((RouteId::Home, previous)));
        }
        Err(fallback) => error!(error = %fallback, "falling back to home failed"),
      }
    }
    self.release_page();
    self.mount.set_html(&render_error_view(&err.to_string()));
    (Navigation::Failed(err), None)
  }

  async fn swap(&self, route: RouteId) -> Result<(), RouteError> {
    let factory = self.registry.resolve(route).await?;

    self.release_page();

    let ctx = PageContext { route, container: self.mount.clone(), router: self.handle() };
    let mut page = factory(ctx);
    let mut rendered = page.render().await;
    if rendered.is_ok() {
      rendered = page.init().await;
    }
    if let Err(e) = rendered {
      page.destroy();
      return Err(RouteError::Render { route: route.name().to_string(), message: e.to_string() });
    }

    self.mount.set_class(&format!("page-container page-{}", route.name()));
    self.state().page = Some(page);
    Ok(())
  }

  /// Destroy the mounted page, if any, and empty the mount point.
  fn release_page(&self) {
    let old = self.state().page.take();
    if let Some(mut old) = old {
      old.destroy();
    }
    self.mount.clear();
  }

  fn commit(&self, route: RouteId, update_history: bool) -> Option<RouteId> {
    let previous = {
      let mut state = self.state();
      let previous = state.current.replace(route);
      state.history.push(route, Utc::now());
      previous
    };
    if update_history {
      let title = (self.title)(route);
      self.address.push_state(HistoryState { route, path: route.path(), title });
    }
    previous
  }

  /// Destroy the mounted page. Used when the app shuts down.
  pub fn unmount(&self) {
    let page = self.state().page.take();
    match page {
      Some(mut page) => page.destroy(),
      None => warn!("unmount called with no page mounted"),
    }
  }
}

/// Weak, cloneable handle given to pages. Calls on a dropped router are
/// rejected rather than panicking.
#[derive(Clone)]
pub struct RouterHandle {
  router: Weak<Router>,
}

impl RouterHandle {
  pub fn detached() -> Self {
    Self { router: Weak::new() }
  }

  pub fn upgrade(&self) -> Option<Arc<Router>> {
    self.router.upgrade()
  }

  pub fn current_route(&self) -> Option<RouteId> {
    self.upgrade().and_then(|r| r.current_route())
  }

  pub async fn navigate(&self, name: &str) -> Navigation {
    match self.upgrade() {
      Some(router) => router.navigate(name).await,
      None => Navigation::Rejected(Rejection::Detached),
    }
  }
}
