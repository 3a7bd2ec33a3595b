/* src/router/core/rust/src/registry.rs */

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use futures_util::FutureExt;
use futures_util::future::Shared;
use tracing::{debug, warn};

use crate::errors::RouteError;
use crate::page::{BoxFuture, Loader, PageFactory};
use crate::route::RouteId;

type LoadFuture = Shared<BoxFuture<'static, Result<PageFactory, String>>>;

enum LoadState {
  Unloaded,
  Loading(LoadFuture),
  Loaded(PageFactory),
}

struct RouteSlot {
  loader: Loader,
  state: LoadState,
}

/// Registered routes and their lazily loaded page factories.
///
/// A factory is loaded at most once; concurrent requests for an unloaded
/// route await the same in-flight load. A failed load leaves the slot
/// unloaded so the next request retries.
#[derive(Default)]
pub struct RouteRegistry {
  slots: Mutex<BTreeMap<RouteId, RouteSlot>>,
}

impl RouteRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  fn slots(&self) -> MutexGuard<'_, BTreeMap<RouteId, RouteSlot>> {
    self.slots.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Register or replace the loader for `route`.
  pub fn register(&self, route: RouteId, loader: Loader) {
    self.slots().insert(route, RouteSlot { loader, state: LoadState::Unloaded });
  }

  pub fn routes(&self) -> Vec<RouteId> {
    self.slots().keys().copied().collect()
  }

  pub fn contains(&self, route: RouteId) -> bool {
    self.slots().contains_key(&route)
  }

  pub fn is_loaded(&self, route: RouteId) -> bool {
    matches!(self.slots().get(&route).map(|s| &s.state), Some(LoadState::Loaded(_)))
  }

  /// Forget a loaded factory so the next resolve calls the loader again.
  pub fn invalidate(&self, route: RouteId) {
    if let Some(slot) = self.slots().get_mut(&route) {
      slot.state = LoadState::Unloaded;
    }
  }

  pub async fn resolve(&self, route: RouteId) -> Result<PageFactory, RouteError> {
    let load = {
      let mut slots = self.slots();
      let slot = slots
        .get_mut(&route)
        .ok_or_else(|| RouteError::NotFound { route: route.name().to_string() })?;
      match &slot.state {
        LoadState::Loaded(factory) => return Ok(factory.clone()),
        LoadState::Loading(load) => {
          debug!(%route, "joining in-flight page load");
          load.clone()
        }
        LoadState::Unloaded => {
          debug!(%route, "loading page");
          let load = (slot.loader)().shared();
          slot.state = LoadState::Loading(load.clone());
          load
        }
      }
    };

    let result = load.clone().await;

    {
      let mut slots = self.slots();
      if let Some(slot) = slots.get_mut(&route) {
        // an invalidate or re-register during the load wins
        let current = matches!(&slot.state, LoadState::Loading(l) if l.ptr_eq(&load));
        if current {
          slot.state = match &result {
            Ok(factory) => LoadState::Loaded(factory.clone()),
            Err(_) => LoadState::Unloaded,
          };
        }
      }
    }

    result.map_err(|message| {
      warn!(%route, %message, "page load failed");
      RouteError::Load { route: route.name().to_string(), message }
    })
  }
}
