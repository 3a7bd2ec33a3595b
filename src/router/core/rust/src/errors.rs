/* src/router/core/rust/src/errors.rs */

use thiserror::Error;

/// Failure of a single navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
  #[error("route not found: {route}")]
  NotFound { route: String },
  #[error("failed to load page `{route}`: {message}")]
  Load { route: String, message: String },
  #[error("failed to render page `{route}`: {message}")]
  Render { route: String, message: String },
}

impl RouteError {
  pub fn route(&self) -> &str {
    match self {
      Self::NotFound { route } | Self::Load { route, .. } | Self::Render { route, .. } => route,
    }
  }
}

/// Error raised by a page module's `render` or `init`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct PageError(pub String);

impl PageError {
  pub fn new(message: impl Into<String>) -> Self {
    Self(message.into())
  }
}

/// Why a navigation request was turned away without touching any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
  #[error("a navigation is already in progress")]
  Transitioning,
  #[error("already on the requested route")]
  SameRoute,
  #[error("no earlier history entry")]
  NoHistory,
  #[error("no current route to reload")]
  NothingToReload,
  #[error("router has been dropped")]
  Detached,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    let err = RouteError::NotFound { route: "nope".into() };
    assert_eq!(err.to_string(), "route not found: nope");
    assert_eq!(err.route(), "nope");
    let err = RouteError::Load { route: "about".into(), message: "offline".into() };
    assert_eq!(err.to_string(), "failed to load page `about`: offline");
  }
}
