/* src/router/core/rust/src/lib.rs */

//! Client-side router: lazily loaded pages swapped behind a two-phase
//! transition, with bounded history and address-bar sync. The DOM is
//! reached only through the traits in [`host`].

pub mod error_view;
pub mod errors;
pub mod history;
pub mod host;
pub mod page;
pub mod registry;
pub mod route;
pub mod router;

// Public API re-exports
pub use error_view::render_error_view;
pub use errors::{PageError, Rejection, RouteError};
pub use history::{HistoryEntry, NavigationHistory};
pub use host::{
  AddressBar, Delay, HistoryState, Immediate, MemoryAddressBar, MemoryMount, MountPoint, NoopHooks,
  TokioDelay, TransitionHooks,
};
pub use page::{BoxFuture, Loader, PageContext, PageFactory, PageModule, ready_loader};
pub use registry::RouteRegistry;
pub use route::{RouteId, route_name_from_path};
pub use router::{
  Navigation, Phase, PreloadReport, RouteListener, Router, RouterBuilder, RouterConfig,
  RouterHandle, TitleFn,
};
