/* src/router/core/rust/src/page.rs */

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::errors::PageError;
use crate::host::MountPoint;
use crate::route::RouteId;
use crate::router::RouterHandle;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// What a page gets when it is constructed.
#[derive(Clone)]
pub struct PageContext {
  pub route: RouteId,
  pub container: Arc<dyn MountPoint>,
  pub router: RouterHandle,
}

/// A mounted page. The router always calls `destroy` before the page's
/// content is replaced, so anything the page started (timers, listeners)
/// must be released there.
pub trait PageModule: Send {
  /// Write the page into its container. Must be idempotent.
  fn render(&mut self) -> BoxFuture<'_, Result<(), PageError>>;

  fn init(&mut self) -> BoxFuture<'_, Result<(), PageError>> {
    Box::pin(async { Ok(()) })
  }

  fn destroy(&mut self);
}

pub type PageFactory = Arc<dyn Fn(PageContext) -> Box<dyn PageModule> + Send + Sync>;

/// Lazily produces a page factory. Called at most once per successful load.
pub type Loader = Arc<dyn Fn() -> BoxFuture<'static, Result<PageFactory, String>> + Send + Sync>;

/// Wrap a page constructor as a loader that resolves immediately.
pub fn ready_loader<F>(construct: F) -> Loader
where
  F: Fn(PageContext) -> Box<dyn PageModule> + Send + Sync + 'static,
{
  let factory: PageFactory = Arc::new(construct);
  Arc::new(move || {
    let factory = factory.clone();
    Box::pin(async move { Ok(factory) })
  })
}
