/* src/router/core/rust/src/router/tests.rs */

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::time::Instant;

use super::*;
use crate::errors::PageError;
use crate::host::{MemoryAddressBar, MemoryMount};
use crate::page::{BoxFuture, PageFactory};

#[derive(Clone, Default)]
struct Log(Arc<Mutex<Vec<String>>>);

impl Log {
  fn push(&self, line: String) {
    self.0.lock().unwrap().push(line);
  }

  fn lines(&self) -> Vec<String> {
    self.0.lock().unwrap().clone()
  }

  fn position(&self, line: &str) -> Option<usize> {
    self.lines().iter().position(|l| l == line)
  }
}

#[derive(Clone, Copy)]
enum Mode {
  Ok,
  LoadFails,
  RenderFails,
  InitFails,
}

struct TestPage {
  ctx: PageContext,
  log: Log,
  mode: Mode,
}

impl PageModule for TestPage {
  fn render(&mut self) -> BoxFuture<'_, Result<(), PageError>> {
    Box::pin(async move {
      self.log.push(format!("{}:render", self.ctx.route));
      if matches!(self.mode, Mode::RenderFails) {
        return Err(PageError::new("render broke"));
      }
      let html = format!(r#"<section class="page-view">{}</section>"#, self.ctx.route);
      self.ctx.container.set_html(&html);
      Ok(())
    })
  }

  fn init(&mut self) -> BoxFuture<'_, Result<(), PageError>> {
    Box::pin(async move {
      self.log.push(format!("{}:init", self.ctx.route));
      if matches!(self.mode, Mode::InitFails) {
        return Err(PageError::new("init broke"));
      }
      Ok(())
    })
  }

  fn destroy(&mut self) {
    self.log.push(format!("{}:destroy", self.ctx.route));
  }
}

fn loader(log: Log, mode: Mode, calls: Arc<AtomicUsize>) -> Loader {
  Arc::new(move || {
    calls.fetch_add(1, Ordering::SeqCst);
    let log = log.clone();
    Box::pin(async move {
      if matches!(mode, Mode::LoadFails) {
        return Err("chunk missing".to_string());
      }
      let factory: PageFactory = Arc::new(move |ctx| {
        Box::new(TestPage { ctx, log: log.clone(), mode }) as Box<dyn PageModule>
      });
      Ok(factory)
    })
  })
}

struct Fixture {
  router: Arc<Router>,
  mount: Arc<MemoryMount>,
  address: Arc<MemoryAddressBar>,
  log: Log,
  calls: Arc<AtomicUsize>,
}

#[derive(Default)]
struct CountingHooks {
  starts: AtomicUsize,
  ends: AtomicUsize,
}

impl TransitionHooks for CountingHooks {
  fn transition_start(&self) {
    self.starts.fetch_add(1, Ordering::SeqCst);
  }

  fn transition_end(&self) {
    self.ends.fetch_add(1, Ordering::SeqCst);
  }
}

fn fixture_with(mode_for: impl Fn(RouteId) -> Mode, hooks: Arc<dyn TransitionHooks>) -> Fixture {
  let mount = Arc::new(MemoryMount::new());
  let address = Arc::new(MemoryAddressBar::default());
  let log = Log::default();
  let calls = Arc::new(AtomicUsize::new(0));
  let mut builder = Router::builder(mount.clone(), address.clone()).hooks(hooks);
  for route in RouteId::ALL {
    builder = builder.route(route, loader(log.clone(), mode_for(route), calls.clone()));
  }
  Fixture { router: builder.build(), mount, address, log, calls }
}

fn fixture() -> Fixture {
  fixture_with(|_| Mode::Ok, Arc::new(NoopHooks))
}

#[tokio::test(start_paused = true)]
async fn first_navigation_commits_and_concurrent_one_is_rejected() {
  let f = fixture();
  let (home, calendar) = tokio::join!(f.router.navigate("home"), f.router.navigate("calendar"));
  assert_eq!(home, Navigation::Committed);
  assert_eq!(calendar, Navigation::Rejected(Rejection::Transitioning));
  assert_eq!(f.router.current_route(), Some(RouteId::Home));
  assert_eq!(f.router.history().len(), 1);
  assert!(!f.router.is_transitioning());
}

#[tokio::test(start_paused = true)]
async fn same_route_is_rejected() {
  let f = fixture();
  f.router.navigate("about").await;
  assert_eq!(f.router.navigate("about").await, Navigation::Rejected(Rejection::SameRoute));
  assert_eq!(f.router.history().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn navigation_takes_the_configured_transition() {
  let f = fixture();
  let start = Instant::now();
  f.router.navigate("features").await;
  assert_eq!(start.elapsed(), Duration::from_millis(800));
}

#[tokio::test(start_paused = true)]
async fn phases_progress_through_the_transition() {
  let f = fixture();
  let router = f.router.clone();
  let inbound_nav = async move {
    tokio::time::sleep(Duration::from_millis(100)).await;
    let out = router.phase();
    tokio::time::sleep(Duration::from_millis(400)).await;
    (out, router.phase())
  };
  let (_, (out, inbound)) = tokio::join!(f.router.navigate("calendar"), inbound_nav);
  assert_eq!(out, Phase::TransitionOut);
  assert_eq!(inbound, Phase::TransitionIn);
  assert_eq!(f.router.phase(), Phase::Idle);
}

#[tokio::test(start_paused = true)]
async fn sixty_navigations_keep_history_bounded() {
  let f = fixture();
  for i in 0..60 {
    let name = if i % 2 == 0 { "home" } else { "calendar" };
    assert!(f.router.navigate(name).await.succeeded());
  }
  let history = f.router.history();
  assert!(history.len() <= 50);
  assert_eq!(history.len(), 34);
  assert_eq!(history.last().map(|e| e.route), Some(RouteId::Calendar));
}

#[tokio::test(start_paused = true)]
async fn unknown_route_falls_back_to_home() {
  let f = fixture();
  let outcome = f.router.navigate("nope").await;
  assert_eq!(outcome, Navigation::FellBack(RouteError::NotFound { route: "nope".into() }));
  assert_eq!(f.router.current_route(), Some(RouteId::Home));
  assert!(f.mount.html().contains("home"));
  assert_eq!(f.mount.class(), "page-container page-home");
  assert_eq!(f.address.location_path(), "/");
}

#[tokio::test(start_paused = true)]
async fn unknown_route_while_home_shows_error_view() {
  let f = fixture();
  f.router.navigate("home").await;
  let outcome = f.router.navigate("nope").await;
  assert!(matches!(outcome, Navigation::Failed(RouteError::NotFound { .. })));
  let html = f.mount.html();
  assert!(html.contains("error-page"));
  assert!(html.contains("route not found: nope"));
  assert_eq!(f.router.current_route(), Some(RouteId::Home));
}

#[tokio::test(start_paused = true)]
async fn error_view_destroys_the_mounted_page() {
  let f = fixture();
  f.router.navigate("home").await;
  f.router.navigate("nope").await;
  assert_eq!(f.log.lines(), ["home:render", "home:init", "home:destroy"]);
  assert!(!f.mount.html().contains("page-view"));
  // nothing left for unmount to release
  f.router.unmount();
  assert_eq!(f.log.lines().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn failing_home_ends_in_error_view() {
  let f = fixture_with(
    |r| match r {
      RouteId::Home => Mode::RenderFails,
      RouteId::About => Mode::LoadFails,
      _ => Mode::Ok,
    },
    Arc::new(NoopHooks),
  );
  let outcome = f.router.navigate("about").await;
  assert_eq!(
    outcome,
    Navigation::Failed(RouteError::Load { route: "about".into(), message: "chunk missing".into() })
  );
  assert_eq!(f.router.current_route(), None);
  assert!(f.mount.html().contains("chunk missing"));
  assert!(!f.router.is_transitioning());
}

#[tokio::test(start_paused = true)]
async fn failed_render_destroys_the_page() {
  let f = fixture_with(
    |r| if r == RouteId::Features { Mode::InitFails } else { Mode::Ok },
    Arc::new(NoopHooks),
  );
  f.router.navigate("about").await;
  let outcome = f.router.navigate("features").await;
  assert!(matches!(outcome, Navigation::FellBack(RouteError::Render { .. })));
  let render = f.log.position("features:init").unwrap();
  let destroy = f.log.position("features:destroy").unwrap();
  assert!(render < destroy);
  assert_eq!(f.router.current_route(), Some(RouteId::Home));
}

#[tokio::test(start_paused = true)]
async fn previous_page_is_destroyed_before_the_swap() {
  let f = fixture();
  f.router.navigate("home").await;
  f.router.navigate("calendar").await;
  assert_eq!(
    f.log.lines(),
    vec!["home:render", "home:init", "home:destroy", "calendar:render", "calendar:init"]
  );
}

#[tokio::test(start_paused = true)]
async fn reload_reruns_loader_without_touching_address_bar() {
  let f = fixture();
  assert_eq!(f.router.reload().await, Navigation::Rejected(Rejection::NothingToReload));
  f.router.navigate("calendar").await;
  let pushed = f.address.entries().len();
  assert_eq!(f.router.reload().await, Navigation::Committed);
  assert_eq!(f.calls.load(Ordering::SeqCst), 2);
  assert_eq!(f.address.entries().len(), pushed);
  assert_eq!(f.log.position("calendar:destroy"), Some(2));
}

#[tokio::test(start_paused = true)]
async fn go_back_returns_to_previous_route() {
  let f = fixture();
  assert_eq!(f.router.go_back().await, Navigation::Rejected(Rejection::NoHistory));
  f.router.navigate("home").await;
  f.router.navigate("about").await;
  assert!(f.router.can_go_back());
  assert_eq!(f.router.previous_route(), Some(RouteId::Home));
  assert_eq!(f.router.go_back().await, Navigation::Committed);
  assert_eq!(f.router.current_route(), Some(RouteId::Home));
}

#[tokio::test(start_paused = true)]
async fn address_bar_gets_paths_and_titles() {
  let f = fixture();
  f.router.navigate("features").await;
  f.router.navigate("home").await;
  let entries = f.address.entries();
  assert_eq!(entries[0].path, "/features");
  assert_eq!(entries[0].title, "功能特色 · CalendarCraft");
  assert_eq!(entries[1].path, "/");
}

#[tokio::test(start_paused = true)]
async fn start_and_pop_state_do_not_push_entries() {
  let mount = Arc::new(MemoryMount::new());
  let address = Arc::new(MemoryAddressBar::new("/calendar"));
  let log = Log::default();
  let calls = Arc::new(AtomicUsize::new(0));
  let mut builder = Router::builder(mount.clone(), address.clone());
  for route in RouteId::ALL {
    builder = builder.route(route, loader(log.clone(), Mode::Ok, calls.clone()));
  }
  let router = builder.build();

  assert!(router.start().await.succeeded());
  assert_eq!(router.current_route(), Some(RouteId::Calendar));
  assert!(router.handle_pop_state(Some("about")).await.succeeded());
  assert_eq!(router.current_route(), Some(RouteId::About));
  assert!(address.entries().is_empty());
}

#[tokio::test(start_paused = true)]
async fn listeners_fire_after_settling() {
  let f = fixture();
  let seen: Arc<Mutex<Vec<(RouteId, Option<RouteId>, bool)>>> = Arc::default();
  let handle = f.router.handle();
  let sink = seen.clone();
  f.router.subscribe(Arc::new(move |route, previous| {
    let busy = handle.upgrade().is_some_and(|r| r.is_transitioning());
    sink.lock().unwrap().push((route, previous, busy));
  }));

  f.router.navigate("home").await;
  f.router.navigate("about").await;
  f.router.navigate("about").await;
  assert_eq!(
    *seen.lock().unwrap(),
    vec![(RouteId::Home, None, false), (RouteId::About, Some(RouteId::Home), false)]
  );
}

#[tokio::test(start_paused = true)]
async fn hooks_bracket_every_attempt() {
  let hooks = Arc::new(CountingHooks::default());
  let f = fixture_with(|_| Mode::Ok, hooks.clone());
  f.router.navigate("home").await;
  f.router.navigate("nope").await;
  assert_eq!(hooks.starts.load(Ordering::SeqCst), 2);
  assert_eq!(hooks.ends.load(Ordering::SeqCst), 2);
  assert_eq!(f.mount.enter_animations(), 1);
}

#[tokio::test(start_paused = true)]
async fn preload_reports_failures() {
  let f = fixture_with(
    |r| if r == RouteId::About { Mode::LoadFails } else { Mode::Ok },
    Arc::new(NoopHooks),
  );
  let report = f.router.preload_all_routes().await;
  assert_eq!((report.loaded, report.total), (3, 4));
  assert_eq!(report.failures[0].route(), "about");
  assert!(f.router.registry().is_loaded(RouteId::Calendar));
  assert!(f.log.lines().is_empty());

  f.router.navigate("calendar").await;
  assert_eq!(f.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test(start_paused = true)]
async fn preload_and_navigate_share_a_load() {
  let f = fixture();
  let (preloaded, nav) = tokio::join!(f.router.preload_route("features"), f.router.navigate("features"));
  assert!(preloaded.is_ok());
  assert!(nav.succeeded());
  assert_eq!(f.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn detached_handle_rejects() {
  let handle = RouterHandle::detached();
  assert_eq!(handle.navigate("home").await, Navigation::Rejected(Rejection::Detached));
  assert_eq!(handle.current_route(), None);
}

#[tokio::test(start_paused = true)]
async fn unmount_destroys_current_page() {
  let f = fixture();
  f.router.navigate("about").await;
  f.router.unmount();
  assert_eq!(f.log.lines().last().map(String::as_str), Some("about:destroy"));
}
