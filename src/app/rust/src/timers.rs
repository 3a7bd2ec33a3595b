/* src/app/rust/src/timers.rs */

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

pub const CLOCK_TICK: Duration = Duration::from_secs(1);
pub const STATE_SYNC: Duration = Duration::from_secs(60);

pub type Tick = Arc<dyn Fn() + Send + Sync>;

/// Run `tick` now and then every `period` on the current tokio runtime.
/// Outside a runtime nothing is spawned and `None` is returned.
pub fn spawn_ticker(name: &'static str, period: Duration, tick: Tick) -> Option<JoinHandle<()>> {
  let Ok(runtime) = Handle::try_current() else {
    debug!(timer = name, "no runtime, timer not started");
    return None;
  };
  debug!(timer = name, period_ms = period.as_millis() as u64, "timer started");
  Some(runtime.spawn(async move {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
      interval.tick().await;
      tick();
    }
  }))
}

struct TimerSpec {
  name: &'static str,
  period: Duration,
  tick: Tick,
}

/// A fixed set of recurring app timers that can be paused and resumed
/// together. Dropping the set stops them.
#[derive(Default)]
pub struct AppTimers {
  specs: Vec<TimerSpec>,
  running: Mutex<Vec<JoinHandle<()>>>,
}

impl AppTimers {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&mut self, name: &'static str, period: Duration, tick: Tick) {
    self.specs.push(TimerSpec { name, period, tick });
  }

  /// Start every timer. No-op while already running.
  pub fn start(&self) {
    let mut running = self.running.lock().unwrap_or_else(PoisonError::into_inner);
    if !running.is_empty() {
      return;
    }
    running.extend(self.specs.iter().filter_map(|s| spawn_ticker(s.name, s.period, s.tick.clone())));
  }

  pub fn stop(&self) {
    let mut running = self.running.lock().unwrap_or_else(PoisonError::into_inner);
    for handle in running.drain(..) {
      handle.abort();
    }
  }

  pub fn is_running(&self) -> bool {
    !self.running.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
  }
}

impl Drop for AppTimers {
  fn drop(&mut self) {
    self.stop();
  }
}
