/* src/router/core/rust/src/history.rs */

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::route::RouteId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
  pub route: RouteId,
  pub timestamp: DateTime<Utc>,
}

/// Append-only record of committed routes. Once it grows past `limit`
/// entries only the most recent `keep` survive.
#[derive(Debug, Clone)]
pub struct NavigationHistory {
  entries: Vec<HistoryEntry>,
  limit: usize,
  keep: usize,
}

impl NavigationHistory {
  pub fn new(limit: usize, keep: usize) -> Self {
    let limit = limit.max(1);
    Self { entries: Vec::new(), limit, keep: keep.clamp(1, limit) }
  }

  pub fn push(&mut self, route: RouteId, timestamp: DateTime<Utc>) {
    self.entries.push(HistoryEntry { route, timestamp });
    if self.entries.len() > self.limit {
      let excess = self.entries.len() - self.keep;
      self.entries.drain(..excess);
    }
  }

  pub fn entries(&self) -> &[HistoryEntry] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Route of the entry before the latest one.
  pub fn previous(&self) -> Option<RouteId> {
    self.entries.len().checked_sub(2).map(|i| self.entries[i].route)
  }

  pub fn can_go_back(&self) -> bool {
    self.entries.len() > 1
  }
}

impl Default for NavigationHistory {
  fn default() -> Self {
    Self::new(50, 25)
  }
}
