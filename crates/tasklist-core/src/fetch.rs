//! Ordering guard for overlapping loads.
//!
//! Each load takes a [`FetchTicket`] before its first request. When the
//! response arrives it is applied only if no newer ticket was issued in the
//! meantime; otherwise it is dropped.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct FetchTicket<K> {
  seq: u64,
  key: K
}

/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
  latest: Rc<Cell<u64>>
}

impl FetchGuard {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn issue<K>(
    &self,
    key: K
  ) -> FetchTicket<K> {
    let seq =
      self.latest.get().wrapping_add(1);
    self.latest.set(seq);
    FetchTicket {
      seq,
      key
    }
  }

  pub fn is_current<K>(
    &self,
    ticket: &FetchTicket<K>
  ) -> bool {
    ticket.seq == self.latest.get()
  }

  /// Returns `value` when `ticket` is still current, logging and dropping
  /// it otherwise.
  pub fn settle<K, T>(
    &self,
    ticket: &FetchTicket<K>,
    value: T
  ) -> Option<T>
  where
    K: std::fmt::Debug
  {
    if self.is_current(ticket) {
      Some(value)
    } else {
      debug!(
        key = ?ticket.key,
        seq = ticket.seq,
        latest = self.latest.get(),
        "discarding stale response"
      );
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::FetchGuard;

  #[test]
  fn newer_ticket_supersedes_older() {
    let guard = FetchGuard::new();
    let first = guard.issue("list-a");
    let second = guard.issue("list-b");

    assert!(!guard.is_current(&first));
    assert!(guard.is_current(&second));
    assert_eq!(
      guard.settle(&first, 1),
      None
    );
    assert_eq!(
      guard.settle(&second, 2),
      Some(2)
    );
  }

  #[test]
  fn clones_share_sequence() {
    let guard = FetchGuard::new();
    let shared = guard.clone();
    let ticket = guard.issue(());
    let _newer = shared.issue(());
    assert!(!guard.is_current(&ticket));
  }
}
