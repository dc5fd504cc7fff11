//! Stale-response suppression for keyword lookups. Keystrokes are debounced
//! upstream; this guard ensures that of all requests actually issued, only
//! the newest one may apply its result, independent of any particular
//! cancellation primitive.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Delay after the last keystroke before a lookup is dispatched.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Monotonic request-sequence guard. `begin` issues a ticket that supersedes
/// all earlier ones; `is_current` is checked at resolution time, so a slow
/// stale response can never overwrite a fresher one.
#[derive(Debug, Default)]
pub struct LatestGuard {
    seq: AtomicU64,
}

impl LatestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a newly dispatched request.
    pub fn begin(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True while `ticket` is still the newest issued request.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.seq.load(Ordering::SeqCst) == ticket
    }
}
