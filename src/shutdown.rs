//! Cooperative shutdown coordination
//!
//! A process-wide stop flag plus an outstanding-worker counter; `stop()`
//! polls every 125ms until the counter drains.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(125);

/// A guard that decrements the outstanding-worker count when dropped.
///
/// Held for the lifetime of a unit of work registered against a
/// [`ShutdownToken`] (a running test, an in-flight peering connection).
#[must_use]
pub struct OutstandingGuard {
    outstanding: Arc<AtomicUsize>,
}

impl Drop for OutstandingGuard {
    fn drop(&mut self) {
        self.outstanding.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Cooperative cancellation signal shared across the runner, the peering
/// server, and any in-flight client/server sessions.
///
/// Unlike a one-shot cancellation token, `stop()` both requests shutdown and
/// waits for outstanding work to drain, then clears the flag so the same
/// token can be reused for a later test run.
#[must_use]
#[derive(Clone)]
pub struct ShutdownToken {
    stopping: Arc<AtomicBool>,
    outstanding: Arc<AtomicUsize>,
}

impl ShutdownToken {
    /// Create a fresh, not-stopping token with no outstanding work.
    pub fn new() -> Self {
        Self {
            stopping: Arc::new(AtomicBool::new(false)),
            outstanding: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Register a unit of outstanding work, returning a guard that
    /// deregisters it on drop.
    pub fn register(&self) -> OutstandingGuard {
        self.outstanding.fetch_add(1, Ordering::SeqCst);
        OutstandingGuard {
            outstanding: self.outstanding.clone(),
        }
    }

    /// True once shutdown has been requested.
    pub fn is_stopping(&self) -> bool {
        self.stopping.load(Ordering::SeqCst)
    }

    /// Current number of registered outstanding workers.
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::SeqCst)
    }

    /// Request shutdown and wait for all outstanding work to finish, then
    /// clear the flag so the token is ready for reuse.
    ///
    /// Polls rather than using a condition variable, since the outstanding
    /// count is touched from many tokio tasks without a natural place to
    /// park a waiter.
    pub async fn stop(&self) {
        self.stopping.store(true, Ordering::SeqCst);
        while self.outstanding.load(Ordering::SeqCst) > 0 {
            tokio::time::sleep(POLL_INTERVAL).await;
        }
        self.stopping.store(false, Ordering::SeqCst);
    }
}

impl Default for ShutdownToken {
    fn default() -> Self {
        Self::new()
    }
}
