//! Change detection and dispatch.
//!
//! # Responsibilities
//! - Poll the address bar for fragment changes
//! - Dispatch the first matching route for a new fragment
//! - Keep running until explicitly stopped
//!
//! # Design Decisions
//! - Two states, idle → active, transitioned exactly once by the first
//!   successful route registration; flushing routes does not go back
//! - Polling is the correctness baseline; the address bar's change
//!   notification is only a fast path
//! - Only the last stable fragment before each wakeup is dispatched; missed
//!   intermediate values are expected
//! - A panicking handler is isolated and logged, never stops the loop

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::time;

use crate::lifecycle::Shutdown;
use crate::router::RouterShared;

/// The lazily-activated polling loop behind a router.
pub struct ChangeListener {
    active: AtomicBool,
    shutdown: Shutdown,
}

impl ChangeListener {
    pub fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
            shutdown: Shutdown::new(),
        }
    }

    /// True once the listener has been activated.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Transition idle → active and spawn the poll loop.
    ///
    /// Idempotent: only the first call spawns. Must run inside a Tokio
    /// runtime. The initial fragment is captured synchronously so a
    /// navigation issued right after registration is always observed.
    pub(crate) fn activate(&self, shared: Arc<RouterShared>) {
        if self.active.swap(true, Ordering::SeqCst) {
            return;
        }

        let initial = shared.current_fragment();
        let interval = shared.config.load().poll_interval;
        let rx = self.shutdown.subscribe();

        tracing::debug!(?interval, "change listener activated");
        tokio::spawn(poll_loop(shared, initial, rx));
    }

    /// Stop the poll loop. The activation flag stays set; a stopped listener
    /// is not reactivated by further registrations.
    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

impl Default for ChangeListener {
    fn default() -> Self {
        Self::new()
    }
}

async fn poll_loop(
    shared: Arc<RouterShared>,
    initial: String,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut changes = shared.bar.changes();
    let mut notify_ok = true;
    let mut last = initial;
    let mut ticker = time::interval(shared.config.load().poll_interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            res = changes.changed(), if notify_ok => {
                if res.is_err() {
                    // Notification source gone; polling still covers us.
                    notify_ok = false;
                }
            }
            _ = shutdown.recv() => {
                tracing::debug!("change listener stopped");
                break;
            }
        }

        let fragment = shared.current_fragment();
        if fragment == last {
            continue;
        }
        last = fragment.clone();
        dispatch_fragment(&shared, &fragment);
    }
}

/// Scan the table in insertion order and invoke the first match.
fn dispatch_fragment(shared: &RouterShared, fragment: &str) {
    let matched = {
        let table = shared.routes.read().unwrap();
        table
            .find_match(fragment)
            .map(|route| (route.pattern.clone(), route.handler.clone()))
    };

    match matched {
        Some((pattern, handler)) => {
            tracing::debug!(%fragment, %pattern, "dispatching route");
            if catch_unwind(AssertUnwindSafe(|| handler(fragment))).is_err() {
                tracing::error!(%fragment, %pattern, "route handler panicked");
            }
        }
        None => {
            tracing::trace!(%fragment, "no route matched");
        }
    }
}
