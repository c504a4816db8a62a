//! Shared utilities for integration testing.

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use hashroute::Handler;

/// A handler that records each dispatched fragment on a channel.
pub fn recording_handler() -> (Handler, mpsc::UnboundedReceiver<String>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handler: Handler = Arc::new(move |fragment: &str| {
        let _ = tx.send(fragment.to_string());
    });
    (handler, rx)
}

/// A handler that only counts invocations.
#[allow(dead_code)]
pub fn counting_handler() -> (Handler, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = count.clone();
    let handler: Handler = Arc::new(move |_| {
        seen.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    });
    (handler, count)
}

/// Wait for the next dispatch, failing the test if none arrives in time.
///
/// Under a paused clock the timeout auto-advances, so this is deterministic
/// rather than wall-clock dependent.
pub async fn expect_dispatch(rx: &mut mpsc::UnboundedReceiver<String>) -> String {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no dispatch within timeout")
        .expect("handler channel closed")
}

/// Assert that no dispatch arrives within a few polling intervals.
///
/// A closed channel also counts: if every clone of the handler has been
/// dropped, nothing can dispatch to it.
pub async fn expect_no_dispatch(rx: &mut mpsc::UnboundedReceiver<String>) {
    match tokio::time::timeout(Duration::from_millis(300), rx.recv()).await {
        Err(_) | Ok(None) => {}
        Ok(Some(fragment)) => panic!("unexpected dispatch: {fragment:?}"),
    }
}
