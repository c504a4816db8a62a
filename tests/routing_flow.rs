//! End-to-end listener tests: registration, navigation, dispatch.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use hashroute::{AddressBar, MemoryAddressBar, RouteMap, Router, RouterOptions};

mod common;

#[tokio::test]
async fn test_first_dispatch_activates_listener() {
    let router = Router::new();
    assert!(!router.listening());

    let (handler, _rx) = common::recording_handler();
    router.dispatch("/about", handler).unwrap();
    assert!(router.listening());
}

#[tokio::test(start_paused = true)]
async fn test_hash_navigation_triggers_handler() {
    let router = Router::with_options(RouterOptions {
        mode: Some("hash".to_string()),
        ..Default::default()
    })
    .unwrap();

    let (handler, mut rx) = common::recording_handler();
    router.dispatch("/about", handler).unwrap();
    router.go("/about");

    assert_eq!(common::expect_dispatch(&mut rx).await, "about");
}

#[tokio::test(start_paused = true)]
async fn test_history_navigation_triggers_handler() {
    let bar = Arc::new(MemoryAddressBar::new());
    let router = Router::with_address_bar(bar.clone());
    router
        .config(RouterOptions {
            mode: Some("history".to_string()),
            root: Some("/dir".to_string()),
            ..Default::default()
        })
        .unwrap();

    let (handler, mut rx) = common::recording_handler();
    router.dispatch("/about", handler).unwrap();
    router.navigate("/about");

    assert_eq!(common::expect_dispatch(&mut rx).await, "about");
    assert_eq!(bar.path(), "/dir/about");
}

#[tokio::test(start_paused = true)]
async fn test_handler_runs_async_not_in_navigate() {
    let router = Router::new();
    let (handler, count) = common::counting_handler();
    router.dispatch("/about", handler).unwrap();

    router.navigate("/about");
    // The listener task has not run yet; navigate never dispatches inline.
    assert_eq!(count.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_unmatched_fragment_dispatches_nothing() {
    let router = Router::new();
    let (handler, mut rx) = common::recording_handler();
    router.dispatch("/about", handler).unwrap();

    router.navigate("/books");
    common::expect_no_dispatch(&mut rx).await;

    // The loop is still alive and picks up the next match.
    router.navigate("/about");
    assert_eq!(common::expect_dispatch(&mut rx).await, "about");
}

#[tokio::test(start_paused = true)]
async fn test_first_match_wins_in_insertion_order() {
    let router = Router::new();
    let (first, mut first_rx) = common::recording_handler();
    let (second, mut second_rx) = common::recording_handler();
    let map = RouteMap::new()
        .insert("/\\w+", first)
        .insert("/about", second);
    router.on(map).unwrap();

    router.navigate("/about");
    assert_eq!(common::expect_dispatch(&mut first_rx).await, "about");
    common::expect_no_dispatch(&mut second_rx).await;
}

#[tokio::test(start_paused = true)]
async fn test_flush_keeps_listener_engaged() {
    let router = Router::new();
    let (handler, mut rx) = common::recording_handler();
    router.dispatch("/about", handler).unwrap();
    router.go("/about");
    common::expect_dispatch(&mut rx).await;

    router.flush();
    assert!(router.listening());

    // Polling continues: navigation after a flush finds no routes...
    router.go("/books");
    common::expect_no_dispatch(&mut rx).await;

    // ...and a re-registered route dispatches again without reactivation.
    let (handler, mut rx) = common::recording_handler();
    router.dispatch("/fresh", handler).unwrap();
    router.go("/fresh");
    assert_eq!(common::expect_dispatch(&mut rx).await, "fresh");
}

#[tokio::test(start_paused = true)]
async fn test_panicking_handler_does_not_stop_loop() {
    let router = Router::new();
    let boom: hashroute::Handler = Arc::new(|_| panic!("handler failure"));
    let (handler, mut rx) = common::recording_handler();
    router.dispatch("/boom", boom).unwrap();
    router.dispatch("/ok", handler).unwrap();

    router.navigate("/boom");
    tokio::time::sleep(Duration::from_millis(200)).await;

    router.navigate("/ok");
    assert_eq!(common::expect_dispatch(&mut rx).await, "ok");
}

#[tokio::test(start_paused = true)]
async fn test_stop_listening_halts_dispatch() {
    let router = Router::new();
    let (handler, mut rx) = common::recording_handler();
    router.dispatch("/about", handler).unwrap();
    router.go("/about");
    common::expect_dispatch(&mut rx).await;

    router.stop_listening();
    tokio::time::sleep(Duration::from_millis(100)).await;

    router.go("/books");
    router.go("/about");
    common::expect_no_dispatch(&mut rx).await;
    // The table itself is untouched.
    assert_eq!(router.routes().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_external_address_change_dispatches() {
    // A mutation on the address bar itself, not through the router, is
    // picked up the same way (back/forward style navigation).
    let bar = Arc::new(MemoryAddressBar::new());
    let router = Router::with_address_bar(bar.clone());
    let (handler, mut rx) = common::recording_handler();
    router.dispatch("/about", handler).unwrap();

    bar.set_fragment("/about");
    assert_eq!(common::expect_dispatch(&mut rx).await, "about");
}

#[tokio::test(start_paused = true)]
async fn test_remove_by_handler_silences_routes() {
    let router = Router::new();
    let (shared, mut rx) = common::recording_handler();
    router.dispatch("/about", shared.clone()).unwrap();
    router.dispatch("/author", shared.clone()).unwrap();

    router.remove(shared);
    assert!(router.routes().is_empty());

    router.navigate("/about");
    router.navigate("/author");
    common::expect_no_dispatch(&mut rx).await;
}
