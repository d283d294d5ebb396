use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use word_widget::schedule::RefreshScheduler;

static TEST_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn register_twice_replaces_registration() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let scheduler = RefreshScheduler::new();
    scheduler.register_repeating(
        "widget:refresh",
        Duration::from_secs(3600),
        Duration::from_secs(3600),
        || {},
    );
    scheduler.register_repeating(
        "widget:refresh",
        Duration::from_secs(3600),
        Duration::from_secs(1800),
        || {},
    );

    assert_eq!(scheduler.active_keys(), vec!["widget:refresh"]);
    assert_eq!(
        scheduler.interval_for("widget:refresh"),
        Some(Duration::from_secs(1800))
    );
}

#[test]
fn replaced_registration_stops_firing() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let scheduler = RefreshScheduler::new();
    let old_fires = Arc::new(AtomicUsize::new(0));
    let new_fires = Arc::new(AtomicUsize::new(0));

    let counter = old_fires.clone();
    scheduler.register_repeating(
        "widget:refresh",
        Duration::from_millis(50),
        Duration::from_millis(50),
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );
    let counter = new_fires.clone();
    scheduler.register_repeating(
        "widget:refresh",
        Duration::from_millis(50),
        Duration::from_millis(50),
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    std::thread::sleep(Duration::from_millis(500));
    assert_eq!(old_fires.load(Ordering::SeqCst), 0);
    assert!(new_fires.load(Ordering::SeqCst) >= 1);
}

#[test]
fn repeating_timer_fires_more_than_once() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let scheduler = RefreshScheduler::new();
    let fires = Arc::new(AtomicUsize::new(0));

    let counter = fires.clone();
    scheduler.register_repeating(
        "widget:refresh",
        Duration::from_millis(20),
        Duration::from_millis(20),
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    std::thread::sleep(Duration::from_millis(500));
    assert!(fires.load(Ordering::SeqCst) >= 2);
    // Firing does not retire a repeating registration.
    assert_eq!(scheduler.active_keys(), vec!["widget:refresh"]);
}

#[test]
fn distinct_keys_coexist() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let scheduler = RefreshScheduler::new();
    scheduler.register_repeating(
        "widget:refresh",
        Duration::from_secs(3600),
        Duration::from_secs(3600),
        || {},
    );
    scheduler.register_repeating(
        "other",
        Duration::from_secs(3600),
        Duration::from_secs(3600),
        || {},
    );

    let mut keys = scheduler.active_keys();
    keys.sort();
    assert_eq!(keys, vec!["other", "widget:refresh"]);
}
