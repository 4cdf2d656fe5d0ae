use guard_rail::prelude::*;
use guard_rail::registry::{DefaultEnsureFactory, EnsureFactory};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

// Serializes tests that replace the process default.
static DEFAULT_SLOT: Mutex<()> = Mutex::new(());

fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> Box<dyn Fn(&ArgumentError) + Send + Sync>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let shared = Arc::clone(&log);
    let make = move |tag: &str| -> Box<dyn Fn(&ArgumentError) + Send + Sync> {
        let log = Arc::clone(&shared);
        let tag = tag.to_string();
        Box::new(move |err: &ArgumentError| {
            log.lock().unwrap().push(format!("{tag}:{}", err.parameter()));
        })
    };
    (log, make)
}

#[test]
fn failure_callbacks_run_in_registration_order() {
    let ensure = Ensure::new();
    let (log, make) = recorder();
    ensure.register_on_failure(make("first"));
    ensure.register_on_failure(make("second"));

    let _ = ensure.parameter(-1, "delta").is_at_least(0);

    assert_eq!(*log.lock().unwrap(), vec!["first:delta", "second:delta"]);
}

#[test]
fn throw_callbacks_run_in_registration_order() {
    let ensure = Ensure::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    for tag in ["a", "b", "c"] {
        let log = Arc::clone(&log);
        ensure.register_on_throw(move |err, _| {
            log.lock().unwrap().push(format!("{tag}:{}", err.parameters()));
        });
    }

    let result = ensure.parameter("", "name").is_not_empty().raise_on_failure();

    assert!(result.is_err());
    assert_eq!(*log.lock().unwrap(), vec!["a:name", "b:name", "c:name"]);
}

#[test]
fn collection_from_an_instance_notifies_every_failure() {
    let ensure = Ensure::new();
    let (log, make) = recorder();
    ensure.register_on_failure(make("seen"));

    let result = ensure
        .many()
        .parameter(None::<u8>, "a")
        .parameter(Some(1), "b")
        .parameter(None, "c")
        .is_present()
        .raise_on_failure();

    assert_eq!(result.unwrap_err().parameters(), "a, c");
    assert_eq!(*log.lock().unwrap(), vec!["seen:a", "seen:c"]);
}

#[test]
fn counts_and_debug_reflect_registrations() {
    let ensure = Ensure::new();
    assert_eq!(ensure.failure_callback_count(), 0);

    ensure.register_on_failure(|_| {});
    ensure.register_on_throw(|_, _| {});
    ensure.register_on_throw(|_, _| {});

    assert_eq!(ensure.failure_callback_count(), 1);
    assert_eq!(ensure.throw_callback_count(), 2);
    assert_eq!(format!("{ensure:?}"), "Ensure { on_failure: 1, on_throw: 2 }");
}

#[test]
fn existing_validators_see_later_registrations_on_the_same_instance() {
    let ensure = Ensure::new();
    let validator = ensure.parameter(0, "n");

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    ensure.register_on_failure(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let _ = validator.is_greater_than(0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn configure_default_swaps_the_instance_used_by_free_functions() {
    let _slot = DEFAULT_SLOT.lock().unwrap();
    let replacement = Arc::new(Ensure::new());
    let (log, make) = recorder();
    replacement.register_on_failure(make("swapped"));

    let previous = Ensure::configure_default(Arc::clone(&replacement));
    let _ = guard_rail::parameter(None::<u8>, "configure_default_swap_marker").is_present();
    let restored = Ensure::configure_default(previous);

    // Other tests may use the default concurrently; only count this test's parameter.
    let seen: Vec<_> = log
        .lock()
        .unwrap()
        .iter()
        .filter(|entry| entry.ends_with("configure_default_swap_marker"))
        .cloned()
        .collect();
    assert_eq!(seen, vec!["swapped:configure_default_swap_marker"]);
    assert!(Arc::ptr_eq(&restored, &replacement));
}

#[test]
fn validators_created_before_a_swap_keep_their_callbacks() {
    let _slot = DEFAULT_SLOT.lock().unwrap();
    let bound = Arc::new(Ensure::new());
    let (log, make) = recorder();
    bound.register_on_failure(make("bound"));

    let validator = bound.parameter("", "bound_before_swap");
    let previous = Ensure::configure_default(Arc::new(Ensure::new()));
    let _ = validator.is_not_empty();
    Ensure::configure_default(previous);

    assert_eq!(*log.lock().unwrap(), vec!["bound:bound_before_swap"]);
}

#[test]
fn callbacks_may_register_further_callbacks() {
    let ensure = Arc::new(Ensure::new());
    let inner_calls = Arc::new(AtomicUsize::new(0));

    let registry = Arc::clone(&ensure);
    let counter = Arc::clone(&inner_calls);
    ensure.register_on_failure(move |_| {
        let counter = Arc::clone(&counter);
        registry.register_on_failure(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    });

    let _ = ensure.parameter(0, "n").is_greater_than(0);
    assert_eq!(ensure.failure_callback_count(), 2);
    assert_eq!(inner_calls.load(Ordering::SeqCst), 0);

    let _ = ensure.parameter(0, "n").is_greater_than(0);
    assert_eq!(inner_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn registration_and_dispatch_from_many_threads() {
    let ensure = Arc::new(Ensure::new());
    let calls = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let ensure = Arc::clone(&ensure);
            let calls = Arc::clone(&calls);
            thread::spawn(move || {
                if i % 2 == 0 {
                    ensure.register_on_failure(move |_| {
                        calls.fetch_add(1, Ordering::SeqCst);
                    });
                } else {
                    for _ in 0..100 {
                        let _ = ensure.parameter(i, "n").is_less_than(0);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(ensure.failure_callback_count(), 4);
    let before = calls.load(Ordering::SeqCst);
    let _ = ensure.parameter(1, "n").is_less_than(0);
    assert_eq!(calls.load(Ordering::SeqCst), before + 4);
}

struct Service {
    ensure: Option<Ensure>,
}

impl HasEnsure for Service {
    fn ensure(&self) -> Option<&Ensure> {
        self.ensure.as_ref()
    }
}

#[test]
fn has_ensure_uses_the_carried_instance() {
    let ensure = Ensure::new();
    let (log, make) = recorder();
    ensure.register_on_failure(make("service"));
    let service = Service { ensure: Some(ensure) };

    let _ = service.ensure_parameter("", "host").is_not_empty();
    let outcome = service.ensure_many().parameter(0, "port").is_greater_than(0).to_outcome();

    assert!(outcome.is_failure());
    assert_eq!(*log.lock().unwrap(), vec!["service:host", "service:port"]);
}

#[test]
fn has_ensure_falls_back_to_the_default_instance() {
    let service = Service { ensure: None };

    assert_eq!(service.ensure_present(Some("db"), "host"), Ok("db"));

    let err = service.ensure_present(None::<&str>, "host").unwrap_err();
    assert_eq!(err.errors()[0].kind(), &ErrorKind::NullArgument);
    assert!(!err.is_aggregate());
}

#[test]
fn ensure_present_reports_the_direct_caller() {
    let ensure = Ensure::new();
    let lines = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&lines);
    ensure.register_on_throw(move |_, location| {
        seen.lock().unwrap().push((location.file().to_string(), location.line()));
    });

    let line = line!() + 1;
    let result = ensure.ensure_present(None::<u32>, "id");

    assert!(result.is_err());
    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].0.ends_with("mod.rs"));
    assert_eq!(lines[0].1, line);
}

#[test]
fn factories_build_fresh_instances() {
    let first = DefaultEnsureFactory.create();
    first.register_on_failure(|_| {});
    assert_eq!(DefaultEnsureFactory.create().failure_callback_count(), 0);

    let audited = || {
        let ensure = Ensure::new();
        ensure.register_on_throw(|_, _| {});
        ensure
    };
    assert_eq!(audited.create().throw_callback_count(), 1);
}
