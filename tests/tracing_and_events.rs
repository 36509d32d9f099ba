//! Integration tests for tracing and event monitoring.
//!
//! The trace callback sees one `RegistryEvent` per registry operation, which is
//! useful for debugging initialization order.

use single_instance::{define_registry, singleton, MainCtor, RegistryEvent};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Metrics;
singleton!(Metrics);

struct Gate {
    opened: MainCtor,
}
singleton!(Gate, main_ctor = opened);

fn collector() -> (Arc<Mutex<Vec<RegistryEvent>>>, impl Fn(&RegistryEvent) + Send + Sync) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    (events, move |event: &RegistryEvent| {
        events_clone.lock().unwrap().push(event.clone());
    })
}

#[test]
fn test_basic_tracing() {
    define_registry!(traced1);

    let (events, callback) = collector();
    traced1::set_trace_callback(callback);

    traced1::create::<Metrics>().unwrap();
    let _ = traced1::get::<Metrics>();
    let _ = traced1::contains::<Metrics>();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 3);
    assert!(matches!(captured[0], RegistryEvent::Create { created: true, .. }));
    assert!(matches!(captured[1], RegistryEvent::Get { found: true, .. }));
    assert!(matches!(captured[2], RegistryEvent::Contains { found: true, .. }));
}

#[test]
fn test_trace_repeated_create() {
    define_registry!(traced2);

    let (events, callback) = collector();
    traced2::set_trace_callback(callback);

    traced2::create::<Metrics>().unwrap();
    traced2::create::<Metrics>().unwrap();

    let name = std::any::type_name::<Metrics>();
    let captured = events.lock().unwrap();
    assert_eq!(
        *captured,
        vec![
            RegistryEvent::Create {
                type_name: name,
                created: true
            },
            RegistryEvent::Create {
                type_name: name,
                created: false
            },
        ]
    );

    traced2::clear_trace_callback();
}

#[test]
fn test_trace_get_found_and_not_found() {
    define_registry!(traced3);

    let (events, callback) = collector();
    traced3::set_trace_callback(callback);

    let _ = traced3::get::<Metrics>();
    traced3::create::<Metrics>().unwrap();
    let _ = traced3::get::<Metrics>();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 3);
    assert!(captured[0].to_string().contains("found: false"));
    assert!(captured[2].to_string().contains("found: true"));

    traced3::clear_trace_callback();
}

#[test]
fn test_trace_rejected_and_destroy() {
    define_registry!(traced4);

    let (events, callback) = collector();
    traced4::set_trace_callback(callback);

    let _ = traced4::create_with(|| Gate {
        opened: MainCtor::new(),
    });
    let _ = traced4::destroy::<Gate>();
    traced4::clear();

    let name = std::any::type_name::<Gate>();
    let captured = events.lock().unwrap();
    assert_eq!(
        *captured,
        vec![
            RegistryEvent::Rejected { type_name: name },
            RegistryEvent::Destroy {
                type_name: name,
                found: false
            },
            RegistryEvent::Clear {},
        ]
    );
}

#[test]
fn test_clear_trace_callback() {
    define_registry!(traced5);

    let (events, callback) = collector();
    traced5::set_trace_callback(callback);

    traced5::create::<Metrics>().unwrap();

    traced5::clear_trace_callback();

    // Not traced.
    let _ = traced5::get::<Metrics>();
    let _ = traced5::destroy::<Metrics>();

    assert_eq!(events.lock().unwrap().len(), 1);
}
