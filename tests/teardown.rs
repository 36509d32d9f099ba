//! Integration tests for tearing slots down and creating them again.
//!
//! These use an isolated registry per test, so they run in parallel.

use single_instance::{define_registry, singleton, Instance};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Connection {
    id: u32,
}
singleton!(Connection);

#[derive(Default)]
struct Cache;
singleton!(Cache);

#[test]
fn test_recreate_after_destroy_has_new_identity() {
    define_registry!(recreate);

    let old = recreate::create_with(|| Connection { id: 1 }).unwrap();
    assert!(recreate::destroy::<Connection>());

    let new = recreate::create_with(|| Connection { id: 2 }).unwrap();
    assert!(!Instance::ptr_eq(&old, &new));
    assert_eq!(old.id, 1);
    assert_eq!(new.id, 2);
}

#[test]
fn test_destroy_empty_slot_reports_false() {
    define_registry!(empty);

    assert!(!empty::destroy::<Connection>());
    assert!(empty::get::<Connection>().is_err());
}

#[test]
fn test_destroy_drops_when_last_handle_goes() {
    define_registry!(dropping);

    static DROPS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Default)]
    struct Session;

    impl Drop for Session {
        fn drop(&mut self) {
            DROPS.fetch_add(1, Ordering::SeqCst);
        }
    }

    singleton!(Session);

    let handle = Instance::into_arc(dropping::create::<Session>().unwrap());

    assert!(dropping::destroy::<Session>());
    // Still held here.
    assert_eq!(Arc::strong_count(&handle), 1);
    assert_eq!(DROPS.load(Ordering::SeqCst), 0);

    drop(handle);
    assert_eq!(DROPS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_destroy_leaves_other_slots() {
    define_registry!(partial);

    partial::create::<Connection>().unwrap();
    partial::create::<Cache>().unwrap();

    assert!(partial::destroy::<Connection>());
    assert!(!partial::contains::<Connection>().unwrap());
    assert!(partial::contains::<Cache>().unwrap());
}

#[test]
fn test_clear_empties_every_slot() {
    define_registry!(cleared);

    cleared::create::<Connection>().unwrap();
    cleared::create::<Cache>().unwrap();
    cleared::clear();

    assert!(!cleared::contains::<Connection>().unwrap());
    assert!(!cleared::contains::<Cache>().unwrap());
}
