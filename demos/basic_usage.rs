//! Basic usage example for single-instance.
//!
//! Demonstrates:
//! - Creating a singleton lazily with `create()`
//! - Repeated `create()` calls returning the same instance
//! - Retrieving the instance with `get()` and `instance()`
//! - Tearing a slot down with `destroy()` and creating it again
//!
//! Run with: `cargo run --example basic_usage`

use single_instance::{define_registry, singleton, Instance};
use std::sync::atomic::{AtomicU64, Ordering};

// Create an isolated registry for this example
define_registry!(app);

#[derive(Debug, Default)]
struct RequestCounter {
    served: AtomicU64,
}

singleton!(RequestCounter);

fn handle_request() {
    app::instance::<RequestCounter>()
        .served
        .fetch_add(1, Ordering::Relaxed);
}

fn main() {
    println!("=== single-instance: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Create the singleton
    // -------------------------------------------------------------------------
    println!("1. Creating RequestCounter...");

    let counter = app::create::<RequestCounter>().unwrap();
    println!("   Created at {:p}", Instance::as_ptr(&counter));

    // -------------------------------------------------------------------------
    // 2. Use it from anywhere
    // -------------------------------------------------------------------------
    println!("\n2. Handling requests...");

    for _ in 0..3 {
        handle_request();
    }
    println!("   Served: {}", counter.served.load(Ordering::Relaxed));

    // -------------------------------------------------------------------------
    // 3. A second create is a no-op
    // -------------------------------------------------------------------------
    println!("\n3. Creating again...");

    let again = app::create_with(|| RequestCounter {
        served: AtomicU64::new(1000),
    })
    .unwrap();
    println!("   Same instance: {}", Instance::ptr_eq(&counter, &again));
    println!("   Served: {}", again.served.load(Ordering::Relaxed));

    // -------------------------------------------------------------------------
    // 4. Teardown and re-creation
    // -------------------------------------------------------------------------
    println!("\n4. Destroying and re-creating...");

    println!("   Destroyed: {}", app::destroy::<RequestCounter>());
    println!("   get() now: {:?}", app::get::<RequestCounter>().err());

    let fresh = app::create::<RequestCounter>().unwrap();
    println!("   New instance: {}", !Instance::ptr_eq(&counter, &fresh));
    println!("   Served: {}", fresh.served.load(Ordering::Relaxed));

    println!("\n=== Done ===");
}
