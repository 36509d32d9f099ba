//! Main-constructor check example for single-instance.
//!
//! Demonstrates:
//! - A type with several constructors, only one of which is the main one
//! - `create()` rejecting a value built through the bypassing constructor
//! - Watching registry events through the trace callback
//!
//! Run with: `cargo run --example main_ctor_check`

use single_instance::{define_registry, singleton, MainCtor};

define_registry!(services);

#[derive(Debug)]
struct Mailer {
    relay: String,
    main_ctor: MainCtor,
}

singleton!(Mailer, main_ctor = main_ctor);

/// Convenience constructor that forgets to go through `From<&str>`.
impl Default for Mailer {
    fn default() -> Self {
        Mailer {
            relay: String::from("localhost"),
            main_ctor: MainCtor::new(),
        }
    }
}

impl From<&str> for Mailer {
    fn from(relay: &str) -> Self {
        Mailer {
            relay: relay.to_string(),
            main_ctor: MainCtor::called(),
        }
    }
}

fn main() {
    println!("=== single-instance: Main Constructor Check ===\n");

    services::set_trace_callback(|event| println!("   [trace] {event}"));

    println!("1. Creating through Default (bypasses the main constructor)...");
    match services::create::<Mailer>() {
        Ok(mailer) => println!("   Unexpected: {:?}", *mailer),
        Err(err) => println!("   Rejected: {err}"),
    }

    println!("\n2. Creating through From<&str>...");
    match services::create_from::<Mailer, _>("smtp.example.com") {
        Ok(mailer) => println!("   Relay: {}", mailer.relay),
        Err(err) => println!("   Unexpected: {err}"),
    }

    println!("\n3. Default path again, now that the slot is populated...");
    match services::create::<Mailer>() {
        Ok(mailer) => println!("   Existing relay kept: {}", mailer.relay),
        Err(err) => println!("   Unexpected: {err}"),
    }

    services::clear_trace_callback();
    println!("\n=== Done ===");
}
