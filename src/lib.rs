//! # Single Instance
//!
//! A lazy, per-type single-instance registry.
//!
//! A type opts in with [`singleton!`]. The first `create` call then builds and
//! stores its one instance, and every later `create` or `get` hands out that same
//! instance. A type may also expose a main-constructor completion flag; `create`
//! refuses values that were built through a constructor that skipped it.
//!
//! ## Quick Start
//!
//! ```rust
//! use single_instance::{create, get, singleton, Instance};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! #[derive(Default)]
//! struct Logger {
//!     lines: AtomicUsize,
//! }
//! singleton!(Logger);
//!
//! let logger: Instance<Logger> = create().unwrap();
//! logger.lines.store(5, Ordering::SeqCst);
//!
//! // Later calls return the same instance.
//! assert!(Instance::ptr_eq(&logger, &create::<Logger>().unwrap()));
//! assert_eq!(get::<Logger>().unwrap().lines.load(Ordering::SeqCst), 5);
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: creation is checked under a lock; concurrent callers get one instance
//! - **Type-checked**: only types implementing [`Singleton`] have slots
//! - **Main-constructor check**: optional, via [`Singleton::main_ctor_called`]
//! - **Isolated registries**: [`define_registry!`] creates independent sets of slots
//! - **Tracing support**: optional callback receiving a [`RegistryEvent`] per operation;
//!   lifecycle changes are also logged through the `log` facade
//!
//! ## Main Functions
//!
//! - [`create`], [`create_from`], [`create_with`] - Create the instance, or return the existing one
//! - [`get`] - Retrieve the instance, failing if it was not created
//! - [`instance`] - Retrieve the instance, panicking if it was not created
//! - [`contains`] - Check if a slot is populated
//! - [`destroy`] - Tear down one slot
//! - [`set_trace_callback`] - Set up tracing for registry operations

mod instance;
mod macros;
mod registry;
mod registry_error;
mod registry_event;
mod registry_trait;
mod singleton_trait;

pub use instance::Instance;
pub use registry::{
    clear, clear_trace_callback, contains, create, create_from, create_with, destroy, get,
    instance, set_trace_callback, GlobalRegistry, GLOBAL,
};
pub use registry_error::RegistryError;
pub use registry_event::RegistryEvent;
pub use registry_trait::{RegistryApi, Storage, TraceCallback};
pub use singleton_trait::{MainCtor, Singleton};
