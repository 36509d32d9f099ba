//! The process-wide default registry.
//!
//! Free functions in this module delegate to [`GlobalRegistry`], whose slots live
//! for the whole process. Use [`define_registry!`](crate::define_registry) when a
//! separate, isolated set of slots is needed.
//!
//! # Examples
//!
//! ```
//! use single_instance::{create, get, singleton, Instance};
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! #[derive(Default)]
//! struct Clock {
//!     ticks: AtomicU32,
//! }
//! singleton!(Clock);
//!
//! let clock: Instance<Clock> = create().unwrap();
//! clock.ticks.fetch_add(1, Ordering::SeqCst);
//!
//! let again = get::<Clock>().unwrap();
//! assert!(Instance::ptr_eq(&clock, &again));
//! assert_eq!(again.ticks.load(Ordering::SeqCst), 1);
//! ```

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use crate::{Instance, RegistryApi, RegistryError, RegistryEvent, Singleton, Storage, TraceCallback};

static GLOBAL_STORAGE: Storage = LazyLock::new(|| Mutex::new(HashMap::new()));

static GLOBAL_TRACE: TraceCallback = LazyLock::new(|| Mutex::new(None));

/// Zero-sized handle to the default registry.
pub struct GlobalRegistry;

impl RegistryApi for GlobalRegistry {
    fn storage() -> &'static Storage {
        &GLOBAL_STORAGE
    }

    fn trace() -> &'static TraceCallback {
        &GLOBAL_TRACE
    }
}

/// The default registry, for trait-based access.
pub const GLOBAL: GlobalRegistry = GlobalRegistry;

/// Create the instance of `T` with `T::default()`, or return the existing one.
pub fn create<T: Singleton + Default>() -> Result<Instance<T>, RegistryError> {
    GLOBAL.create()
}

/// Create the instance of `T` from `args`, or return the existing one.
pub fn create_from<T: Singleton + From<A>, A>(args: A) -> Result<Instance<T>, RegistryError> {
    GLOBAL.create_from(args)
}

/// Create the instance of `T` by calling `ctor`, or return the existing one.
pub fn create_with<T: Singleton>(ctor: impl FnOnce() -> T) -> Result<Instance<T>, RegistryError> {
    GLOBAL.create_with(ctor)
}

/// Retrieve the existing instance of `T`.
pub fn get<T: Singleton>() -> Result<Instance<T>, RegistryError> {
    GLOBAL.get()
}

/// Access the existing instance of `T`.
///
/// # Panics
///
/// Panics if `T` was not created yet.
pub fn instance<T: Singleton>() -> Instance<T> {
    GLOBAL.instance()
}

pub fn contains<T: Singleton>() -> Result<bool, RegistryError> {
    GLOBAL.contains::<T>()
}

/// Tear down the slot for `T`. Returns whether it was populated.
pub fn destroy<T: Singleton>() -> bool {
    GLOBAL.destroy::<T>()
}

#[doc(hidden)]
pub fn clear() {
    GLOBAL.clear()
}

/// Sets a tracing callback that will be invoked on every registry interaction.
///
/// # Example
/// ```rust
/// use single_instance::{clear_trace_callback, set_trace_callback};
///
/// set_trace_callback(|event| println!("[registry-trace] {event}"));
/// clear_trace_callback();
/// ```
pub fn set_trace_callback(callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
    GLOBAL.set_trace_callback(callback)
}

/// Clears the tracing callback (disables registry tracing).
pub fn clear_trace_callback() {
    GLOBAL.clear_trace_callback()
}
