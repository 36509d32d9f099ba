//! Macros for declaring singleton types and isolated registries.

/// Opts a type into singleton slots by implementing [`Singleton`](crate::Singleton).
///
/// The plain form declares a type with no completion flag. The `main_ctor = field`
/// form names a field holding the main-constructor completion flag, either a
/// `bool` or a [`MainCtor`](crate::MainCtor). `create` then rejects values whose
/// flag is unset.
///
/// # Examples
///
/// ```rust
/// use single_instance::{singleton, RegistryError};
///
/// #[derive(Default)]
/// struct Logger;
/// singleton!(Logger);
///
/// #[derive(Debug)]
/// struct Service {
///     port: u16,
///     main_ctor_done: bool,
/// }
/// singleton!(Service, main_ctor = main_ctor_done);
///
/// let err = single_instance::create_with(|| Service { port: 0, main_ctor_done: false })
///     .unwrap_err();
/// assert!(matches!(err, RegistryError::MainCtorNotCalled { .. }));
/// ```
#[macro_export]
macro_rules! singleton {
    ($ty:ty) => {
        impl $crate::Singleton for $ty {}
    };
    ($ty:ty, main_ctor = $field:ident) => {
        impl $crate::Singleton for $ty {
            fn main_ctor_called(&self) -> ::core::option::Option<bool> {
                ::core::option::Option::Some(::core::convert::From::from(self.$field))
            }
        }
    };
}

/// Creates an isolated singleton registry with a single macro invocation.
///
/// The macro generates a module containing:
/// - Storage static (hidden)
/// - Trace callback static (hidden)
/// - An `Api` struct that implements `RegistryApi`
/// - Free functions mirroring the crate-level default registry
///
/// # Examples
///
/// ```rust
/// use single_instance::{define_registry, singleton, Instance};
///
/// #[derive(Default)]
/// struct Pool(u8);
/// singleton!(Pool);
///
/// define_registry!(primary);
/// define_registry!(replica);
///
/// let a: Instance<Pool> = primary::create().unwrap();
/// let b: Instance<Pool> = replica::create().unwrap();
///
/// // Each registry has its own slot for `Pool`.
/// assert!(!Instance::ptr_eq(&a, &b));
/// ```
///
/// # Trait-Based Usage
///
/// ```rust
/// use single_instance::{define_registry, singleton, RegistryApi};
///
/// #[derive(Default)]
/// struct Cache;
/// singleton!(Cache);
///
/// define_registry!(app);
///
/// app::API.create::<Cache>().unwrap();
/// assert!(app::API.contains::<Cache>().unwrap());
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        pub mod $name {
            use std::collections::HashMap;
            use std::sync::{LazyLock, Mutex};

            static STORAGE: $crate::Storage = LazyLock::new(|| Mutex::new(HashMap::new()));

            static TRACE: $crate::TraceCallback = LazyLock::new(|| Mutex::new(None));

            /// Zero-sized type that implements the registry API.
            pub struct Api;

            impl $crate::RegistryApi for Api {
                fn storage() -> &'static $crate::Storage {
                    &STORAGE
                }

                fn trace() -> &'static $crate::TraceCallback {
                    &TRACE
                }
            }

            /// Convenient constant for accessing the registry API.
            pub const API: Api = Api;

            /// Create the instance of `T` with `T::default()`, or return the existing one.
            pub fn create<T: $crate::Singleton + Default>(
            ) -> Result<$crate::Instance<T>, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.create()
            }

            /// Create the instance of `T` from `args`, or return the existing one.
            pub fn create_from<T: $crate::Singleton + From<A>, A>(
                args: A,
            ) -> Result<$crate::Instance<T>, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.create_from(args)
            }

            /// Create the instance of `T` by calling `ctor`, or return the existing one.
            pub fn create_with<T: $crate::Singleton>(
                ctor: impl FnOnce() -> T,
            ) -> Result<$crate::Instance<T>, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.create_with(ctor)
            }

            /// Retrieve the existing instance of `T`.
            pub fn get<T: $crate::Singleton>(
            ) -> Result<$crate::Instance<T>, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.get()
            }

            /// Access the existing instance of `T`, panicking if it was not created.
            pub fn instance<T: $crate::Singleton>() -> $crate::Instance<T> {
                use $crate::RegistryApi;
                API.instance()
            }

            /// Check if the slot for `T` is populated.
            pub fn contains<T: $crate::Singleton>() -> Result<bool, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.contains::<T>()
            }

            /// Tear down the slot for `T`.
            pub fn destroy<T: $crate::Singleton>() -> bool {
                use $crate::RegistryApi;
                API.destroy::<T>()
            }

            /// Tear down every slot.
            pub fn clear() {
                use $crate::RegistryApi;
                API.clear()
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                use $crate::RegistryApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::RegistryApi;
                API.clear_trace_callback()
            }
        }
    };
}
