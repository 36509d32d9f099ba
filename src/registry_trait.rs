//! Core trait defining registry behavior.
//!
//! This module provides the `RegistryApi` trait with default implementations for
//! lazy creation, retrieval, teardown and tracing of single instances.
//!
//! The registry is type-based: each type (`TypeId`) owns one slot, and a slot holds at
//! most one instance. Once populated, a slot is never overwritten by `create`.

use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

use crate::singleton_trait::main_ctor_completed;
use crate::{Instance, RegistryError, RegistryEvent, Singleton};

/// Type-erased slots keyed by the concrete type.
pub type Storage = LazyLock<Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>>;

/// Storage for the optional trace callback.
pub type TraceCallback = LazyLock<Mutex<Option<Arc<dyn Fn(&RegistryEvent) + Send + Sync>>>>;

fn downcast<T: Singleton>(any: Arc<dyn Any + Send + Sync>) -> Result<Instance<T>, RegistryError> {
    any.downcast::<T>()
        .map(Instance::from_arc)
        .map_err(|_| RegistryError::TypeMismatch {
            type_name: std::any::type_name::<T>(),
        })
}

/// Core trait defining registry behavior.
///
/// Provides default implementations for all registry operations, requiring only
/// two accessor methods (`storage` and `trace`) to be implemented by the implementor.
///
/// # Concurrency
///
/// The storage lock is never held while a constructor runs, so a constructor may
/// create or fetch other singletons from the same registry. If two threads create
/// the same type at once, both constructors may run; the first value stored wins,
/// the other is dropped, and both callers receive the winner.
pub trait RegistryApi {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    fn trace() -> &'static TraceCallback;

    /// Set a tracing callback for registry operations.
    ///
    /// The callback must NOT call any registry methods on the same registry,
    /// as this will cause a deadlock. The callback is invoked while holding
    /// the trace lock.
    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Emit a registry event using the current callback, if any.
    fn emit_event(&self, event: &RegistryEvent) {
        let guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        if let Some(callback) = guard.as_ref() {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Access the storage static.
    fn storage() -> &'static Storage;

    /// Create the instance of `T` with its `Default` constructor, or return the existing one.
    fn create<T: Singleton + Default>(&self) -> Result<Instance<T>, RegistryError> {
        self.create_with(T::default)
    }

    /// Create the instance of `T` from `args`, or return the existing one.
    ///
    /// `args` is forwarded verbatim to `T::from`. When the slot is already populated
    /// it is dropped unused.
    fn create_from<T, A>(&self, args: A) -> Result<Instance<T>, RegistryError>
    where
        T: Singleton + From<A>,
    {
        self.create_with(move || T::from(args))
    }

    /// Create the instance of `T` by calling `ctor`, or return the existing one.
    ///
    /// `ctor` only runs when the slot is empty. A freshly built value whose
    /// [`Singleton::main_ctor_called`] reports `Some(false)` is dropped and the slot
    /// stays empty.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::MainCtorNotCalled`] if the value skipped its main constructor
    /// - [`RegistryError::TypeMismatch`] if the slot holds a foreign value (should not happen)
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the storage lock is poisoned, this method automatically recovers.
    fn create_with<T, F>(&self, ctor: F) -> Result<Instance<T>, RegistryError>
    where
        T: Singleton,
        F: FnOnce() -> T,
    {
        let type_name = std::any::type_name::<T>();

        let existing = Self::storage()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .get(&TypeId::of::<T>())
            .cloned();

        if let Some(existing) = existing {
            log::debug!("singleton {type_name} already created, constructor skipped");
            self.emit_event(&RegistryEvent::Create {
                type_name,
                created: false,
            });
            return downcast(existing);
        }

        let value = ctor();

        if !main_ctor_completed(&value) {
            log::warn!("singleton {type_name} was constructed without its main constructor");
            self.emit_event(&RegistryEvent::Rejected { type_name });
            return Err(RegistryError::MainCtorNotCalled { type_name });
        }

        let fresh: Arc<dyn Any + Send + Sync> = Arc::new(value);

        // `fresh` outlives the guard so a losing value is dropped without the lock held.
        let (stored, created) = {
            let mut map = Self::storage().lock().unwrap_or_else(|p| p.into_inner());
            match map.entry(TypeId::of::<T>()) {
                Entry::Occupied(slot) => (Arc::clone(slot.get()), false),
                Entry::Vacant(slot) => (Arc::clone(slot.insert(Arc::clone(&fresh))), true),
            }
        };

        if created {
            log::debug!("singleton {type_name} created");
        } else {
            log::debug!("singleton {type_name} created concurrently, keeping the first instance");
        }

        self.emit_event(&RegistryEvent::Create { type_name, created });

        downcast(stored)
    }

    /// Retrieve the existing instance of `T`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotCreated`] if no `create` call populated the slot
    /// - Type mismatch (extremely rare)
    /// - Registry lock is poisoned
    fn get<T: Singleton>(&self) -> Result<Instance<T>, RegistryError> {
        let map = Self::storage()
            .lock()
            .map_err(|_| RegistryError::RegistryLock)?;

        let any_arc_opt = map.get(&TypeId::of::<T>()).cloned();

        drop(map);

        let result = match any_arc_opt {
            Some(any_arc) => downcast::<T>(any_arc),
            None => Err(RegistryError::NotCreated {
                type_name: std::any::type_name::<T>(),
            }),
        };

        self.emit_event(&RegistryEvent::Get {
            type_name: std::any::type_name::<T>(),
            found: result.is_ok(),
        });

        result
    }

    /// Access the existing instance of `T`, assuming it was created.
    ///
    /// # Panics
    ///
    /// Panics if the slot is empty or unreadable. Use [`RegistryApi::get`] to
    /// handle that case.
    fn instance<T: Singleton>(&self) -> Instance<T> {
        match self.get::<T>() {
            Ok(instance) => instance,
            Err(err) => panic!("{err}"),
        }
    }

    /// Check whether the slot for `T` is populated.
    ///
    /// # Errors
    ///
    /// - Registry lock is poisoned
    fn contains<T: Singleton>(&self) -> Result<bool, RegistryError> {
        let found = Self::storage()
            .lock()
            .map(|m| m.contains_key(&TypeId::of::<T>()))
            .map_err(|_| RegistryError::RegistryLock)?;

        self.emit_event(&RegistryEvent::Contains {
            type_name: std::any::type_name::<T>(),
            found,
        });

        Ok(found)
    }

    /// Tear down the slot for `T`, returning whether it was populated.
    ///
    /// Outstanding [`Instance`] handles stay valid; the registry just stops handing
    /// the old instance out. A later `create` builds a new one.
    fn destroy<T: Singleton>(&self) -> bool {
        let type_name = std::any::type_name::<T>();

        let removed = Self::storage()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .remove(&TypeId::of::<T>());
        let found = removed.is_some();
        drop(removed);

        if found {
            log::debug!("singleton {type_name} destroyed");
        }

        self.emit_event(&RegistryEvent::Destroy { type_name, found });

        found
    }

    /// Tear down every slot in the registry.
    ///
    /// Does not affect the tracing callback (use `clear_trace_callback()` for that).
    fn clear(&self) {
        self.emit_event(&RegistryEvent::Clear {});

        let drained = std::mem::take(
            &mut *Self::storage().lock().unwrap_or_else(|p| p.into_inner()),
        );

        log::debug!("registry cleared, {} singleton(s) dropped", drained.len());
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
