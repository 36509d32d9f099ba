//! Opt-in marker for singleton types and the optional main-constructor capability.
//!
//! A type becomes eligible for a registry slot by implementing [`Singleton`],
//! usually through the [`singleton!`](crate::singleton) macro. Types that are not
//! opted in are rejected at compile time:
//!
//! ```compile_fail
//! // `i32` does not implement `Singleton`, so it cannot own a slot.
//! let _ = single_instance::create::<i32>();
//! ```

/// A type that may live in a registry slot.
///
/// Implementing this trait is the only requirement. The provided method reports
/// the main-constructor completion flag. By default a type has no flag, and
/// creation never checks one.
pub trait Singleton: Send + Sync + 'static {
    /// Reports whether the designated main constructor ran.
    ///
    /// - `None`: the type does not track this; the check is skipped.
    /// - `Some(true)`: the main constructor completed.
    /// - `Some(false)`: the value was built through a path that bypassed it,
    ///   and `create` rejects it with
    ///   [`RegistryError::MainCtorNotCalled`](crate::RegistryError::MainCtorNotCalled).
    fn main_ctor_called(&self) -> Option<bool> {
        None
    }
}

/// Completion flag meant to be embedded in a singleton type.
///
/// The main constructor marks it; every other constructor leaves it unset.
///
/// ```rust
/// use single_instance::{singleton, MainCtor};
///
/// struct Service {
///     port: u16,
///     main_ctor: MainCtor,
/// }
///
/// singleton!(Service, main_ctor = main_ctor);
///
/// impl From<u16> for Service {
///     fn from(port: u16) -> Self {
///         Service { port, main_ctor: MainCtor::called() }
///     }
/// }
///
/// let service = single_instance::create_from::<Service, _>(8080u16).unwrap();
/// assert_eq!(service.port, 8080);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MainCtor {
    called: bool,
}

impl MainCtor {
    /// A flag that has not been marked yet.
    pub const fn new() -> Self {
        MainCtor { called: false }
    }

    /// A flag that is already marked, for use at the end of the main constructor.
    pub const fn called() -> Self {
        MainCtor { called: true }
    }

    pub fn mark_called(&mut self) {
        self.called = true;
    }

    pub const fn is_called(&self) -> bool {
        self.called
    }
}

impl From<MainCtor> for bool {
    fn from(flag: MainCtor) -> bool {
        flag.called
    }
}

/// Returns `true` unless the value exposes a completion flag that is unset.
pub(crate) fn main_ctor_completed<T: Singleton>(value: &T) -> bool {
    value.main_ctor_called().unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Untracked;
    impl Singleton for Untracked {}

    struct Tracked(MainCtor);
    impl Singleton for Tracked {
        fn main_ctor_called(&self) -> Option<bool> {
            Some(self.0.is_called())
        }
    }

    #[test]
    fn test_untracked_type_passes() {
        assert_eq!(Untracked.main_ctor_called(), None);
        assert!(main_ctor_completed(&Untracked));
    }

    #[test]
    fn test_tracked_type_follows_flag() {
        assert!(!main_ctor_completed(&Tracked(MainCtor::new())));
        assert!(main_ctor_completed(&Tracked(MainCtor::called())));
    }

    #[test]
    fn test_mark_called() {
        let mut flag = MainCtor::default();
        assert!(!flag.is_called());
        flag.mark_called();
        assert!(flag.is_called());
        assert!(bool::from(flag));
    }
}
