use std::{fmt, ops::Deref, sync::Arc};

/// Shared handle to the instance stored in a registry slot.
///
/// Cloning a handle never clones the instance: every handle for a slot points
/// at the same allocation, which [`Instance::ptr_eq`] can verify. The value stays
/// alive while any handle exists, even after the slot was destroyed.
pub struct Instance<T>(Arc<T>);

impl<T> Instance<T> {
    pub(crate) fn from_arc(arc: Arc<T>) -> Self {
        Instance(arc)
    }

    /// Returns `true` if both handles refer to the same instance.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// Address of the instance, useful as an identity key.
    pub fn as_ptr(this: &Self) -> *const T {
        Arc::as_ptr(&this.0)
    }

    pub fn into_arc(this: Self) -> Arc<T> {
        this.0
    }
}

impl<T> Clone for Instance<T> {
    fn clone(&self) -> Self {
        Instance(Arc::clone(&self.0))
    }
}

impl<T> Deref for Instance<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Instance<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Instance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Instance").field(&*self.0).finish()
    }
}
