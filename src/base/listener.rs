extern crate alloc;
use alloc::sync::Arc;

use crate::{Callback, EventPayload};

/// A handle for a registered event listener callback.
///
/// `Listener<T>` wraps the callback pointer under which it was registered.
/// Equality is *callback identity*: two handles compare equal exactly when
/// they hold clones of the same [`Callback`] `Arc`, never by comparing what
/// the closures do. This is what makes repeated registration of the same
/// callback idempotent and removal by callback possible.
pub struct Listener<T> {
    callback: Callback<T>,
}

impl<T> Listener<T> {
    /// Wrap a callback in a listener handle.
    pub fn new(callback: Callback<T>) -> Self {
        Self { callback }
    }

    /// Returns a reference to the callback this listener was registered with.
    pub fn callback(&self) -> &Callback<T> {
        &self.callback
    }

    /// Synchronously invoke the callback with the given payload.
    #[inline]
    pub fn call(&self, payload: &EventPayload<T>) {
        (self.callback)(payload);
    }
}

impl<T> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<T> PartialEq for Listener<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }
}
impl<T> Eq for Listener<T> {}

impl<T> core::fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listener")
            .field("callback", &Arc::as_ptr(&self.callback))
            .finish()
    }
}
