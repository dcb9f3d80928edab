use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::{Callback, EventPayload};

/// A handle for a registered event listener callback.
///
/// `Listener<T>` wraps the callback pointer under which it was registered.
/// Equality is *callback identity*: two handles compare equal exactly when
/// they hold clones of the same [`Callback`] `Arc`, never by comparing what
/// the closures do. This is what makes repeated registration of the same
/// callback idempotent and removal by callback possible.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use rs_emitter::{Callback, Listener};
///
/// let callback: Callback<String> = Arc::new(|payload| {
///     println!("got: {}", payload);
/// });
/// let listener = Listener::new(callback.clone());
/// assert_eq!(listener, Listener::new(callback));
/// ```
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
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use rs_emitter::{EventPayload, Listener};
    ///
    /// let listener = Listener::new(Arc::new(|payload: &EventPayload<u32>| {
    ///     assert_eq!(**payload, 7);
    /// }));
    /// listener.call(&Arc::new(7));
    /// ```
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

impl<T> Debug for Listener<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("callback", &Arc::as_ptr(&self.callback))
            .finish()
    }
}
