#[cfg(not(feature = "threaded"))]
extern crate alloc;
#[cfg(not(feature = "threaded"))]
use alloc::sync::Arc;

#[cfg(feature = "threaded")]
use std::sync::Arc;

/// Type alias for an event payload pointer.
///
/// Payloads are shared between listeners, so they are handed out as `Arc<T>`
/// in both the threaded and embedded builds.
///
/// # Example
/// ```
/// use rs_emitter::EventPayload;
///
/// let payload: EventPayload<String> = std::sync::Arc::new(String::from("emitted value"));
/// ```
pub type EventPayload<T> = Arc<T>;

/// Type alias for a listener callback pointer.
///
/// Identity of a callback is the identity of this `Arc`: cloning the same
/// `Callback` yields the *same* listener for registration and removal
/// purposes, while two separately constructed closures are always distinct.
///
/// - Allows any closure (no thread-safety required).
#[cfg(not(feature = "threaded"))]
pub type Callback<T> = Arc<dyn Fn(&EventPayload<T>)>;

/// Type alias for a listener callback pointer.
///
/// Identity of a callback is the identity of this `Arc`: cloning the same
/// `Callback` yields the *same* listener for registration and removal
/// purposes, while two separately constructed closures are always distinct.
///
/// - Requires `Send + Sync` for thread safety.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use rs_emitter::{Callback, EventPayload};
///
/// let callback: Callback<String> = Arc::new(move |payload: &EventPayload<String>| {
///     println!("received: {}", payload);
/// });
/// ```
#[cfg(feature = "threaded")]
pub type Callback<T> = Arc<dyn Fn(&EventPayload<T>) + Send + Sync>;
