#[cfg(not(feature = "threaded"))]
extern crate alloc;
#[cfg(not(feature = "threaded"))]
use alloc::{string::String, vec::Vec};

use crate::{Callback, EventPayload};

/// This trait defines the event API for structs that manage listener
/// registries and event emissions. <br/>
/// Every operation borrows the handler and returns it again, so calls chain:
/// `emitter.on(..).once(..).emit(..)`. None of the operations has an error
/// path; removal of an absent listener and emission without listeners are
/// silent no-ops.
pub trait EventHandler<T> {
    /// Register a persistent listener for an event. Registering the identical
    /// callback (same `Arc`) twice is a no-op.
    fn on(&self, event_name: &str, callback: Callback<T>) -> &Self;

    /// Register a one-shot listener for an event: it fires on the first
    /// subsequent emission of that name, then is removed.
    fn once(&self, event_name: &str, callback: Callback<T>) -> &Self;

    /// Remove a listener, by callback identity, from both the persistent and
    /// one-shot registries of an event.
    fn off(&self, event_name: &str, callback: &Callback<T>) -> &Self;

    /// Synchronously emit an event: persistent listeners first, then one-shot
    /// listeners, each in registration order, then clear the one-shot entry
    /// for the name.
    fn emit(&self, event_name: &str, payload: EventPayload<T>) -> &Self;

    /// Get a Vec of names for currently active (1+ listeners) events.
    fn event_names(&self) -> Vec<String>;

    /// Get the number of listeners registered for an event, across both the
    /// persistent and one-shot registries. Unknown names count zero.
    fn listener_count(&self, event_name: &str) -> usize;

    /// Get a boolean, whether an event has any registered listeners.
    fn has_listeners(&self, event_name: &str) -> bool {
        self.listener_count(event_name) > 0
    }

    /// Remove every listener (persistent and one-shot) for an event.
    fn remove_all_listeners(&self, event_name: &str) -> &Self;
}
