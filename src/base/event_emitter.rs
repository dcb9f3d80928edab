extern crate alloc;
use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    sync::Arc,
    vec::Vec,
};
use core::cell::RefCell;

use log::trace;

use crate::{Callback, EventHandler, EventPayload, Listener};

/// An event emitter that manages listeners and event emissions for a given
/// payload type, for `no_std + alloc` environments.
///
/// Same contract as the `threaded` flavor: two registries keyed by event
/// name (persistent and one-shot), each an insertion-ordered set of
/// listeners with callback-identity membership. Dispatch is synchronous and
/// in registration order; emission snapshots the registries and releases
/// every borrow before the first callback runs, so listeners may re-enter
/// the emitter.
///
/// # Type Parameters
/// * `T` - The payload type for events.
///
/// # Implementation Notes
/// - Uses `RefCell<BTreeMap>` for lock-free registry storage; single-threaded
///   use only.
/// - Cloning the emitter copies the current registrations; the clone is an
///   independent emitter.
pub struct EventEmitter<T> {
    /// Persistent listeners, per event name.
    listeners: RefCell<BTreeMap<String, Vec<Listener<T>>>>,
    /// One-shot listeners, per event name; drained by emission.
    once_listeners: RefCell<BTreeMap<String, Vec<Listener<T>>>>,
}

impl<T> EventEmitter<T> {
    /// Creates a new `EventEmitter<T>` with empty registries.
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(BTreeMap::new()),
            once_listeners: RefCell::new(BTreeMap::new()),
        }
    }
}

impl<T> EventHandler<T> for EventEmitter<T> {
    /// Registers a persistent listener for the specified event, creating the
    /// registry entry if absent. Idempotent per callback identity: a clone of
    /// an already-registered `Arc` leaves the registry unchanged.
    fn on(&self, event_name: &str, callback: Callback<T>) -> &Self {
        let mut listeners = self.listeners.borrow_mut();
        let entry = listeners.entry(event_name.to_string()).or_default();
        let listener = Listener::new(callback);
        if !entry.contains(&listener) {
            entry.push(listener);
            trace!("on \"{}\": {} persistent listener(s)", event_name, entry.len());
        }
        self
    }

    /// Registers a one-shot listener for the specified event: it is invoked
    /// by the first subsequent emission of that name, then removed. The
    /// one-shot slot is independent of the persistent slot for the same
    /// callback.
    fn once(&self, event_name: &str, callback: Callback<T>) -> &Self {
        let mut listeners = self.once_listeners.borrow_mut();
        let entry = listeners.entry(event_name.to_string()).or_default();
        let listener = Listener::new(callback);
        if !entry.contains(&listener) {
            entry.push(listener);
            trace!("once \"{}\": {} one-shot listener(s)", event_name, entry.len());
        }
        self
    }

    /// Removes a listener, by callback identity, from both registries of the
    /// specified event. Absence in either or both is not an error.
    fn off(&self, event_name: &str, callback: &Callback<T>) -> &Self {
        if let Some(entry) = self.listeners.borrow_mut().get_mut(event_name) {
            entry.retain(|listener| !Arc::ptr_eq(listener.callback(), callback));
        }
        if let Some(entry) = self.once_listeners.borrow_mut().get_mut(event_name) {
            entry.retain(|listener| !Arc::ptr_eq(listener.callback(), callback));
        }
        trace!("off \"{}\"", event_name);
        self
    }

    /// Synchronously emits the specified event: persistent listeners in
    /// registration order, then one-shot listeners in registration order,
    /// with the one-shot entry consumed exactly once per emission. Emitting
    /// a name with no listeners is a silent no-op.
    ///
    /// Both registries are snapshotted, and the one-shot entry taken, before
    /// the first callback runs; no borrow is held while listeners execute,
    /// so listeners may call `on`/`once`/`off` on this emitter mid-dispatch
    /// without affecting the in-flight emission. A panicking listener
    /// propagates out of `emit` and aborts the remaining invocations; the
    /// one-shot entry stays consumed.
    fn emit(&self, event_name: &str, payload: EventPayload<T>) -> &Self {
        let persistent: Vec<Listener<T>> = self
            .listeners
            .borrow()
            .get(event_name)
            .cloned()
            .unwrap_or_default();
        let one_shot: Vec<Listener<T>> = self
            .once_listeners
            .borrow_mut()
            .remove(event_name)
            .unwrap_or_default();

        trace!(
            "emit \"{}\": {} persistent, {} one-shot",
            event_name,
            persistent.len(),
            one_shot.len()
        );
        for listener in persistent.iter().chain(one_shot.iter()) {
            listener.call(&payload);
        }
        self
    }

    /// Returns the names of all events that currently have one or more
    /// registered listeners.
    fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, listeners)| !listeners.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        for (name, listeners) in self.once_listeners.borrow().iter() {
            if !listeners.is_empty() && !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }

    /// Returns the number of listeners registered for the specified event,
    /// summed across the persistent and one-shot registries.
    fn listener_count(&self, event_name: &str) -> usize {
        let persistent = self
            .listeners
            .borrow()
            .get(event_name)
            .map_or(0, |listeners| listeners.len());
        let one_shot = self
            .once_listeners
            .borrow()
            .get(event_name)
            .map_or(0, |listeners| listeners.len());
        persistent + one_shot
    }

    /// Removes every listener, persistent and one-shot, for the specified
    /// event.
    fn remove_all_listeners(&self, event_name: &str) -> &Self {
        self.listeners.borrow_mut().remove(event_name);
        self.once_listeners.borrow_mut().remove(event_name);
        self
    }
}

impl<T> Clone for EventEmitter<T> {
    /// Copies the current registrations into an independent emitter.
    fn clone(&self) -> Self {
        Self {
            listeners: RefCell::new(self.listeners.borrow().clone()),
            once_listeners: RefCell::new(self.once_listeners.borrow().clone()),
        }
    }
}

impl<T> Default for EventEmitter<T> {
    /// Creates a new `EventEmitter<T>` with empty registries.
    fn default() -> Self {
        Self::new()
    }
}
