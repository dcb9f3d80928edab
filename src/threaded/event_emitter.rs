use std::sync::Arc;

use dashmap::DashMap;
use log::trace;

use crate::{Callback, EventHandler, EventPayload, Listener};

/// An event emitter that manages listeners and event emissions for a given
/// payload type.
///
/// This struct implements the [`EventHandler`] trait and keeps two registries
/// keyed by event name: *persistent* listeners (registered with
/// [`EventHandler::on`], survive repeated emissions) and *one-shot* listeners
/// (registered with [`EventHandler::once`], cleared by the first emission of
/// their name). Within each registry, listeners for a name form an
/// insertion-ordered set: registration order is dispatch order, the same
/// callback is never held twice, and removing then re-adding a callback moves
/// it to the end of the order.
///
/// # Type Parameters
/// * `T` - The payload type for events.
///
/// # Implementation Notes
/// - Uses [`DashMap`] for concurrent registry storage; listeners for an event
///   are stored in a `Vec` under the event's name.
/// - Emission snapshots the registries and releases every lock before the
///   first callback runs, so listeners may re-enter the emitter.
/// - Cloning the emitter yields a handle to the *same* registries.
pub struct EventEmitter<T> {
    /// Persistent listeners, per event name.
    listeners: Arc<DashMap<String, Vec<Listener<T>>>>,
    /// One-shot listeners, per event name; drained by emission.
    once_listeners: Arc<DashMap<String, Vec<Listener<T>>>>,
}

impl<T> EventEmitter<T> {
    /// Creates a new `EventEmitter<T>` with empty registries.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_emitter::{EventEmitter, EventHandler};
    ///
    /// let emitter = EventEmitter::<String>::new();
    /// assert!(emitter.event_names().is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(DashMap::new()),
            once_listeners: Arc::new(DashMap::new()),
        }
    }
}

impl<T> EventHandler<T> for EventEmitter<T> {
    /// Registers a persistent listener for the specified event, creating the
    /// registry entry if absent.
    ///
    /// Registration is idempotent per callback identity: passing a clone of
    /// an already-registered `Arc` leaves the registry unchanged. A distinct
    /// closure, even one with identical code, is a separate listener.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use rs_emitter::{Callback, EventEmitter, EventHandler};
    ///
    /// let emitter = EventEmitter::<u32>::new();
    /// let callback: Callback<u32> = Arc::new(|_| {});
    ///
    /// emitter.on("progress", callback.clone());
    /// emitter.on("progress", callback); // same identity: no-op
    /// assert_eq!(emitter.listener_count("progress"), 1);
    /// ```
    fn on(&self, event_name: &str, callback: Callback<T>) -> &Self {
        let mut entry = self.listeners.entry(event_name.to_string()).or_default();
        let listener = Listener::new(callback);
        if !entry.contains(&listener) {
            entry.push(listener);
            trace!("on \"{}\": {} persistent listener(s)", event_name, entry.len());
        }
        self
    }

    /// Registers a one-shot listener for the specified event: it is invoked
    /// by the first subsequent emission of that name, then removed.
    ///
    /// Same idempotency rule as [`EventHandler::on`]; the persistent and
    /// one-shot registries are independent slots, so the same callback may be
    /// held in both at once.
    ///
    /// # Example
    /// ```
    /// use std::sync::{Arc, Mutex};
    /// use rs_emitter::{EventEmitter, EventHandler};
    ///
    /// let emitter = EventEmitter::<u32>::new();
    /// let calls = Arc::new(Mutex::new(0));
    /// let calls2 = Arc::clone(&calls);
    ///
    /// emitter.once("progress", Arc::new(move |_| {
    ///     *calls2.lock().unwrap() += 1;
    /// }));
    /// emitter.emit("progress", Arc::new(50));
    /// emitter.emit("progress", Arc::new(100));
    /// assert_eq!(*calls.lock().unwrap(), 1);
    /// ```
    fn once(&self, event_name: &str, callback: Callback<T>) -> &Self {
        let mut entry = self
            .once_listeners
            .entry(event_name.to_string())
            .or_default();
        let listener = Listener::new(callback);
        if !entry.contains(&listener) {
            entry.push(listener);
            trace!("once \"{}\": {} one-shot listener(s)", event_name, entry.len());
        }
        self
    }

    /// Removes a listener, by callback identity, from both the persistent and
    /// one-shot registries of the specified event.
    ///
    /// Absence in either or both registries is not an error; the call is a
    /// best-effort, idempotent removal.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use rs_emitter::{Callback, EventEmitter, EventHandler};
    ///
    /// let emitter = EventEmitter::<u32>::new();
    /// let callback: Callback<u32> = Arc::new(|_| {});
    ///
    /// emitter.on("progress", callback.clone());
    /// emitter.once("progress", callback.clone());
    /// emitter.off("progress", &callback);
    /// assert_eq!(emitter.listener_count("progress"), 0);
    /// ```
    fn off(&self, event_name: &str, callback: &Callback<T>) -> &Self {
        if let Some(mut entry) = self.listeners.get_mut(event_name) {
            entry.retain(|listener| !Arc::ptr_eq(listener.callback(), callback));
        }
        if let Some(mut entry) = self.once_listeners.get_mut(event_name) {
            entry.retain(|listener| !Arc::ptr_eq(listener.callback(), callback));
        }
        trace!("off \"{}\"", event_name);
        self
    }

    /// Synchronously emits the specified event, invoking every matching
    /// listener on the caller's thread with the given payload.
    ///
    /// Dispatch order: persistent listeners in registration order, then
    /// one-shot listeners in registration order. The one-shot entry for the
    /// name is consumed exactly once per emission, regardless of how many
    /// one-shot listeners it held. Emitting a name with no listeners is a
    /// silent no-op.
    ///
    /// Both registries are snapshotted, and the one-shot entry taken, before
    /// the first callback runs; no lock is held while listeners execute.
    /// Listeners may therefore call `on`/`once`/`off` on this emitter
    /// mid-dispatch, and no such call affects the in-flight emission.
    ///
    /// A panicking listener propagates out of `emit` and aborts the remaining
    /// invocations of this emission; the one-shot entry stays consumed.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicU32, Ordering};
    /// use rs_emitter::{EventEmitter, EventHandler};
    ///
    /// let emitter = EventEmitter::<u32>::new();
    /// let seen = Arc::new(AtomicU32::new(0));
    /// let seen2 = Arc::clone(&seen);
    ///
    /// emitter.on("progress", Arc::new(move |payload| {
    ///     seen2.store(**payload, Ordering::SeqCst);
    /// }));
    /// emitter.emit("progress", Arc::new(100));
    /// assert_eq!(seen.load(Ordering::SeqCst), 100);
    /// ```
    fn emit(&self, event_name: &str, payload: EventPayload<T>) -> &Self {
        // Snapshot under the shard locks; guards drop before any callback runs
        // so listeners can re-enter the emitter without deadlocking.
        let persistent: Vec<Listener<T>> = self
            .listeners
            .get(event_name)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        let one_shot: Vec<Listener<T>> = self
            .once_listeners
            .remove(event_name)
            .map(|(_, listeners)| listeners)
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
    /// registered listeners, in unspecified order.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use rs_emitter::{EventEmitter, EventHandler};
    ///
    /// let emitter = EventEmitter::<u32>::new();
    /// emitter.on("progress", Arc::new(|_| {}));
    /// emitter.once("complete", Arc::new(|_| {}));
    ///
    /// let mut names = emitter.event_names();
    /// names.sort();
    /// assert_eq!(names, ["complete", "progress"]);
    /// ```
    fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .listeners
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| entry.key().clone())
            .collect();
        for entry in self.once_listeners.iter() {
            if !entry.value().is_empty() && !names.contains(entry.key()) {
                names.push(entry.key().clone());
            }
        }
        names
    }

    /// Returns the number of listeners registered for the specified event,
    /// summed across the persistent and one-shot registries.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use rs_emitter::{EventEmitter, EventHandler};
    ///
    /// let emitter = EventEmitter::<u32>::new();
    /// emitter.on("progress", Arc::new(|_| {}));
    /// emitter.once("progress", Arc::new(|_| {}));
    /// assert_eq!(emitter.listener_count("progress"), 2);
    /// assert_eq!(emitter.listener_count("abort"), 0);
    /// ```
    fn listener_count(&self, event_name: &str) -> usize {
        let persistent = self
            .listeners
            .get(event_name)
            .map_or(0, |entry| entry.value().len());
        let one_shot = self
            .once_listeners
            .get(event_name)
            .map_or(0, |entry| entry.value().len());
        persistent + one_shot
    }

    /// Removes every listener, persistent and one-shot, for the specified
    /// event.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use rs_emitter::{EventEmitter, EventHandler};
    ///
    /// let emitter = EventEmitter::<u32>::new();
    /// emitter.on("progress", Arc::new(|_| {}));
    /// emitter.once("progress", Arc::new(|_| {}));
    ///
    /// emitter.remove_all_listeners("progress");
    /// assert!(!emitter.has_listeners("progress"));
    /// ```
    fn remove_all_listeners(&self, event_name: &str) -> &Self {
        self.listeners.remove(event_name);
        self.once_listeners.remove(event_name);
        self
    }
}

impl<T> Clone for EventEmitter<T> {
    /// Returns a handle sharing this emitter's registries: registrations and
    /// emissions through either handle are visible to both.
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
            once_listeners: Arc::clone(&self.once_listeners),
        }
    }
}

impl<T> Default for EventEmitter<T> {
    /// Creates a new `EventEmitter<T>` with empty registries.
    fn default() -> Self {
        Self::new()
    }
}
