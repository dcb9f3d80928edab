//! Emitter usage against a fixed event map, the way an embedding component
//! would declare one:
//!
//! | name         | payload            |
//! |--------------|--------------------|
//! | `"progress"` | one number         |
//! | `"abort"`    | nothing            |
//! | `"complete"` | a mapping + number |
//!
//! The name-to-variant contract is carried by the payload enum and checked
//! here rather than enforced by the emitter at runtime.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::{Callback, EventEmitter, EventHandler, EventPayload};

#[derive(Debug, PartialEq, Eq, Clone)]
enum TransferEvent {
    Progress(u64),
    Abort,
    Complete(BTreeMap<String, String>, u64),
}

fn spy(seen: &Arc<Mutex<Vec<TransferEvent>>>) -> Callback<TransferEvent> {
    let seen = Arc::clone(seen);
    Arc::new(move |payload: &EventPayload<TransferEvent>| {
        seen.lock().unwrap().push((**payload).clone());
    })
}

#[test]
fn progress_reaches_both_spies_in_order() {
    let emitter = EventEmitter::<TransferEvent>::new();
    let seen1 = Arc::new(Mutex::new(Vec::new()));
    let seen2 = Arc::new(Mutex::new(Vec::new()));

    emitter.on("progress", spy(&seen1));
    emitter.on("progress", spy(&seen2));

    emitter.emit("progress", Arc::new(TransferEvent::Progress(100)));

    assert_eq!(*seen1.lock().unwrap(), [TransferEvent::Progress(100)]);
    assert_eq!(*seen2.lock().unwrap(), [TransferEvent::Progress(100)]);
}

#[test]
fn removed_spy_misses_later_progress() {
    let emitter = EventEmitter::<TransferEvent>::new();
    let seen1 = Arc::new(Mutex::new(Vec::new()));
    let seen2 = Arc::new(Mutex::new(Vec::new()));

    let spy2 = spy(&seen2);
    emitter.on("progress", spy(&seen1));
    emitter.on("progress", spy2.clone());
    emitter.off("progress", &spy2);

    emitter.emit("progress", Arc::new(TransferEvent::Progress(100)));

    assert_eq!(*seen1.lock().unwrap(), [TransferEvent::Progress(100)]);
    assert!(seen2.lock().unwrap().is_empty());
}

#[test]
fn progress_does_not_reach_complete_spy() {
    let emitter = EventEmitter::<TransferEvent>::new();
    let progress_seen = Arc::new(Mutex::new(Vec::new()));
    let complete_seen = Arc::new(Mutex::new(Vec::new()));

    emitter.on("progress", spy(&progress_seen));
    emitter.on("complete", spy(&complete_seen));

    emitter.emit("progress", Arc::new(TransferEvent::Progress(100)));

    assert_eq!(*progress_seen.lock().unwrap(), [TransferEvent::Progress(100)]);
    assert!(complete_seen.lock().unwrap().is_empty());
}

#[test]
fn progress_without_listeners_is_silent() {
    let emitter = EventEmitter::<TransferEvent>::new();
    emitter.emit("progress", Arc::new(TransferEvent::Progress(100)));
    assert!(emitter.event_names().is_empty());
}

#[test]
fn abort_carries_no_data() {
    let emitter = EventEmitter::<TransferEvent>::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    emitter.once("abort", spy(&seen));
    emitter.emit("abort", Arc::new(TransferEvent::Abort));

    assert_eq!(*seen.lock().unwrap(), [TransferEvent::Abort]);
}

#[test]
fn complete_carries_mapping_and_number() {
    let emitter = EventEmitter::<TransferEvent>::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    emitter.on("complete", spy(&seen));

    let mut stats = BTreeMap::new();
    stats.insert("path".to_string(), "/tmp/out.bin".to_string());
    stats.insert("sha".to_string(), "1f2e3d".to_string());
    emitter.emit(
        "complete",
        Arc::new(TransferEvent::Complete(stats.clone(), 4096)),
    );

    assert_eq!(
        *seen.lock().unwrap(),
        [TransferEvent::Complete(stats, 4096)]
    );
}
