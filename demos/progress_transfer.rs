//! Example: a transfer task reporting progress through an embedded emitter.
//!
//! Event map used by this component:
//! - `"progress"` carries the percentage done
//! - `"complete"` carries output metadata and the byte count

use std::collections::BTreeMap;
use std::sync::Arc;

use rs_emitter::{Callback, EventEmitter, EventHandler};

#[derive(Debug, Clone)]
enum TransferEvent {
    Progress(u64),
    Complete(BTreeMap<String, String>, u64),
}

/// A transfer that owns an emitter and publishes its lifecycle through it.
struct Transfer {
    events: EventEmitter<TransferEvent>,
    bytes: u64,
}

impl Transfer {
    fn new(bytes: u64) -> Self {
        Self {
            events: EventEmitter::new(),
            bytes,
        }
    }

    fn events(&self) -> &EventEmitter<TransferEvent> {
        &self.events
    }

    fn run(&self) {
        for pct in (0..=100u64).step_by(25) {
            self.events
                .emit("progress", Arc::new(TransferEvent::Progress(pct)));
        }
        let mut meta = BTreeMap::new();
        meta.insert("path".to_string(), "/tmp/out.bin".to_string());
        self.events
            .emit("complete", Arc::new(TransferEvent::Complete(meta, self.bytes)));
    }
}

fn main() {
    env_logger::init();

    let transfer = Transfer::new(4096);

    let progress_bar: Callback<TransferEvent> = Arc::new(|payload| {
        if let TransferEvent::Progress(pct) = &**payload {
            println!("progress: {pct}%");
        }
    });
    transfer.events().on("progress", progress_bar);
    transfer.events().once(
        "complete",
        Arc::new(|payload| {
            if let TransferEvent::Complete(meta, bytes) = &**payload {
                println!("complete: {bytes} bytes written, {meta:?}");
            }
        }),
    );

    transfer.run();
}
