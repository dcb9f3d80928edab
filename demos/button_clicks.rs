//! Example: GUI button wiring with persistent and one-shot listeners.

use std::sync::Arc;

use rs_emitter::{Callback, EventEmitter, EventHandler};

fn main() {
    env_logger::init();

    let emitter = EventEmitter::<String>::new();

    // Fires on the first "ready" only.
    emitter.once("ready", Arc::new(|_| println!("ui ready")));

    let click_handler: Callback<String> = Arc::new(|payload| {
        println!("clicked: {payload}");
    });
    emitter.on("button_click", click_handler.clone());

    emitter.emit("ready", Arc::new(String::new()));
    emitter.emit("button_click", Arc::new("OK".to_string()));
    emitter.emit("button_click", Arc::new("Cancel".to_string()));

    // Detach the handler; further clicks go nowhere.
    emitter.off("button_click", &click_handler);
    emitter.emit("button_click", Arc::new("ignored".to_string()));
}
