#![cfg_attr(not(feature = "threaded"), no_std)]

//! # rs-emitter
//!
//! A minimal, typed, synchronous publish/subscribe primitive for embedding
//! inside larger components (progress reporters, transfer pipelines, UI glue).
//!
//! - **EventEmitter**: owns the listener registries and dispatch logic.
//! - **Listener**: an opaque handle around a registered callback; equality is
//!   callback identity.
//! - **EventHandler**: trait defining the event API (`on`, `once`, `off`,
//!   `emit`, plus introspection).
//!
//! Listeners registered with [`EventHandler::on`] survive repeated emissions;
//! listeners registered with [`EventHandler::once`] fire at most one time and
//! are cleared by the first emission of their event name. Dispatch is fully
//! synchronous and runs on the caller's thread, in registration order.
//!
//! By default the crate builds the `threaded` (thread-safe) implementation.
//! For embedded or single-threaded use, build with `--no-default-features`
//! to get the `no_std + alloc` variant; both expose the same API surface.

mod constants;
mod handler;

#[cfg(not(feature = "threaded"))]
mod base;
#[cfg(feature = "threaded")]
mod threaded;

pub use constants::{Callback, EventPayload};
pub use handler::EventHandler;

#[cfg(not(feature = "threaded"))]
pub use base::{EventEmitter, Listener};
#[cfg(feature = "threaded")]
pub use threaded::{EventEmitter, Listener};
