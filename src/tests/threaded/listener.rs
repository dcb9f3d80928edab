use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::{Callback, EventPayload, Listener};

#[test]
fn listener_call_invokes_callback() {
    let called = Arc::new(AtomicU64::new(0));
    let called2 = called.clone();
    let cb: Callback<u32> = Arc::new(move |payload: &EventPayload<u32>| {
        assert_eq!(**payload, 42);
        called2.fetch_add(1, Ordering::SeqCst);
    });

    let listener = Listener::new(cb);
    listener.call(&Arc::new(42));
    listener.call(&Arc::new(42));
    assert_eq!(called.load(Ordering::SeqCst), 2);
}

#[test]
fn listener_equality_is_callback_identity() {
    let cb: Callback<&'static str> = Arc::new(|_| {});

    // Clones of the same handle share identity
    let l1 = Listener::new(cb.clone());
    let l2 = Listener::new(cb.clone());
    assert_eq!(l1, l2);
    assert_eq!(l1, l1.clone());

    // A separately constructed closure is a distinct listener, even with
    // identical code
    let cb2: Callback<&'static str> = Arc::new(|_| {});
    let l3 = Listener::new(cb2);
    assert_ne!(l1, l3);
}

#[test]
fn listener_clone_shares_callback() {
    let cb: Callback<u8> = Arc::new(|_| {});
    let l1 = Listener::new(cb);
    let l2 = l1.clone();
    assert!(Arc::ptr_eq(l1.callback(), l2.callback()));
}

#[test]
fn listener_debug_output() {
    let cb: Callback<u8> = Arc::new(|_| {});
    let listener = Listener::new(cb);
    let dbg = format!("{:?}", listener);
    assert!(dbg.starts_with("Listener"));
}
