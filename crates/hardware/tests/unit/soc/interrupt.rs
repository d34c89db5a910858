//! # Interrupt Line Tests

use std::thread;

use hvsim_core::soc::devices::InterruptLine;

#[test]
fn test_new_line_is_lowered() {
    let line = InterruptLine::new();
    assert!(!line.is_raised());
    assert!(!line.take());
}

#[test]
fn test_take_consumes_raise() {
    let line = InterruptLine::new();
    line.raise();
    line.raise();
    assert!(line.is_raised());
    assert!(line.take());
    assert!(!line.take());
}

#[test]
fn test_clear_drops_pending_raise() {
    let line = InterruptLine::new();
    line.raise();
    line.clear();
    assert!(!line.take());
}

#[test]
fn test_clones_share_state_across_threads() {
    let line = InterruptLine::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let remote = line.clone();
            thread::spawn(move || remote.raise())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert!(line.take());
    assert!(!line.is_raised());
}
