//! # Console Tests
//!
//! The in-memory console and its shared handles.

use hvsim_core::soc::devices::{BufferConsole, Console, StdConsole};
use pretty_assertions::assert_eq;

#[test]
fn test_buffer_console_reads_in_order_then_eof() {
    let mut console = BufferConsole::with_input(b"ab");
    assert_eq!(console.read_byte(), Some(b'a'));
    assert_eq!(console.read_byte(), Some(b'b'));
    assert_eq!(console.read_byte(), None);
    assert_eq!(console.read_byte(), None);
}

#[test]
fn test_clones_share_queues() {
    let handle = BufferConsole::new();
    let mut console = handle.clone();
    handle.push_input(b"x");
    assert_eq!(console.read_byte(), Some(b'x'));
    console.write_byte(b'o');
    console.write_byte(b'k');
    assert_eq!(handle.output_string(), "ok");
}

#[test]
fn test_take_output_drains() {
    let mut console = BufferConsole::new();
    console.write_byte(1);
    assert_eq!(console.take_output(), vec![1]);
    assert!(console.output().is_empty());
}

#[test]
fn test_output_string_is_lossy() {
    let mut console = BufferConsole::new();
    console.write_byte(b'a');
    console.write_byte(0xFF);
    assert_eq!(console.output_string(), "a\u{FFFD}");
}

#[test]
fn test_console_names() {
    assert_eq!(BufferConsole::new().name(), "buffer");
    assert_eq!(StdConsole::default().name(), "stdio");
}

#[test]
fn test_std_console_flush_with_empty_buffer() {
    let mut console = StdConsole::new(true);
    console.flush();
    assert!(format!("{console:?}").contains("pending: 0"));
}
