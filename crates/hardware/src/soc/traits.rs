//! Console trait for character I/O.
//!
//! This module defines the `Console` trait that backs the `WR` and `RD`
//! instructions. It provides:
//! 1. **Output:** One byte per `WR`.
//! 2. **Input:** One byte per `RD`, or `None` once the stream is exhausted.
//! 3. **Flushing:** Explicit flush at halt so buffered output is not lost.
//!
//! Implementors must be `Send` so a simulator can be moved to a worker thread.

/// Byte-oriented console attached to the CPU's I/O instructions.
///
/// Implementations may block in `read_byte`; that suspends the whole engine.
/// Host I/O failures are not architectural events: implementations handle them
/// internally (a failed read reports end-of-input).
pub trait Console: Send {
    /// Returns a short name for this console (e.g., `"stdio"`, `"buffer"`).
    fn name(&self) -> &str;

    /// Emits one output byte.
    fn write_byte(&mut self, byte: u8);

    /// Consumes one input byte, or returns `None` at end of input.
    fn read_byte(&mut self) -> Option<u8>;

    /// Flushes buffered output (default: nothing buffered).
    fn flush(&mut self) {}
}
