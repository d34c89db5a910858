//! Console implementations.
//!
//! Two consoles back the `RD`/`WR` instructions:
//! 1. **`StdConsole`:** Host stdin/stdout (or stderr), used by the CLI.
//! 2. **`BufferConsole`:** In-memory queues with a shared handle, used by tests
//!    and embedders that want to script input and inspect output.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Read, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::soc::traits::Console;

/// Threshold for flushing the transmit buffer to the host (4 KiB).
const TX_BUFFER_FLUSH_THRESHOLD: usize = 4096;

/// Console bound to the host's standard streams.
///
/// Output is buffered and flushed on newline, when the buffer fills, before
/// every blocking read, and at halt. Input reads block until a byte arrives.
pub struct StdConsole {
    /// Buffer for outgoing bytes.
    tx_buffer: Vec<u8>,
    /// When true, output goes to stderr.
    to_stderr: bool,
}

impl StdConsole {
    /// Creates a console writing to stdout, or stderr when `to_stderr` is set.
    pub const fn new(to_stderr: bool) -> Self {
        Self {
            tx_buffer: Vec::new(),
            to_stderr,
        }
    }

    fn flush_buffer(&mut self) {
        if self.tx_buffer.is_empty() {
            return;
        }
        let result = if self.to_stderr {
            let mut err = io::stderr().lock();
            err.write_all(&self.tx_buffer).and_then(|()| err.flush())
        } else {
            let mut out = io::stdout().lock();
            out.write_all(&self.tx_buffer).and_then(|()| out.flush())
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "console write failed; output dropped");
        }
        self.tx_buffer.clear();
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for StdConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdConsole")
            .field("pending", &self.tx_buffer.len())
            .field("to_stderr", &self.to_stderr)
            .finish()
    }
}

impl Console for StdConsole {
    fn name(&self) -> &str {
        "stdio"
    }

    fn write_byte(&mut self, byte: u8) {
        self.tx_buffer.push(byte);
        if byte == b'\n' || self.tx_buffer.len() >= TX_BUFFER_FLUSH_THRESHOLD {
            self.flush_buffer();
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.flush_buffer();
        let mut buf = [0u8; 1];
        let mut stdin = io::stdin().lock();
        loop {
            match stdin.read(&mut buf) {
                Ok(0) => return None,
                Ok(_) => return Some(buf[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    tracing::warn!(error = %e, "console read failed; treating as end of input");
                    return None;
                }
            }
        }
    }

    fn flush(&mut self) {
        self.flush_buffer();
    }
}

impl Drop for StdConsole {
    fn drop(&mut self) {
        self.flush_buffer();
    }
}

#[derive(Debug, Default)]
struct Buffers {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

/// In-memory console.
///
/// Clones share the same queues, so a test can keep one handle while the
/// simulator owns another.
///
/// # Examples
///
/// ```
/// use hvsim_core::soc::devices::BufferConsole;
/// use hvsim_core::soc::traits::Console;
///
/// let handle = BufferConsole::with_input(b"hi");
/// let mut console = handle.clone();
/// assert_eq!(console.read_byte(), Some(b'h'));
/// console.write_byte(b'!');
/// assert_eq!(handle.output(), b"!");
/// assert_eq!(handle.pending_input(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BufferConsole {
    inner: Arc<Mutex<Buffers>>,
}

impl BufferConsole {
    /// Creates a console with no input and empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console whose input queue holds `input`.
    pub fn with_input(input: &[u8]) -> Self {
        let console = Self::new();
        console.push_input(input);
        console
    }

    fn lock(&self) -> MutexGuard<'_, Buffers> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends bytes to the input queue.
    pub fn push_input(&self, input: &[u8]) {
        self.lock().input.extend(input.iter().copied());
    }

    /// Number of input bytes not yet consumed.
    pub fn pending_input(&self) -> usize {
        self.lock().input.len()
    }

    /// Copy of everything written so far.
    pub fn output(&self) -> Vec<u8> {
        self.lock().output.clone()
    }

    /// Output decoded as UTF-8, with invalid sequences replaced.
    pub fn output_string(&self) -> String {
        String::from_utf8_lossy(&self.lock().output).into_owned()
    }

    /// Drains and returns everything written so far.
    pub fn take_output(&self) -> Vec<u8> {
        std::mem::take(&mut self.lock().output)
    }
}

impl Console for BufferConsole {
    fn name(&self) -> &str {
        "buffer"
    }

    fn write_byte(&mut self, byte: u8) {
        self.lock().output.push(byte);
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.lock().input.pop_front()
    }
}
