//! External interrupt line.
//!
//! A single level that any thread may raise. The engine samples it once at the
//! start of each step; a raised line is consumed and latched into the
//! interrupt flag. Raising twice before a sample still delivers once.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shareable handle to the external interrupt line.
///
/// Clones refer to the same line.
///
/// # Examples
///
/// ```
/// use hvsim_core::soc::devices::InterruptLine;
///
/// let line = InterruptLine::new();
/// let remote = line.clone();
/// std::thread::spawn(move || remote.raise()).join().unwrap();
/// assert!(line.take());
/// assert!(!line.take());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InterruptLine {
    raised: Arc<AtomicBool>,
}

impl InterruptLine {
    /// Creates a lowered line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the line. Safe to call from any thread or a signal handler.
    #[inline]
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Lowers the line and reports whether it was raised.
    #[inline]
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::AcqRel)
    }

    /// Reports whether the line is raised without consuming it.
    #[inline]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Lowers the line, discarding any pending request.
    #[inline]
    pub fn clear(&self) {
        self.raised.store(false, Ordering::Release);
    }
}
