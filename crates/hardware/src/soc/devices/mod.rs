//! I/O Devices.
//!
//! This module contains the devices attached to the CPU outside its memories:
//! the byte console behind `RD`/`WR` and the external interrupt line.

/// Console implementations (host stdio, in-memory buffers).
pub mod console;

/// Thread-safe external interrupt line.
pub mod interrupt;

pub use console::{BufferConsole, StdConsole};
pub use interrupt::InterruptLine;

pub use crate::soc::traits::Console;
