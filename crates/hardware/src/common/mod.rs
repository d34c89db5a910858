//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Memory sizes, instruction field layout, register and stack limits.
//! 2. **Error Handling:** Decode, load, configuration, and simulation error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for decoding, loading, configuration, and simulation.
pub mod error;

pub use constants::{CALL_STACK_DEPTH, DATAMEM_SIZE, NUM_REGS, PROGMEM_SIZE};
pub use error::{ConfigError, DecodeError, LoadError, SimError};
