//! Simulation driver and image loading.
//!
//! Provides the loader that turns files into memories and the `Simulator`
//! that runs a CPU against them.

/// Program and data image loading.
pub mod loader;

/// Top-level simulator (CPU + system).
pub mod simulator;

pub use simulator::{ExitReason, Simulator};
