//! Core processor implementation.
//!
//! This module contains the CPU: architectural state, the ALU, and the
//! fetch/decode/execute step.

/// Architectural state (registers, flags, call stack).
pub mod arch;

/// CPU core and the execution step.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, CpuState};
