//! Architectural state components.
//!
//! This module contains the programmer-visible state of the CPU.
//! It includes the following modules:
//! 1. **GPRs:** The four 8-bit general-purpose registers.
//! 2. **Flags:** The packed status byte (carry, interrupt, negative, halt).
//! 3. **Call Stack:** The bounded hardware return-address stack.

/// Bounded hardware call stack with oldest-entry eviction.
pub mod call_stack;

/// Packed flags (status) register.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use call_stack::CallStack;
pub use flags::Flags;
pub use gpr::Gpr;
