//! Execution units and functional components.
//!
//! The CPU has a single functional unit, the 8-bit ALU. Control flow and memory
//! access are simple enough to live in the execute step itself.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
