//! Harvard-architecture 8-bit CPU simulator library.
//!
//! This crate implements a step-accurate simulator for a small 8-bit CPU with
//! the following:
//! 1. **Core:** Four 8-bit registers, a packed flags byte, an 8-bit program pointer, and a 16-entry call stack.
//! 2. **Memory:** Separate 256-word program memory and 256-byte data memory.
//! 3. **ISA:** 37 instructions in five operand shapes, with decoder and disassembler.
//! 4. **Devices:** A byte console for `RD`/`WR` and a thread-safe external interrupt line.
//! 5. **Simulation:** Image loader, configuration, and statistics collection.

/// Common types and constants (sizes, field layout, errors).
pub mod common;
/// Simulator configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// CPU core (arch state, ALU, execution step).
pub mod core;
/// Instruction set (opcodes, instruction word, decode, disassembly).
pub mod isa;
/// Image loader and the top-level simulator.
pub mod sim;
/// Memories and devices (program/data memory, console, interrupt line).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, flags, call stack, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; owns a `Cpu` and a `System`.
pub use crate::sim::Simulator;
/// Memories and devices; construct with `System::new`.
pub use crate::soc::System;
