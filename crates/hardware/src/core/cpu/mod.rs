//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the complete
//! architectural state of the processor:
//! 1. **Registers:** Four 8-bit general-purpose registers.
//! 2. **Flags:** The packed carry/interrupt/negative/halt/low-high byte.
//! 3. **Control:** The 8-bit program pointer and the 16-entry call stack.
//! 4. **Observability:** Instruction tracing and execution statistics.
//!
//! Memories and devices live in [`System`](crate::soc::System); the CPU borrows
//! it for each step.

/// Fetch, decode, and execute.
pub mod execution;

use crate::config::Config;
use crate::core::arch::{CallStack, Flags, Gpr};
use crate::stats::SimStats;

/// Run state derived from the halt flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CpuState {
    /// The halt flag is clear; the next step will execute an instruction.
    Running,
    /// The halt flag is set; steps do nothing until reset.
    Halted,
}

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Flags byte.
    pub flags: Flags,
    /// Return-address stack for `CALL`/`RET`.
    pub call_stack: CallStack,
    /// Program Pointer.
    pub pc: u8,

    /// Enable instruction tracing.
    pub trace: bool,
    /// Value stored by `RD` when the console has no more input.
    pub eof_value: u8,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU in its reset state.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the tracing switch and the end-of-input sentinel.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            flags: Flags::new(),
            call_stack: CallStack::new(),
            pc: 0,
            trace: config.general.trace_instructions,
            eof_value: config.io.eof_value,
            stats: SimStats::default(),
        }
    }

    /// Returns `Halted` when the halt flag is set, `Running` otherwise.
    #[inline]
    pub const fn state(&self) -> CpuState {
        if self.flags.halt() {
            CpuState::Halted
        } else {
            CpuState::Running
        }
    }

    /// Returns the CPU to its reset state.
    ///
    /// Registers, flags, call stack, and program pointer are zeroed and
    /// statistics are cleared. Configuration-derived settings are kept.
    pub fn reset(&mut self) {
        self.regs = Gpr::new();
        self.flags = Flags::new();
        self.call_stack.clear();
        self.pc = 0;
        self.stats = SimStats::default();
        tracing::debug!("cpu reset");
    }

    /// Dumps the architectural state to stderr.
    pub fn dump_state(&self) {
        eprintln!("pc={:#04x} flags={} {}", self.pc, self.flags, self.regs);
        let stack: Vec<String> = self
            .call_stack
            .iter()
            .map(|addr| format!("{addr:#04x}"))
            .collect();
        eprintln!("call stack [{}]: {}", self.call_stack.len(), stack.join(" "));
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
