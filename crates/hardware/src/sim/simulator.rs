//! Simulator: owns the CPU and the system side-by-side.
//!
//! The CPU borrows the system for each step, so neither needs to hold the
//! other.

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::{Cpu, CpuState};
use crate::soc::System;
use crate::soc::devices::InterruptLine;
use crate::soc::memory::{DataMemory, ProgramMemory};
use crate::stats::SimStats;

/// Why `run` returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExitReason {
    /// The program set the halt flag.
    Halted,
    /// The configured step budget ran out first.
    StepLimit,
}

/// Top-level simulator: CPU architectural state + memories and devices.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, flags, call stack, stats).
    pub cpu: Cpu,
    /// Memories, console, and interrupt line.
    pub system: System,
    /// Step budget for each `run` call.
    max_steps: Option<u64>,
}

impl Simulator {
    /// Creates a new simulator with the given system and configuration.
    pub fn new(system: System, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            system,
            max_steps: config.general.max_steps,
        }
    }

    /// Creates a simulator attached to the host console.
    ///
    /// Output goes to stdout, or stderr when `io.to_stderr` is set.
    pub fn with_stdio(program: ProgramMemory, data: DataMemory, config: &Config) -> Self {
        Self::new(
            System::with_stdio(program, data, config.io.to_stderr),
            config,
        )
    }

    /// Executes one instruction. See [`Cpu::step`].
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`] on an unknown opcode.
    pub fn step(&mut self) -> Result<CpuState, SimError> {
        self.cpu.step(&mut self.system)
    }

    /// Steps until the CPU halts or the step budget runs out.
    ///
    /// The budget counts steps taken by this call. An already halted CPU
    /// returns `Halted` immediately.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`] on an unknown opcode; the CPU state is left
    /// as it was before the faulting fetch.
    pub fn run(&mut self) -> Result<ExitReason, SimError> {
        let start = self.cpu.stats.steps;
        while self.cpu.state() == CpuState::Running {
            if self
                .max_steps
                .is_some_and(|max| self.cpu.stats.steps - start >= max)
            {
                self.system.console.flush();
                tracing::debug!(pc = self.cpu.pc, "step limit reached");
                return Ok(ExitReason::StepLimit);
            }
            if self.step()? == CpuState::Halted {
                break;
            }
        }
        Ok(ExitReason::Halted)
    }

    /// Restarts the machine: CPU back to reset state, pending interrupt
    /// dropped, statistics cleared. Memories are untouched.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.system.interrupt.clear();
    }

    /// Returns a handle that raises this simulator's interrupt line.
    pub fn interrupt_line(&self) -> InterruptLine {
        self.system.interrupt.clone()
    }

    /// Execution statistics since the last reset.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Current run state.
    pub const fn state(&self) -> CpuState {
        self.cpu.state()
    }
}
