//! Top-level `System` type.
//!
//! The system groups everything the CPU touches outside its own registers:
//! 1. **Memories:** Separate program and data address spaces.
//! 2. **Console:** The byte device behind `RD` and `WR`.
//! 3. **Interrupt line:** The externally raised interrupt request.

use crate::soc::devices::{Console, InterruptLine, StdConsole};
use crate::soc::memory::{DataMemory, ProgramMemory};

/// Memories and devices attached to the CPU.
pub struct System {
    /// Instruction memory (256 words).
    pub program: ProgramMemory,
    /// Data memory (256 bytes).
    pub data: DataMemory,
    /// Console used by `RD` and `WR` (boxed for dynamic dispatch).
    pub console: Box<dyn Console>,
    /// External interrupt line, sampled once per step.
    pub interrupt: InterruptLine,
}

impl System {
    /// Builds a system around the given memories and console.
    pub fn new(program: ProgramMemory, data: DataMemory, console: Box<dyn Console>) -> Self {
        Self {
            program,
            data,
            console,
            interrupt: InterruptLine::new(),
        }
    }

    /// Builds a system attached to the host's standard streams.
    pub fn with_stdio(program: ProgramMemory, data: DataMemory, to_stderr: bool) -> Self {
        Self::new(program, data, Box::new(StdConsole::new(to_stderr)))
    }
}

impl std::fmt::Debug for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("System")
            .field("program", &self.program)
            .field("data", &self.data)
            .field("console", &self.console.name())
            .field("interrupt", &self.interrupt.is_raised())
            .finish()
    }
}
