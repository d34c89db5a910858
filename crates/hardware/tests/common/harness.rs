use crate::common::builder::ProgramBuilder;
use hvsim_core::Simulator;
use hvsim_core::config::Config;
use hvsim_core::core::arch::Flags;
use hvsim_core::core::{Cpu, CpuState};
use hvsim_core::isa::Instruction;
use hvsim_core::sim::ExitReason;
use hvsim_core::soc::System;
use hvsim_core::soc::devices::BufferConsole;
use hvsim_core::soc::memory::{DataMemory, ProgramMemory};
use tracing_subscriber::EnvFilter;

/// Step budget applied by `TestContext::new` so a broken program fails instead of hanging.
pub const TEST_MAX_STEPS: u64 = 10_000;

/// Installs a test-friendly log subscriber once per process (`RUST_LOG` controls it).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

pub struct TestContext {
    pub sim: Simulator,
    /// Shared handle to the simulator's console.
    pub console: BufferConsole,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.general.max_steps = Some(TEST_MAX_STEPS);
        Self::with_config(&config)
    }

    pub fn with_config(config: &Config) -> Self {
        init_tracing();

        let console = BufferConsole::new();
        let system = System::new(
            ProgramMemory::new(),
            DataMemory::new(),
            Box::new(console.clone()),
        );
        let sim = Simulator::new(system, config);
        Self { sim, console }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Load instructions into program memory starting at address 0.
    pub fn load_program(mut self, program: &[Instruction]) -> Self {
        self.sim.system.program = ProgramMemory::from_instructions(program).unwrap();
        self
    }

    pub fn with_program(self, builder: ProgramBuilder) -> Self {
        self.load_program(&builder.build())
    }

    /// Load raw words into program memory starting at address 0.
    pub fn with_words(mut self, words: &[u16]) -> Self {
        self.sim.system.program = ProgramMemory::from_words(words).unwrap();
        self
    }

    pub fn with_data(mut self, bytes: &[u8]) -> Self {
        self.sim.system.data = DataMemory::from_bytes(bytes).unwrap();
        self
    }

    pub fn with_input(self, bytes: &[u8]) -> Self {
        self.console.push_input(bytes);
        self
    }

    pub fn step(&mut self) -> CpuState {
        self.sim.step().unwrap()
    }

    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            let _ = self.step();
        }
    }

    pub fn run(&mut self) -> ExitReason {
        self.sim.run().unwrap()
    }

    pub fn reg(&self, idx: u8) -> u8 {
        self.sim.cpu.regs.read(idx)
    }

    pub fn set_reg(&mut self, idx: u8, val: u8) {
        self.sim.cpu.regs.write(idx, val);
    }

    pub fn flags(&self) -> Flags {
        self.sim.cpu.flags
    }

    pub fn pc(&self) -> u8 {
        self.sim.cpu.pc
    }

    pub fn state(&self) -> CpuState {
        self.sim.state()
    }

    pub fn data(&self, addr: u8) -> u8 {
        self.sim.system.data.read(addr)
    }

    pub fn output(&self) -> Vec<u8> {
        self.console.output()
    }
}
