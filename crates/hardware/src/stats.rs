//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the simulator. It provides:
//! 1. **Throughput:** Steps executed, host time, and derived speed.
//! 2. **Instruction mix:** Retired counts by class (memory, ALU, flag, jump, call, I/O, nop).
//! 3. **Control flow:** Taken jumps, calls, returns, and call-stack evictions.
//! 4. **I/O:** Console bytes in and out, end-of-input reads, interrupts delivered.

use std::time::Instant;

use crate::isa::Opcode;

/// Simulation statistics structure.
///
/// Counters only ever increase between resets; `Simulator::reset` replaces
/// the whole structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total steps that executed an instruction.
    pub steps: u64,

    /// Count of data-movement instructions retired (`ST`, `STR`, `LD`, `LDR`, `LI`, `CP`).
    pub inst_memory: u64,
    /// Count of arithmetic, logic, and shift instructions retired.
    pub inst_alu: u64,
    /// Count of flag and program-pointer instructions retired (`CLC`, `CLI`, `CLN`, `LDFL`, `STFL`, `LDPR`).
    pub inst_flag: u64,
    /// Count of jump instructions retired, taken or not.
    pub inst_jump: u64,
    /// Count of `CALL` and `RET` instructions retired.
    pub inst_call: u64,
    /// Count of `RD` and `WR` instructions retired.
    pub inst_io: u64,
    /// Count of `NOOP` instructions retired.
    pub inst_nop: u64,

    /// Conditional and unconditional jumps that changed the program pointer.
    pub jumps_taken: u64,
    /// `CALL` instructions executed.
    pub calls: u64,
    /// `RET` instructions that popped an address.
    pub returns: u64,
    /// `RET` instructions executed on an empty stack.
    pub returns_empty: u64,
    /// Return addresses lost to call-stack overflow.
    pub stack_evictions: u64,

    /// Bytes emitted by `WR`.
    pub bytes_written: u64,
    /// Bytes consumed by `RD`.
    pub bytes_read: u64,
    /// `RD` instructions that hit end of input.
    pub eof_reads: u64,
    /// Interrupt requests latched into the flags.
    pub interrupts: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
            inst_memory: 0,
            inst_alu: 0,
            inst_flag: 0,
            inst_jump: 0,
            inst_call: 0,
            inst_io: 0,
            inst_nop: 0,
            jumps_taken: 0,
            calls: 0,
            returns: 0,
            returns_empty: 0,
            stack_evictions: 0,
            bytes_written: 0,
            bytes_read: 0,
            eof_reads: 0,
            interrupts: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "control", "io"];

impl SimStats {
    /// Counts one retired instruction in its class.
    pub const fn record_retired(&mut self, op: Opcode) {
        self.steps += 1;
        let counter = match op {
            Opcode::St | Opcode::Str | Opcode::Ld | Opcode::Ldr | Opcode::Li | Opcode::Cp => {
                &mut self.inst_memory
            }
            Opcode::Sub
            | Opcode::Add
            | Opcode::Subi
            | Opcode::Addi
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Not
            | Opcode::Shl
            | Opcode::Shr
            | Opcode::Andi
            | Opcode::Ori
            | Opcode::Xori => &mut self.inst_alu,
            Opcode::Clc
            | Opcode::Cli
            | Opcode::Cln
            | Opcode::Ldfl
            | Opcode::Stfl
            | Opcode::Ldpr => &mut self.inst_flag,
            Opcode::Jmp
            | Opcode::Jiz
            | Opcode::Jnz
            | Opcode::Jic
            | Opcode::Jnc
            | Opcode::Jii
            | Opcode::Jni => &mut self.inst_jump,
            Opcode::Call | Opcode::Ret => &mut self.inst_call,
            Opcode::Rd | Opcode::Wr => &mut self.inst_io,
            Opcode::Noop => &mut self.inst_nop,
        };
        *counter += 1;
    }

    /// Sum of all per-class retired counters.
    pub const fn instructions_retired(&self) -> u64 {
        self.inst_memory
            + self.inst_alu
            + self.inst_flag
            + self.inst_jump
            + self.inst_call
            + self.inst_io
            + self.inst_nop
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.steps.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;

        println!("\n==========================================================");
        println!("HVSIM SIMULATION STATISTICS");
        println!("==========================================================");
        if want("summary") {
            let ksteps = if seconds > 0.0 {
                (self.steps as f64 / seconds) / 1_000.0
            } else {
                0.0
            };
            println!("host_seconds             {seconds:.4} s");
            println!("sim_steps                {}", self.steps);
            println!("sim_speed                {ksteps:.2} kstep/s");
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            for (name, n) in [
                ("op.memory", self.inst_memory),
                ("op.alu", self.inst_alu),
                ("op.flag", self.inst_flag),
                ("op.jump", self.inst_jump),
                ("op.call", self.inst_call),
                ("op.io", self.inst_io),
                ("op.nop", self.inst_nop),
            ] {
                println!("  {name:<22} {n} ({:.2}%)", pct(n));
            }
            println!("----------------------------------------------------------");
        }
        if want("control") {
            println!("CONTROL FLOW");
            println!("  jumps.taken            {}", self.jumps_taken);
            println!("  calls                  {}", self.calls);
            println!("  returns                {}", self.returns);
            println!("  returns.empty_stack    {}", self.returns_empty);
            println!("  stack.evictions        {}", self.stack_evictions);
            println!("----------------------------------------------------------");
        }
        if want("io") {
            println!("CONSOLE AND INTERRUPTS");
            println!("  io.bytes_written       {}", self.bytes_written);
            println!("  io.bytes_read          {}", self.bytes_read);
            println!("  io.eof_reads           {}", self.eof_reads);
            println!("  interrupts             {}", self.interrupts);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
