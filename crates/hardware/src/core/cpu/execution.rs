//! Main Execution Step.
//!
//! This module implements one CPU step. It performs the following:
//! 1. **Halt Check:** A halted CPU does nothing.
//! 2. **Interrupt Sampling:** A raised external line is latched into the interrupt flag.
//! 3. **Fetch and Decode:** Reads the word at the program pointer; unknown opcodes abort the step.
//! 4. **Execute:** One exhaustive match over the opcode set.
//! 5. **Advance:** The program pointer takes the jump target or moves to the next word.
//!
//! Flag updates are limited to the ones listed per opcode: `ADD`/`ADDI` write
//! carry, `SUB`/`SUBI` write negative, `CL*` and `STFL` write the flags
//! directly, and the interrupt line sets the interrupt flag.

use super::{Cpu, CpuState};
use crate::common::error::SimError;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::{Instruction, Opcode, decode};
use crate::soc::System;

impl Cpu {
    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// The run state after the step. A halted CPU returns `Halted` without
    /// fetching.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`] when the word at the program pointer has an
    /// unknown opcode. The program pointer is left on the faulting word.
    pub fn step(&mut self, system: &mut System) -> Result<CpuState, SimError> {
        if self.flags.halt() {
            return Ok(CpuState::Halted);
        }

        if system.interrupt.take() {
            self.flags.set_interrupt(true);
            self.stats.interrupts += 1;
            tracing::debug!(pc = self.pc, "external interrupt latched");
        }

        let pc = self.pc;
        let word = system.program.read(pc);
        let inst = decode(word).map_err(|source| SimError::Decode { pc, word, source })?;

        if self.trace {
            tracing::trace!("{pc:#04x}: {word:#06x}  {inst}");
        }

        let target = self.execute(inst, system);
        self.pc = target.unwrap_or_else(|| pc.wrapping_add(1));
        self.stats.record_retired(inst.opcode);

        let state = self.state();
        if state == CpuState::Halted {
            system.console.flush();
            tracing::debug!(pc, steps = self.stats.steps, "cpu halted");
        }
        Ok(state)
    }

    /// Executes a decoded instruction against the CPU state and `system`.
    ///
    /// The instruction is taken to sit at the current program pointer; `LDPR`
    /// and `CALL` read it. The program pointer itself is not advanced here.
    ///
    /// # Returns
    ///
    /// `Some(target)` when control transfers, `None` to fall through.
    pub fn execute(&mut self, inst: Instruction, system: &mut System) -> Option<u8> {
        let r1 = inst.reg1;
        let a = self.regs.read(r1);
        let b = self.regs.read(inst.reg2());
        let d = inst.imm();

        match inst.opcode {
            Opcode::Noop => {}

            Opcode::St => system.data.write(d, a),
            Opcode::Str => system.data.write(a, b),
            Opcode::Ld => self.regs.write(r1, system.data.read(d)),
            Opcode::Ldr => self.regs.write(r1, system.data.read(b)),
            Opcode::Li => self.regs.write(r1, d),
            Opcode::Cp => self.regs.write(r1, b),

            Opcode::Sub => self.alu(AluOp::Sub, r1, b),
            Opcode::Add => self.alu(AluOp::Add, r1, b),
            Opcode::Subi => self.alu(AluOp::Sub, r1, d),
            Opcode::Addi => self.alu(AluOp::Add, r1, d),
            Opcode::And => self.alu(AluOp::And, r1, b),
            Opcode::Or => self.alu(AluOp::Or, r1, b),
            Opcode::Xor => self.alu(AluOp::Xor, r1, b),
            Opcode::Not => self.alu(AluOp::Not, r1, 0),
            Opcode::Shl => self.alu(AluOp::Shl, r1, 0),
            Opcode::Shr => self.alu(AluOp::Shr, r1, 0),
            Opcode::Andi => self.alu(AluOp::And, r1, d),
            Opcode::Ori => self.alu(AluOp::Or, r1, d),
            Opcode::Xori => self.alu(AluOp::Xor, r1, d),

            Opcode::Clc => self.flags.set_carry(false),
            Opcode::Cli => self.flags.set_interrupt(false),
            Opcode::Cln => self.flags.set_negative(false),

            Opcode::Jmp => return self.branch(true, d),
            Opcode::Jiz => return self.branch(a == 0, d),
            Opcode::Jnz => return self.branch(a != 0, d),
            Opcode::Jic => return self.branch(self.flags.carry(), d),
            Opcode::Jnc => return self.branch(!self.flags.carry(), d),
            Opcode::Jii => return self.branch(self.flags.interrupt(), d),
            Opcode::Jni => return self.branch(!self.flags.interrupt(), d),

            // The pushed address is the CALL itself, so a later RET lands on
            // the CALL again.
            Opcode::Call => {
                self.stats.calls += 1;
                if let Some(evicted) = self.call_stack.push(self.pc) {
                    self.stats.stack_evictions += 1;
                    tracing::debug!(evicted, "call stack full; oldest return address dropped");
                }
                return Some(d);
            }
            Opcode::Ret => match self.call_stack.pop() {
                Some(addr) => {
                    self.stats.returns += 1;
                    return Some(addr);
                }
                None => {
                    self.stats.returns_empty += 1;
                    tracing::debug!(pc = self.pc, "RET with empty call stack");
                }
            },

            Opcode::Ldpr => self.regs.write(r1, self.pc),
            Opcode::Ldfl => self.regs.write(r1, self.flags.bits()),
            Opcode::Stfl => self.flags.set_bits(a),

            Opcode::Rd => {
                let byte = system.console.read_byte();
                if byte.is_some() {
                    self.stats.bytes_read += 1;
                } else {
                    self.stats.eof_reads += 1;
                }
                self.regs.write(r1, byte.unwrap_or(self.eof_value));
            }
            Opcode::Wr => {
                system.console.write_byte(a);
                self.stats.bytes_written += 1;
            }
        }
        None
    }

    /// Runs `op` on `reg` and `operand`, writing back the value and any flag outputs.
    fn alu(&mut self, op: AluOp, reg: u8, operand: u8) {
        let res = Alu::execute(op, self.regs.read(reg), operand);
        self.regs.write(reg, res.value);
        if let Some(carry) = res.carry {
            self.flags.set_carry(carry);
        }
        if let Some(negative) = res.negative {
            self.flags.set_negative(negative);
        }
    }

    /// Resolves a jump: `Some(target)` when `taken`.
    const fn branch(&mut self, taken: bool, target: u8) -> Option<u8> {
        if taken {
            self.stats.jumps_taken += 1;
            Some(target)
        } else {
            None
        }
    }
}
