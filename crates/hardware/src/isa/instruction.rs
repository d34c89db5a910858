//! Instruction encoding and decoding utilities.
//!
//! An instruction occupies one program-memory cell holding a 16-bit word:
//!
//! ```text
//!  15  14 13        8 7    6 5          0
//! +------+-----------+------+------------+
//! | reg2 |  unused   | reg1 |   opcode   |   dual shape
//! +------+-----------+------+------------+
//! |       data       | reg1 |   opcode   |   long / data shape
//! +------------------+------+------------+
//!      operand byte        header byte
//! ```
//!
//! The header byte is always opcode plus `reg1`. What the operand byte means
//! depends only on the opcode (see [`OperandShape`]); no bit in the word says so.

use std::fmt;

use crate::common::constants::{
    DATA_MASK, OPCODE_MASK, OPERAND_SHIFT, REG_MASK, REG1_SHIFT, REG2_SHIFT,
};
use crate::isa::opcodes::Opcode;

/// Trait for extracting instruction fields from encoded words.
///
/// Extraction is purely positional; whether a field is meaningful is decided by
/// the opcode's [`OperandShape`].
pub trait InstructionBits {
    /// Extracts the 6-bit opcode field (header bits 0-5).
    fn opcode_bits(&self) -> u8;

    /// Extracts the `reg1` field (header bits 6-7).
    fn reg1(&self) -> u8;

    /// Extracts the `reg2` field (operand bits 6-7).
    fn reg2(&self) -> u8;

    /// Extracts the whole operand byte as an 8-bit data field.
    fn data(&self) -> u8;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode_bits(&self) -> u8 {
        (self & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn reg1(&self) -> u8 {
        ((self >> REG1_SHIFT) as u8) & REG_MASK
    }

    #[inline(always)]
    fn reg2(&self) -> u8 {
        ((self >> REG2_SHIFT) as u8) & REG_MASK
    }

    #[inline(always)]
    fn data(&self) -> u8 {
        ((self >> OPERAND_SHIFT) & DATA_MASK) as u8
    }
}

/// How the operand byte of an instruction is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandShape {
    /// No operands; `reg1` and the operand byte are ignored.
    None,
    /// `reg1` only.
    Short,
    /// `reg1` and `reg2`.
    Dual,
    /// `reg1` and an 8-bit data field.
    Long,
    /// An 8-bit data field only; `reg1` is ignored.
    Data,
}

/// Decoded operand payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// No operand beyond `reg1`.
    None,
    /// Second register index (0-3).
    Reg2(u8),
    /// 8-bit immediate or address.
    Data(u8),
}

/// A decoded instruction.
///
/// For [`OperandShape::None`] and [`OperandShape::Data`] opcodes `reg1` is
/// normalised to zero so that decode and encode are exact inverses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Operation.
    pub opcode: Opcode,
    /// First register index (0-3).
    pub reg1: u8,
    /// Operand payload matching `opcode.shape()`.
    pub operand: Operand,
}

impl Instruction {
    /// Builds an instruction with no operands (`NOOP`, `CLC`, `CLI`, `CLN`, `RET`).
    pub const fn none(opcode: Opcode) -> Self {
        Self {
            opcode,
            reg1: 0,
            operand: Operand::None,
        }
    }

    /// Builds a single-register instruction.
    pub const fn short(opcode: Opcode, reg1: u8) -> Self {
        Self {
            opcode,
            reg1: reg1 & REG_MASK,
            operand: Operand::None,
        }
    }

    /// Builds a register-register instruction.
    pub const fn dual(opcode: Opcode, reg1: u8, reg2: u8) -> Self {
        Self {
            opcode,
            reg1: reg1 & REG_MASK,
            operand: Operand::Reg2(reg2 & REG_MASK),
        }
    }

    /// Builds a register-immediate instruction.
    pub const fn long(opcode: Opcode, reg1: u8, data: u8) -> Self {
        Self {
            opcode,
            reg1: reg1 & REG_MASK,
            operand: Operand::Data(data),
        }
    }

    /// Builds an address-only instruction.
    pub const fn data(opcode: Opcode, data: u8) -> Self {
        Self {
            opcode,
            reg1: 0,
            operand: Operand::Data(data),
        }
    }

    /// Returns the second register index, or 0 when the operand is not a register.
    #[inline]
    pub const fn reg2(&self) -> u8 {
        match self.operand {
            Operand::Reg2(r) => r,
            _ => 0,
        }
    }

    /// Returns the data field, or 0 when the operand carries no data.
    #[inline]
    pub const fn imm(&self) -> u8 {
        match self.operand {
            Operand::Data(d) => d,
            _ => 0,
        }
    }

    /// Encodes the instruction into a program-memory word.
    pub const fn encode(&self) -> u16 {
        let header = (self.opcode.bits() as u16 & OPCODE_MASK)
            | (((self.reg1 & REG_MASK) as u16) << REG1_SHIFT);
        let operand = match self.operand {
            Operand::None => 0,
            Operand::Reg2(r) => ((r & REG_MASK) as u16) << REG2_SHIFT,
            Operand::Data(d) => (d as u16) << OPERAND_SHIFT,
        };
        header | operand
    }

    /// Returns the two image bytes of the encoded word (header first).
    pub const fn to_bytes(&self) -> [u8; 2] {
        self.encode().to_le_bytes()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.opcode.mnemonic();
        match self.opcode.shape() {
            OperandShape::None => f.write_str(name),
            OperandShape::Short => write!(f, "{name} r{}", self.reg1),
            OperandShape::Dual => write!(f, "{name} r{}, r{}", self.reg1, self.reg2()),
            OperandShape::Long => write!(f, "{name} r{}, {:#04x}", self.reg1, self.imm()),
            OperandShape::Data => write!(f, "{name} {:#04x}", self.imm()),
        }
    }
}
