//! Instruction Decoder.
//!
//! Turns a raw program-memory word into an [`Instruction`]. The opcode field
//! selects the operand shape; the remaining bits are then read according to
//! that shape. Words whose opcode field names no instruction are rejected.

use crate::common::error::DecodeError;
use crate::isa::instruction::{Instruction, InstructionBits, OperandShape};
use crate::isa::opcodes::Opcode;

/// Decodes a 16-bit instruction word.
///
/// Fields that the opcode's shape does not use are ignored, so any bit pattern
/// with a defined opcode decodes successfully.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownOpcode`] when the 6-bit opcode field is not
/// one of the defined opcodes.
///
/// # Examples
///
/// ```
/// use hvsim_core::isa::decode::decode;
/// use hvsim_core::isa::instruction::Operand;
/// use hvsim_core::isa::opcodes::Opcode;
///
/// // LI r1, 0x2A
/// let inst = decode(0x2A45).unwrap();
/// assert_eq!(inst.opcode, Opcode::Li);
/// assert_eq!(inst.reg1, 1);
/// assert_eq!(inst.operand, Operand::Data(0x2A));
/// ```
pub fn decode(word: u16) -> Result<Instruction, DecodeError> {
    let bits = word.opcode_bits();
    let opcode = Opcode::from_bits(bits).ok_or(DecodeError::UnknownOpcode { opcode: bits })?;

    let inst = match opcode.shape() {
        OperandShape::None => Instruction::none(opcode),
        OperandShape::Short => Instruction::short(opcode, word.reg1()),
        OperandShape::Dual => Instruction::dual(opcode, word.reg1(), word.reg2()),
        OperandShape::Long => Instruction::long(opcode, word.reg1(), word.data()),
        OperandShape::Data => Instruction::data(opcode, word.data()),
    };
    Ok(inst)
}
