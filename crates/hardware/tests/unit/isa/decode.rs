//! # Instruction Decode Tests
//!
//! Field extraction per operand shape, rejection of undefined opcodes, and
//! encode/decode inverses.

use hvsim_core::common::DecodeError;
use hvsim_core::isa::decode::decode;
use hvsim_core::isa::instruction::{Instruction, InstructionBits, Operand, OperandShape};
use hvsim_core::isa::opcodes::{self, Opcode};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_every_defined_opcode_decodes() {
    for op in Opcode::ALL {
        let inst = decode(u16::from(op.bits())).unwrap();
        assert_eq!(inst.opcode, op, "opcode {:#o}", op.bits());
    }
}

#[test]
fn test_undefined_opcodes_are_rejected() {
    let mut rejected = 0;
    for bits in 0u8..64 {
        if Opcode::from_bits(bits).is_some() {
            continue;
        }
        rejected += 1;
        assert_eq!(
            decode(u16::from(bits)),
            Err(DecodeError::UnknownOpcode { opcode: bits })
        );
    }
    assert_eq!(rejected, 64 - Opcode::ALL.len());
}

#[test]
fn test_opcode_values_match_table() {
    assert_eq!(Opcode::Noop.bits(), opcodes::OP_NOOP);
    assert_eq!(Opcode::Li.bits(), 0o05);
    assert_eq!(Opcode::Sub.bits(), 0o10);
    assert_eq!(Opcode::Jmp.bits(), 0o40);
    assert_eq!(Opcode::Rd.bits(), 0o71);
    assert_eq!(Opcode::Wr.bits(), 0o72);
}

#[test]
fn test_field_extraction() {
    // ADD r1, r2 with junk in the unused operand bits 8-13.
    let word: u16 = 0x8000 | 0x3F00 | 0x40 | u16::from(opcodes::OP_ADD);
    assert_eq!(word.opcode_bits(), opcodes::OP_ADD);
    assert_eq!(word.reg1(), 1);
    assert_eq!(word.reg2(), 2);
    assert_eq!(word.data(), 0xBF);
}

#[test]
fn test_decode_short_ignores_operand_byte() {
    let word: u16 = 0xFF00 | 0xC0 | u16::from(opcodes::OP_NOT);
    assert_eq!(decode(word).unwrap(), Instruction::short(Opcode::Not, 3));
}

#[test]
fn test_decode_dual_ignores_low_operand_bits() {
    let word: u16 = 0x8000 | 0x3F00 | 0x40 | u16::from(opcodes::OP_ADD);
    let inst = decode(word).unwrap();
    assert_eq!(inst, Instruction::dual(Opcode::Add, 1, 2));
    assert_eq!(inst.operand, Operand::Reg2(2));
}

#[test]
fn test_decode_long_reads_register_and_data() {
    // LI r1, 0x2A
    let inst = decode(0x2A45).unwrap();
    assert_eq!(inst.opcode, Opcode::Li);
    assert_eq!(inst.reg1, 1);
    assert_eq!(inst.imm(), 0x2A);
}

#[test]
fn test_decode_data_shape_drops_reg1() {
    // JMP 0x10 with both reg1 bits set.
    let word: u16 = 0x1000 | 0xC0 | u16::from(opcodes::OP_JMP);
    let inst = decode(word).unwrap();
    assert_eq!(inst, Instruction::data(Opcode::Jmp, 0x10));
    assert_eq!(inst.reg1, 0);
}

#[test]
fn test_decode_none_shape_ignores_everything_else() {
    let word: u16 = 0x1200 | 0xC0 | u16::from(opcodes::OP_RET);
    assert_eq!(decode(word).unwrap(), Instruction::none(Opcode::Ret));
}

#[test]
fn test_all_zero_word_is_noop() {
    assert_eq!(decode(0).unwrap(), Instruction::none(Opcode::Noop));
}

#[rstest]
#[case::none(Instruction::none(Opcode::Clc), OperandShape::None)]
#[case::short(Instruction::short(Opcode::Wr, 2), OperandShape::Short)]
#[case::dual(Instruction::dual(Opcode::Str, 3, 1), OperandShape::Dual)]
#[case::long(Instruction::long(Opcode::Addi, 1, 0xFE), OperandShape::Long)]
#[case::data(Instruction::data(Opcode::Call, 0x80), OperandShape::Data)]
fn test_encode_decode_inverse_per_shape(#[case] inst: Instruction, #[case] shape: OperandShape) {
    assert_eq!(inst.opcode.shape(), shape);
    let word = inst.encode();
    assert_eq!(decode(word).unwrap(), inst);
    assert_eq!(decode(word).unwrap().encode(), word);
}

#[test]
fn test_to_bytes_is_header_then_operand() {
    let inst = Instruction::long(Opcode::Li, 1, 0x2A);
    assert_eq!(inst.to_bytes(), [0x45, 0x2A]);
}

#[test]
fn test_constructors_mask_register_indices() {
    let inst = Instruction::dual(Opcode::Cp, 5, 6);
    assert_eq!(inst.reg1, 1);
    assert_eq!(inst.reg2(), 2);
}
