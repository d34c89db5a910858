//! Disassembler tests.

use crate::common::builder::ProgramBuilder;
use hvsim_core::isa::disasm::{disassemble, disassemble_program};
use hvsim_core::isa::{Instruction, Opcode};
use hvsim_core::soc::memory::ProgramMemory;
use rstest::rstest;

#[rstest]
#[case(Instruction::none(Opcode::Noop), "NOOP")]
#[case(Instruction::none(Opcode::Ret), "RET")]
#[case(Instruction::short(Opcode::Not, 2), "NOT r2")]
#[case(Instruction::short(Opcode::Wr, 0), "WR r0")]
#[case(Instruction::dual(Opcode::Add, 0, 1), "ADD r0, r1")]
#[case(Instruction::dual(Opcode::Str, 0, 2), "STR r0, r2")]
#[case(Instruction::long(Opcode::Addi, 1, 5), "ADDI r1, 0x05")]
#[case(Instruction::long(Opcode::Jiz, 3, 0xFF), "JIZ r3, 0xff")]
#[case(Instruction::data(Opcode::Jmp, 0x10), "JMP 0x10")]
#[case(Instruction::data(Opcode::Call, 0), "CALL 0x00")]
fn test_instruction_text(#[case] inst: Instruction, #[case] text: &str) {
    assert_eq!(inst.to_string(), text);
    assert_eq!(disassemble(inst.encode()), text);
}

#[test]
fn test_unknown_word_disassembles_as_data() {
    assert_eq!(disassemble(0x003F), ".word 0x003f");
    assert_eq!(disassemble(0xAB37), ".word 0xab37");
}

#[test]
fn test_every_mnemonic_is_upper_case() {
    for op in Opcode::ALL {
        let name = op.mnemonic();
        assert!(!name.is_empty());
        assert_eq!(name, name.to_ascii_uppercase());
    }
}

#[test]
fn test_program_listing_trims_trailing_noops() {
    let prog = ProgramBuilder::new().li(0, 5).wr(0).build();
    let mem = ProgramMemory::from_instructions(&prog).unwrap();
    let rows = disassemble_program(&mem);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], (0, prog[0].encode(), "LI r0, 0x05".to_string()));
    assert_eq!(rows[1], (1, prog[1].encode(), "WR r0".to_string()));
}

#[test]
fn test_program_listing_keeps_inner_noops() {
    let prog = ProgramBuilder::new().noop().noop().jmp(0).build();
    let mem = ProgramMemory::from_instructions(&prog).unwrap();
    let text: Vec<String> = disassemble_program(&mem)
        .into_iter()
        .map(|(_, _, text)| text)
        .collect();
    assert_eq!(text, ["NOOP", "NOOP", "JMP 0x00"]);
}

#[test]
fn test_empty_program_lists_nothing() {
    assert!(disassemble_program(&ProgramMemory::new()).is_empty());
}

#[test]
fn test_listing_reaches_last_cell() {
    let mut mem = ProgramMemory::new();
    mem.write(255, Instruction::none(Opcode::Ret).encode());
    let rows = disassemble_program(&mem);
    assert_eq!(rows.len(), 256);
    assert_eq!(rows[255].0, 255);
    assert_eq!(rows[255].2, "RET");
}
