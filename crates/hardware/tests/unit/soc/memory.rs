//! # Memory Tests
//!
//! Image conversion and addressing for program and data memory.

use hvsim_core::common::LoadError;
use hvsim_core::isa::{Instruction, Opcode};
use hvsim_core::soc::memory::{DataMemory, ProgramMemory};
use pretty_assertions::assert_eq;

#[test]
fn test_program_memory_starts_as_noops() {
    let mem = ProgramMemory::new();
    assert!(mem.words().iter().all(|&w| w == 0));
    assert_eq!(mem, ProgramMemory::default());
}

#[test]
fn test_program_bytes_are_little_endian_pairs() {
    let mem = ProgramMemory::from_bytes(&[0x45, 0x2A, 0x00, 0x00, 0x3A, 0x00]).unwrap();
    assert_eq!(mem.read(0), 0x2A45);
    assert_eq!(mem.read(1), 0);
    assert_eq!(mem.read(2), 0x003A);
    assert_eq!(mem.read(3), 0);
}

#[test]
fn test_odd_trailing_byte_becomes_header() {
    let mem = ProgramMemory::from_bytes(&[0x01, 0x02, 0x2B]).unwrap();
    assert_eq!(mem.read(0), 0x0201);
    assert_eq!(mem.read(1), 0x002B);
}

#[test]
fn test_full_program_image_fills_every_cell() {
    let bytes: Vec<u8> = (0..512u32).map(|i| (i % 251) as u8).collect();
    let mem = ProgramMemory::from_bytes(&bytes).unwrap();
    assert_eq!(mem.to_bytes(), bytes);
}

#[test]
fn test_oversized_program_image_is_rejected() {
    let err = ProgramMemory::from_bytes(&[0; 513]).unwrap_err();
    assert!(matches!(
        err,
        LoadError::TooLarge {
            size: 513,
            capacity: 512,
            ..
        }
    ));
}

#[test]
fn test_from_words_and_instructions_agree() {
    let program = [
        Instruction::long(Opcode::Li, 1, 0x10),
        Instruction::dual(Opcode::Add, 1, 2),
        Instruction::data(Opcode::Jmp, 0),
    ];
    let words: Vec<u16> = program.iter().map(Instruction::encode).collect();
    assert_eq!(
        ProgramMemory::from_instructions(&program).unwrap(),
        ProgramMemory::from_words(&words).unwrap()
    );
    assert!(ProgramMemory::from_words(&[0; 257]).is_err());
}

#[test]
fn test_program_write_and_read() {
    let mut mem = ProgramMemory::new();
    mem.write(0xFF, 0xBEEF);
    assert_eq!(mem.read(0xFF), 0xBEEF);
    assert_eq!(&mem.to_bytes()[510..], &[0xEF, 0xBE]);
}

#[test]
fn test_data_memory_image_and_padding() {
    let mem = DataMemory::from_bytes(&[1, 2, 3]).unwrap();
    assert_eq!(mem.read(0), 1);
    assert_eq!(mem.read(2), 3);
    assert_eq!(mem.read(3), 0);
    assert_eq!(mem.read(0xFF), 0);
    assert_eq!(mem.as_bytes().len(), 256);
}

#[test]
fn test_data_memory_limits() {
    assert!(DataMemory::from_bytes(&[0xAB; 256]).is_ok());
    let err = DataMemory::from_bytes(&[0; 257]).unwrap_err();
    assert!(matches!(err, LoadError::TooLarge { capacity: 256, .. }));
}

#[test]
fn test_data_memory_every_address() {
    let mut mem = DataMemory::new();
    for addr in 0..=u8::MAX {
        mem.write(addr, addr.wrapping_mul(3));
    }
    for addr in 0..=u8::MAX {
        assert_eq!(mem.read(addr), addr.wrapping_mul(3));
    }
}
