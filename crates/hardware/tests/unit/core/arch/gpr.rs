//! # General-Purpose Register Tests
//!
//! Tests for the four-entry 8-bit register file.

use hvsim_core::core::arch::gpr::Gpr;

#[test]
fn test_gpr_new_initializes_to_zero() {
    let gpr = Gpr::new();
    for i in 0..4 {
        assert_eq!(gpr.read(i), 0);
    }
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for i in 0..4u8 {
        gpr.write(i, 0x10 + i);
    }
    assert_eq!(gpr.snapshot(), [0x10, 0x11, 0x12, 0x13]);
}

#[test]
fn test_gpr_registers_are_independent() {
    let mut gpr = Gpr::new();
    gpr.write(2, 0xFF);
    assert_eq!(gpr.read(0), 0);
    assert_eq!(gpr.read(1), 0);
    assert_eq!(gpr.read(2), 0xFF);
    assert_eq!(gpr.read(3), 0);
}

#[test]
fn test_gpr_index_is_masked_to_two_bits() {
    let mut gpr = Gpr::new();
    gpr.write(5, 0x42);
    assert_eq!(gpr.read(1), 0x42);
    assert_eq!(gpr.read(0xFD), 0x42);
}

#[test]
fn test_gpr_display() {
    let mut gpr = Gpr::new();
    gpr.write(1, 0x2A);
    gpr.write(3, 0xFF);
    assert_eq!(gpr.to_string(), "r0=0x00 r1=0x2a r2=0x00 r3=0xff");
}
