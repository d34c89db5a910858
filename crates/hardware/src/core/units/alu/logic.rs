//! ALU logical operations.
//!
//! Bitwise AND, OR, XOR, and complement. None of them affect flags.

use super::AluOp;

/// Executes a logical operation.
///
/// Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Not => !a,
        _ => 0,
    }
}
