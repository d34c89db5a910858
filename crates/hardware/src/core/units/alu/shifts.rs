//! ALU shift operations.
//!
//! Logical shift left and right by exactly one bit. The bit shifted out is
//! discarded (there is no carry-through), and zeros are shifted in.

use super::AluOp;

/// Executes a shift operation.
///
/// Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u8) -> u8 {
    match op {
        AluOp::Shl => a << 1,
        AluOp::Shr => a >> 1,
        _ => 0,
    }
}
