//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit ALU used by the execute step. Register and
//! immediate forms of an instruction share one ALU operation; the CPU supplies
//! the second operand from `reg2` or from the data field.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add (carry out), Sub (sign-magnitude, negative out)
//! - [`logic`]:      And, Or, Xor, Not
//! - [`shifts`]:     Shl, Shr

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor, not).
pub mod logic;

/// Shift operations (shl, shr).
pub mod shifts;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a + b`, carry out when the sum exceeds 255.
    Add,
    /// `|a - b|`, negative out when `a < b`.
    Sub,
    /// `a & b`.
    And,
    /// `a | b`.
    Or,
    /// `a ^ b`.
    Xor,
    /// `!a`; `b` is ignored.
    Not,
    /// `a << 1`; `b` is ignored.
    Shl,
    /// `a >> 1`; `b` is ignored.
    Shr,
}

/// Result of an ALU operation.
///
/// A flag output of `None` means the operation leaves that flag untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluResult {
    /// 8-bit value written back to `reg1`.
    pub value: u8,
    /// New carry flag, for `Add` only.
    pub carry: Option<bool>,
    /// New negative flag, for `Sub` only.
    pub negative: Option<bool>,
}

impl AluResult {
    /// A result that touches no flags.
    #[inline]
    pub const fn value(value: u8) -> Self {
        Self {
            value,
            carry: None,
            negative: None,
        }
    }
}

/// Arithmetic Logic Unit for 8-bit operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (the value of `reg1`)
    /// * `b`  - Second operand (`reg2` value or immediate; ignored by unary ops)
    ///
    /// # Examples
    ///
    /// ```
    /// use hvsim_core::core::units::alu::{Alu, AluOp};
    ///
    /// let r = Alu::execute(AluOp::Add, 200, 100);
    /// assert_eq!(r.value, 44);
    /// assert_eq!(r.carry, Some(true));
    ///
    /// // Subtraction stores the magnitude, not the two's-complement wrap.
    /// let r = Alu::execute(AluOp::Sub, 3, 10);
    /// assert_eq!(r.value, 7);
    /// assert_eq!(r.negative, Some(true));
    ///
    /// let r = Alu::execute(AluOp::Shl, 0x81, 0);
    /// assert_eq!(r.value, 0x02);
    /// assert_eq!(r.carry, None);
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> AluResult {
        match op {
            AluOp::Add => {
                let (value, carry) = arithmetic::add(a, b);
                AluResult {
                    value,
                    carry: Some(carry),
                    negative: None,
                }
            }
            AluOp::Sub => {
                let (value, negative) = arithmetic::sub(a, b);
                AluResult {
                    value,
                    carry: None,
                    negative: Some(negative),
                }
            }
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Not => {
                AluResult::value(logic::execute(op, a, b))
            }
            AluOp::Shl | AluOp::Shr => AluResult::value(shifts::execute(op, a)),
        }
    }
}
