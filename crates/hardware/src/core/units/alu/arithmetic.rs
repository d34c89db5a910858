//! ALU arithmetic operations.
//!
//! Both operations widen to a signed 16-bit domain first, exactly as the
//! hardware computes them, and then narrow back to 8 bits:
//!
//! * `add` keeps the low byte of the sum and reports carry when the sum is
//!   above 255.
//! * `sub` stores the **magnitude** of the difference and reports negative
//!   when the difference is below zero. `3 - 10` yields `7` with negative set,
//!   never `249`.

/// Adds two bytes.
///
/// # Returns
///
/// `(sum mod 256, sum > 255)`.
#[inline]
pub const fn add(a: u8, b: u8) -> (u8, bool) {
    let sum = a as i16 + b as i16;
    (sum as u8, sum > 0xFF)
}

/// Subtracts `b` from `a` in sign-magnitude form.
///
/// # Returns
///
/// `(|a - b|, a - b < 0)`. The magnitude is at most 255, so it always fits.
#[inline]
pub const fn sub(a: u8, b: u8) -> (u8, bool) {
    let diff = a as i16 - b as i16;
    (diff.unsigned_abs() as u8, diff < 0)
}
