//! Packed Flags Register.
//!
//! The status register is a single byte whose bits are addressed individually by
//! dedicated opcodes (`CLC`, `CLI`, `CLN`, the conditional jumps) and as a whole
//! by `LDFL`/`STFL`. Reserved bits carry no meaning but survive a bulk
//! load/store unchanged.
//!
//! | Bit | Name        |
//! |-----|-------------|
//! | 0   | carry       |
//! | 1   | interrupt   |
//! | 2   | negative    |
//! | 3-5 | reserved    |
//! | 6   | halt        |
//! | 7   | `low_high`  |

use std::fmt;

/// Carry: set when an `ADD`/`ADDI` sum exceeds 255.
pub const FLAG_CARRY: u8 = 1 << 0;
/// Interrupt: raised by the interrupt line or by software.
pub const FLAG_INTERRUPT: u8 = 1 << 1;
/// Negative: set when a `SUB`/`SUBI` difference is below zero.
pub const FLAG_NEGATIVE: u8 = 1 << 2;
/// Reserved bits 3-5.
pub const FLAG_RESERVED: u8 = 0b0011_1000;
/// Halt: stops the execution loop once set.
pub const FLAG_HALT: u8 = 1 << 6;
/// Reserved bit 7; preserved, never interpreted.
pub const FLAG_LOW_HIGH: u8 = 1 << 7;

/// The packed flags byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    /// Creates a flags register with every bit clear.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a flags register from a packed byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the packed byte.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Replaces the packed byte (bulk store).
    #[inline]
    pub const fn set_bits(&mut self, bits: u8) {
        self.0 = bits;
    }

    #[inline]
    const fn get(self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    #[inline]
    const fn assign(&mut self, mask: u8, on: bool) {
        if on {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }

    /// Returns the carry flag.
    pub const fn carry(self) -> bool {
        self.get(FLAG_CARRY)
    }

    /// Sets or clears the carry flag.
    pub const fn set_carry(&mut self, on: bool) {
        self.assign(FLAG_CARRY, on);
    }

    /// Returns the interrupt flag.
    pub const fn interrupt(self) -> bool {
        self.get(FLAG_INTERRUPT)
    }

    /// Sets or clears the interrupt flag.
    pub const fn set_interrupt(&mut self, on: bool) {
        self.assign(FLAG_INTERRUPT, on);
    }

    /// Returns the negative flag.
    pub const fn negative(self) -> bool {
        self.get(FLAG_NEGATIVE)
    }

    /// Sets or clears the negative flag.
    pub const fn set_negative(&mut self, on: bool) {
        self.assign(FLAG_NEGATIVE, on);
    }

    /// Returns the halt flag.
    pub const fn halt(self) -> bool {
        self.get(FLAG_HALT)
    }

    /// Sets or clears the halt flag.
    pub const fn set_halt(&mut self, on: bool) {
        self.assign(FLAG_HALT, on);
    }

    /// Returns reserved bit 7.
    pub const fn low_high(self) -> bool {
        self.get(FLAG_LOW_HIGH)
    }

    /// Sets or clears reserved bit 7.
    pub const fn set_low_high(&mut self, on: bool) {
        self.assign(FLAG_LOW_HIGH, on);
    }
}

impl From<u8> for Flags {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<Flags> for u8 {
    fn from(flags: Flags) -> Self {
        flags.0
    }
}

impl fmt::Display for Flags {
    /// Renders as `LH543NIC`, one character per bit from 7 down to 0, with `-` for clear bits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |mask: u8, c: char| if self.0 & mask != 0 { c } else { '-' };
        write!(
            f,
            "{}{}{}{}{}{}{}{}",
            bit(FLAG_LOW_HIGH, 'L'),
            bit(FLAG_HALT, 'H'),
            bit(1 << 5, '5'),
            bit(1 << 4, '4'),
            bit(1 << 3, '3'),
            bit(FLAG_NEGATIVE, 'N'),
            bit(FLAG_INTERRUPT, 'I'),
            bit(FLAG_CARRY, 'C'),
        )
    }
}
