//! General-Purpose Register File.
//!
//! This module implements the register bank of the CPU. It performs the following:
//! 1. **Storage:** Maintains 4 unsigned 8-bit registers (`r0`-`r3`).
//! 2. **Index Masking:** Register indices are reduced to their 2-bit field, so no
//!    access can fall outside the bank.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use std::fmt;

use crate::common::constants::{NUM_REGS, REG_MASK};

/// General-Purpose Register file.
///
/// Registers hold raw bytes; every bit pattern is a valid value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index; only the low two bits are used.
    #[inline]
    pub const fn read(&self, idx: u8) -> u8 {
        self.regs[(idx & REG_MASK) as usize]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index; only the low two bits are used.
    /// * `val` - The byte to store.
    #[inline]
    pub const fn write(&mut self, idx: u8, val: u8) {
        self.regs[(idx & REG_MASK) as usize] = val;
    }

    /// Returns a copy of all four registers in index order.
    pub const fn snapshot(&self) -> [u8; NUM_REGS] {
        self.regs
    }

    /// Dumps the contents of all registers to stdout.
    pub fn dump(&self) {
        println!("{self}");
    }
}

impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.regs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "r{i}={val:#04x}")?;
        }
        Ok(())
    }
}
