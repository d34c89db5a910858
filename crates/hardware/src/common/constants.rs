//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Sizes of the program and data address spaces.
//! 2. **Instruction Constants:** Field masks and shifts for the two-byte instruction word.
//! 3. **Register Constants:** Register file size and index mask.
//! 4. **Stack Constants:** Hardware call stack depth.

/// Number of instruction cells in program memory.
///
/// The program pointer is an 8-bit counter, so every value it can hold
/// names a cell and wraparound needs no bounds check.
pub const PROGMEM_SIZE: usize = 256;

/// Number of byte cells in data memory.
pub const DATAMEM_SIZE: usize = 256;

/// Bytes occupied by one encoded instruction in a program image.
///
/// Byte 0 is the header (opcode and `reg1`), byte 1 the operand byte.
pub const INSTRUCTION_BYTES: usize = 2;

/// Capacity in bytes of a program image file.
pub const PROGMEM_IMAGE_BYTES: usize = PROGMEM_SIZE * INSTRUCTION_BYTES;

/// Capacity in bytes of a data image file.
pub const DATAMEM_IMAGE_BYTES: usize = DATAMEM_SIZE;

/// Capacity in bytes of a combined image (program region followed by data region).
pub const COMBINED_IMAGE_BYTES: usize = PROGMEM_IMAGE_BYTES + DATAMEM_IMAGE_BYTES;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 4;

/// Mask applied to every register index (2-bit field).
pub const REG_MASK: u8 = 0b11;

/// Bit mask for extracting the opcode field (header bits 0-5).
pub const OPCODE_MASK: u16 = 0x3F;

/// Bit position of the `reg1` field (header bits 6-7).
pub const REG1_SHIFT: u16 = 6;

/// Bit position of the operand byte within the instruction word.
pub const OPERAND_SHIFT: u16 = 8;

/// Bit position of the `reg2` field (operand byte bits 6-7).
pub const REG2_SHIFT: u16 = OPERAND_SHIFT + 6;

/// Bit mask for extracting the 8-bit data field once shifted down.
pub const DATA_MASK: u16 = 0xFF;

/// Depth of the hardware call stack.
pub const CALL_STACK_DEPTH: usize = 16;

/// Value stored by `RD` when the input stream is exhausted.
///
/// C `getchar()` returns `EOF` (-1) which truncates to `0xFF` in an 8-bit register.
pub const DEFAULT_EOF_VALUE: u8 = 0xFF;
