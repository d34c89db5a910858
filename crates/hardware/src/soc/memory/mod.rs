//! Program and Data Memories.
//!
//! This module implements the two physically separate address spaces of the
//! machine. It provides:
//! 1. **Program memory:** 256 instruction words, fetched by the program pointer.
//! 2. **Data memory:** 256 bytes, read and written by load/store instructions.
//! 3. **Image conversion:** Construction from flat byte images with a hard size limit.
//!
//! Addresses are `u8`, so every address names a cell and wraparound is free.
//! Neither memory can be reached through the other: code cannot be read or
//! written as data.

use std::fmt;
use std::path::PathBuf;

use crate::common::constants::{
    DATAMEM_IMAGE_BYTES, DATAMEM_SIZE, INSTRUCTION_BYTES, PROGMEM_IMAGE_BYTES, PROGMEM_SIZE,
};
use crate::common::error::LoadError;
use crate::isa::instruction::Instruction;

/// Builds a `TooLarge` error for an in-memory image.
const fn too_large(size: usize, capacity: usize) -> LoadError {
    LoadError::TooLarge {
        path: PathBuf::new(),
        size: size as u64,
        capacity,
    }
}

/// Instruction memory: 256 encoded instruction words.
#[derive(Clone, PartialEq, Eq)]
pub struct ProgramMemory {
    words: [u16; PROGMEM_SIZE],
}

impl ProgramMemory {
    /// Creates a program memory filled with `NOOP` (all-zero) words.
    pub const fn new() -> Self {
        Self {
            words: [0; PROGMEM_SIZE],
        }
    }

    /// Builds a program memory from a flat image (two bytes per word, header first).
    ///
    /// A trailing odd byte becomes the header of a word with a zero operand byte.
    /// Cells past the end of the image are zero.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] when the image exceeds 512 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        if bytes.len() > PROGMEM_IMAGE_BYTES {
            return Err(too_large(bytes.len(), PROGMEM_IMAGE_BYTES));
        }
        let mut mem = Self::new();
        for (cell, chunk) in mem.words.iter_mut().zip(bytes.chunks(INSTRUCTION_BYTES)) {
            let header = chunk[0];
            let operand = chunk.get(1).copied().unwrap_or(0);
            *cell = u16::from_le_bytes([header, operand]);
        }
        Ok(mem)
    }

    /// Builds a program memory from encoded words starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] when more than 256 words are given.
    pub fn from_words(words: &[u16]) -> Result<Self, LoadError> {
        if words.len() > PROGMEM_SIZE {
            return Err(too_large(words.len() * INSTRUCTION_BYTES, PROGMEM_IMAGE_BYTES));
        }
        let mut mem = Self::new();
        mem.words[..words.len()].copy_from_slice(words);
        Ok(mem)
    }

    /// Builds a program memory from decoded instructions starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] when more than 256 instructions are given.
    pub fn from_instructions(program: &[Instruction]) -> Result<Self, LoadError> {
        let words: Vec<u16> = program.iter().map(Instruction::encode).collect();
        Self::from_words(&words)
    }

    /// Fetches the word at `ptr`.
    #[inline]
    pub const fn read(&self, ptr: u8) -> u16 {
        self.words[ptr as usize]
    }

    /// Overwrites the word at `ptr` (host-side patching; the CPU cannot do this).
    #[inline]
    pub const fn write(&mut self, ptr: u8, word: u16) {
        self.words[ptr as usize] = word;
    }

    /// All 256 words in address order.
    pub const fn words(&self) -> &[u16; PROGMEM_SIZE] {
        &self.words
    }

    /// Serializes the memory back to its 512-byte image form.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }
}

impl Default for ProgramMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProgramMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let used = self.words.iter().filter(|&&w| w != 0).count();
        f.debug_struct("ProgramMemory")
            .field("nonzero_words", &used)
            .finish()
    }
}

/// Data memory: 256 bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct DataMemory {
    bytes: [u8; DATAMEM_SIZE],
}

impl DataMemory {
    /// Creates a zero-filled data memory.
    pub const fn new() -> Self {
        Self {
            bytes: [0; DATAMEM_SIZE],
        }
    }

    /// Builds a data memory from a flat image; cells past the image are zero.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] when the image exceeds 256 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        if bytes.len() > DATAMEM_IMAGE_BYTES {
            return Err(too_large(bytes.len(), DATAMEM_IMAGE_BYTES));
        }
        let mut mem = Self::new();
        mem.bytes[..bytes.len()].copy_from_slice(bytes);
        Ok(mem)
    }

    /// Reads the byte at `addr`.
    #[inline]
    pub const fn read(&self, addr: u8) -> u8 {
        self.bytes[addr as usize]
    }

    /// Writes the byte at `addr`.
    #[inline]
    pub const fn write(&mut self, addr: u8, val: u8) {
        self.bytes[addr as usize] = val;
    }

    /// All 256 bytes in address order.
    pub const fn as_bytes(&self) -> &[u8; DATAMEM_SIZE] {
        &self.bytes
    }
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DataMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let used = self.bytes.iter().filter(|&&b| b != 0).count();
        f.debug_struct("DataMemory")
            .field("nonzero_bytes", &used)
            .finish()
    }
}
