//! Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Decode Errors:** Instruction words whose opcode has no defined shape.
//! 2. **Load Errors:** Image files that cannot be turned into program or data memory.
//! 3. **Config Errors:** Configuration files that cannot be read or parsed.
//! 4. **Simulation Errors:** The single error type surfaced by the run loop.
//!
//! Execution itself is total: every reachable state has a defined successor, so the
//! only error the loop can produce is a decode failure at fetch time.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to decode an instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The 6-bit opcode field does not name an instruction.
    #[error("unknown opcode {opcode:#05o}")]
    UnknownOpcode {
        /// Raw opcode field (0-63).
        opcode: u8,
    },
}

/// Failure to load a memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be inspected, opened, or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the image file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The path exists but does not name a regular file.
    #[error("not a regular file: {}", path.display())]
    NotRegularFile {
        /// Path of the image file.
        path: PathBuf,
    },

    /// The image holds more bytes than its destination memory.
    #[error("{}: too large ({size} B > {capacity} B)", path.display())]
    TooLarge {
        /// Path of the image file (empty for in-memory images).
        path: PathBuf,
        /// Size of the image in bytes.
        size: u64,
        /// Capacity of the destination in bytes.
        capacity: usize,
    },
}

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error surfaced by the simulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// The word at `pc` could not be decoded; the program pointer was not advanced.
    #[error("decode error at pc {pc:#04x} (word {word:#06x}): {source}")]
    Decode {
        /// Address of the offending instruction.
        pc: u8,
        /// Raw instruction word.
        word: u16,
        /// Decoder failure.
        #[source]
        source: DecodeError,
    },

    /// A memory image could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
