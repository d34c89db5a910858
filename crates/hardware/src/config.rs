//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline values (no tracing, no step limit, `0xFF` end-of-input sentinel).
//! 2. **Structures:** Hierarchical config for general, I/O, and loader settings.
//! 3. **Enums:** Image layout selection.
//!
//! Configuration is supplied as JSON (`Config::from_json`, `Config::from_file`)
//! or built with `Config::default()`. Every section and field may be omitted.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Value stored by `RD` when the console reports end of input.
    ///
    /// Matches the low byte of a C `EOF` (-1) truncated to 8 bits.
    pub const EOF_VALUE: u8 = crate::common::constants::DEFAULT_EOF_VALUE;
}

/// How program and data images are supplied on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ImageLayout {
    /// Separate code file and optional data file.
    #[default]
    Split,
    /// One file: 512 bytes of program followed by up to 256 bytes of data.
    Combined,
}

/// Top-level simulator configuration.
///
/// # Examples
///
/// ```
/// use hvsim_core::config::{Config, ImageLayout};
///
/// let json = r#"{
///     "general": { "max_steps": 1000 },
///     "io": { "eof_value": 0 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_steps, Some(1000));
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.io.eof_value, 0);
/// assert_eq!(config.loader.layout, ImageLayout::Split);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Console settings
    #[serde(default)]
    pub io: IoConfig,
    /// Image loading settings
    #[serde(default)]
    pub loader: LoaderConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the JSON is malformed or has fields of
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace event (pc, word, disassembly) for every executed instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop `run` after this many steps; `None` runs until halt
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// Console settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IoConfig {
    /// Value stored by `RD` at end of input
    #[serde(default = "IoConfig::default_eof_value")]
    pub eof_value: u8,

    /// Send `WR` output to stderr instead of stdout (host console only)
    #[serde(default)]
    pub to_stderr: bool,
}

impl IoConfig {
    /// Returns the default end-of-input sentinel.
    const fn default_eof_value() -> u8 {
        defaults::EOF_VALUE
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            eof_value: defaults::EOF_VALUE,
            to_stderr: false,
        }
    }
}

/// Image loading settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoaderConfig {
    /// On-disk image layout
    #[serde(default)]
    pub layout: ImageLayout,
}
