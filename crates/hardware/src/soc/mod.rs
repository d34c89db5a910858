//! System Components.
//!
//! This module organizes everything outside the CPU core: the two memories,
//! the console and interrupt devices, and the `System` container that holds
//! them.

/// Top-level system container.
pub mod builder;

/// Console and interrupt devices.
pub mod devices;

/// Program and data memories.
pub mod memory;

/// Console trait definition.
pub mod traits;

pub use builder::System;
