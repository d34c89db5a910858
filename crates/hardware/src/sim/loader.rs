//! Image Loader.
//!
//! This module reads program and data images from disk. It performs:
//! 1. **Validation:** The path must name a regular file no larger than the target capacity.
//! 2. **Reading:** The whole file is read into a byte buffer.
//! 3. **Conversion:** Bytes become a [`ProgramMemory`] or [`DataMemory`].
//!
//! Oversized images are rejected, never truncated.

use std::fs;
use std::path::Path;

use crate::common::constants::{COMBINED_IMAGE_BYTES, DATAMEM_IMAGE_BYTES, PROGMEM_IMAGE_BYTES};
use crate::common::error::LoadError;
use crate::config::ImageLayout;
use crate::soc::memory::{DataMemory, ProgramMemory};

/// Reads an image file of at most `capacity` bytes.
///
/// # Errors
///
/// * [`LoadError::Io`] if the file cannot be inspected or read (including a missing file).
/// * [`LoadError::NotRegularFile`] if the path names a directory or other non-file.
/// * [`LoadError::TooLarge`] if the file is larger than `capacity`.
pub fn read_image(path: &Path, capacity: usize) -> Result<Vec<u8>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let meta = fs::metadata(path).map_err(io_err)?;
    if !meta.is_file() {
        return Err(LoadError::NotRegularFile {
            path: path.to_path_buf(),
        });
    }
    if meta.len() > capacity as u64 {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            capacity,
        });
    }

    let bytes = fs::read(path).map_err(io_err)?;
    // The file may have grown between stat and read.
    if bytes.len() > capacity {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size: bytes.len() as u64,
            capacity,
        });
    }
    tracing::info!(path = %path.display(), bytes = bytes.len(), "image loaded");
    Ok(bytes)
}

/// Loads a program image (up to 512 bytes, two bytes per instruction).
///
/// # Errors
///
/// See [`read_image`].
pub fn load_program(path: &Path) -> Result<ProgramMemory, LoadError> {
    let bytes = read_image(path, PROGMEM_IMAGE_BYTES)?;
    ProgramMemory::from_bytes(&bytes)
}

/// Loads a data image (up to 256 bytes). `None` yields zero-filled memory.
///
/// # Errors
///
/// See [`read_image`].
pub fn load_data(path: Option<&Path>) -> Result<DataMemory, LoadError> {
    match path {
        Some(path) => {
            let bytes = read_image(path, DATAMEM_IMAGE_BYTES)?;
            DataMemory::from_bytes(&bytes)
        }
        None => Ok(DataMemory::new()),
    }
}

/// Loads a combined image: 512 program bytes followed by up to 256 data bytes.
///
/// A file shorter than 512 bytes fills the program region only.
///
/// # Errors
///
/// See [`read_image`]; the capacity is 768 bytes.
pub fn load_combined(path: &Path) -> Result<(ProgramMemory, DataMemory), LoadError> {
    let bytes = read_image(path, COMBINED_IMAGE_BYTES)?;
    let split = bytes.len().min(PROGMEM_IMAGE_BYTES);
    let (code, data) = bytes.split_at(split);
    Ok((ProgramMemory::from_bytes(code)?, DataMemory::from_bytes(data)?))
}

/// Loads memories according to `layout`.
///
/// With [`ImageLayout::Combined`], `code` names the combined image and `data`
/// must be `None`; a data path is ignored with a warning.
///
/// # Errors
///
/// See [`read_image`].
pub fn load_images(
    layout: ImageLayout,
    code: &Path,
    data: Option<&Path>,
) -> Result<(ProgramMemory, DataMemory), LoadError> {
    match layout {
        ImageLayout::Split => Ok((load_program(code)?, load_data(data)?)),
        ImageLayout::Combined => {
            if let Some(data) = data {
                tracing::warn!(path = %data.display(), "data image ignored with combined layout");
            }
            load_combined(code)
        }
    }
}
