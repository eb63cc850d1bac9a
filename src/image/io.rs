//! Boundary I/O: raw file bytes in, PNG and JSON reports out.
//!
//! - `load_file_bytes`: read the whole input file into memory.
//! - `save_rgb_png`: write an `ImageRgb8` to an RGB PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::ImageRgb8;
use image::{DynamicImage, ImageBuffer, Rgb};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read every byte of `path`. Failure here is terminal for the pipeline.
pub fn load_file_bytes(path: &Path) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))
}

/// Save a byte image to an RGB PNG.
pub fn save_rgb_png(path: &Path, img: &ImageRgb8) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(img.w as u32, img.h as u32, img.to_interleaved())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageRgb8(buffer)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
