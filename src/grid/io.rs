//! File export helpers for derived grids.
//!
//! - `save_mask_png`: write a contour mask as a black/white PNG.
//! - `save_label_preview_png`: write a label map as a grayscale PNG with one
//!   shade per region, for quick inspection.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{GridView, LabelView, Mask};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Save a binary mask to a PNG, boundary pixels white on black.
pub fn save_mask_png(mask: &Mask, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.w as u32, mask.h as u32);
    for (y, row) in mask.rows().enumerate() {
        for (x, &set) in row.iter().enumerate() {
            let v = if set { 255 } else { 0 };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a label grid to a grayscale PNG for visual inspection.
///
/// Labels are hashed to shades so neighboring region ids stay visually
/// distinct; the mapping is deterministic but not invertible.
pub fn save_label_preview_png(labels: &LabelView<'_>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(labels.w as u32, labels.h as u32);
    for (y, row) in labels.rows().enumerate() {
        for (x, &label) in row.iter().enumerate() {
            let v = (label.wrapping_mul(2_654_435_761) >> 24) as u8;
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Pretty-print any serializable value to a JSON file.
pub fn write_json_file<T: Serialize>(value: &T, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
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
