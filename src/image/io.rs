//! I/O helpers for binary masks and JSON.
//!
//! - `load_mask_image`: read a PNG/JPEG/etc. and keep nonzero luma as foreground.
//! - `save_overlay_image`: mask, traced contour and salient points in one PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::Mask;
use crate::types::Point;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to a binary mask.
///
/// Any nonzero luma value counts as foreground; no thresholding is applied.
pub fn load_mask_image(path: &Path) -> Result<Mask, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .into_raw()
        .into_iter()
        .map(|v| u8::from(v != 0))
        .collect();
    Mask::from_vec(width, height, data)
        .ok_or_else(|| format!("Unexpected buffer size for {}", path.display()))
}

/// Save a grayscale overlay: foreground at 64, contour pixels at 160 and
/// 3x3 markers at 255 around every salient point.
pub fn save_overlay_image(
    mask: &Mask,
    contour: &[Point],
    salient: &[Point],
    path: &Path,
) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let (w, h) = (mask.w as u32, mask.h as u32);
    let mut out = GrayImage::new(w, h);
    for y in 0..mask.h {
        for x in 0..mask.w {
            if mask.get(x, y) {
                out.put_pixel(x as u32, y as u32, Luma([64]));
            }
        }
    }
    let mut plot = |x: f32, y: f32, v: u8| {
        let (xi, yi) = (x.round(), y.round());
        if xi >= 0.0 && yi >= 0.0 && (xi as u32) < w && (yi as u32) < h {
            out.put_pixel(xi as u32, yi as u32, Luma([v]));
        }
    };
    for p in contour {
        plot(p.x, p.y, 160);
    }
    for p in salient {
        for dy in -1..=1 {
            for dx in -1..=1 {
                plot(p.x + dx as f32, p.y + dy as f32, 255);
            }
        }
    }
    out.save(path)
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
