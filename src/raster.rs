//! Raster primitives for the export pipeline.
//!
//! Trim-by-transparency, even-pixel canvas snap, and proportional resize
//! over RGBA frames. These are the in-process counterparts of the host
//! image engine the original tool delegated to.

use image::{imageops, RgbaImage};

use crate::resample::ResampleMethod;

/// Returns true if every pixel in the image has alpha == 0.
pub fn is_fully_transparent(img: &RgbaImage) -> bool {
    img.pixels().all(|p| p[3] == 0)
}

/// Bounding box `(x, y, w, h)` of pixels with alpha > 0.
///
/// Returns `None` for a fully transparent (or zero-sized) image.
pub fn content_bounds(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, p) in img.enumerate_pixels() {
        if p[3] == 0 {
            continue;
        }
        found = true;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    if found {
        Some((min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    } else {
        None
    }
}

/// Crop `img` to its content bounding box.
///
/// Returns `None` when there is no non-transparent content to keep.
pub fn trim_transparent(img: &RgbaImage) -> Option<RgbaImage> {
    content_bounds(img).map(|(x, y, w, h)| imageops::crop_imm(img, x, y, w, h).to_image())
}

/// Pad the right/bottom edges with transparency so both dimensions are
/// even. The content stays anchored at the top-left corner.
pub fn snap_to_even(img: RgbaImage) -> RgbaImage {
    let w = img.width() + img.width() % 2;
    let h = img.height() + img.height() % 2;
    if w == img.width() && h == img.height() {
        return img;
    }
    let mut canvas = RgbaImage::new(w, h);
    imageops::replace(&mut canvas, &img, 0, 0);
    canvas
}

/// Proportionally resize `img` to `target_width`.
///
/// Height is derived from the width (round half up, minimum 1px). A
/// same-size target returns an untouched copy.
pub fn resize_to_width(img: &RgbaImage, target_width: u32, method: ResampleMethod) -> RgbaImage {
    let w = target_width.max(1);
    let h = ((img.height() as f64 * w as f64 / img.width() as f64).round() as u32).max(1);
    if w == img.width() && h == img.height() {
        return img.clone();
    }
    imageops::resize(img, w, h, method.filter_for(img.width(), w))
}
