//! File-based artwork source.
//!
//! Each input PNG is one artwork item; the top-level PNG files of a
//! directory are the "layers" of an export-all run. Items are decoded
//! once up front and never mutated by the pipeline.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use walkdir::WalkDir;

use crate::error::{DpxError, Result};

/// One artwork item: a named RGBA frame with its origin path.
#[derive(Debug, Clone)]
pub struct ArtworkItem {
    /// Item name, taken from the file stem.
    pub name: String,
    /// File the item was decoded from.
    pub path: PathBuf,
    /// Decoded pixels.
    pub pixels: RgbaImage,
}

impl ArtworkItem {
    /// Decode a single PNG file into an item.
    pub fn load(path: &Path) -> Result<Self> {
        let pixels = image::open(path)
            .map_err(|e| DpxError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
            .to_rgba8();

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("artwork")
            .to_string();

        Ok(Self {
            name,
            path: path.to_path_buf(),
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Load every top-level PNG in `dir`, sorted by file name.
///
/// Subdirectories are not descended into; nested folders hold output,
/// not source layers.
pub fn scan_items(dir: &Path) -> Result<Vec<ArtworkItem>> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("png"))
                .unwrap_or(false)
        })
        .collect();

    paths.sort();
    paths.iter().map(|p| ArtworkItem::load(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    fn write_png(path: &Path, w: u32, h: u32) {
        let mut img = RgbaImage::new(w, h);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_load_single_item() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("My Icon.png");
        write_png(&path, 8, 4);

        let item = ArtworkItem::load(&path).unwrap();
        assert_eq!(item.name, "My Icon");
        assert_eq!((item.width(), item.height()), (8, 4));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = ArtworkItem::load(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, DpxError::Decode { .. }));
    }

    #[test]
    fn test_scan_collects_sorted_pngs() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("b.png"), 2, 2);
        write_png(&dir.path().join("a.png"), 2, 2);
        write_png(&dir.path().join("c.PNG"), 2, 2);

        let items = scan_items(dir.path()).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scan_skips_non_png_and_subdirs() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("keep.png"), 2, 2);
        std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();
        std::fs::create_dir(dir.path().join("drawable-mdpi")).unwrap();
        write_png(&dir.path().join("drawable-mdpi").join("nested.png"), 2, 2);

        let items = scan_items(dir.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "keep");
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        assert!(scan_items(dir.path()).unwrap().is_empty());
    }
}
