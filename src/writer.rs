//! PNG output with directory creation and long-name handling.
//!
//! Writes 32-bit RGBA PNGs (alpha preserved, no indexed mode). The
//! destination folder is created on demand and an existing file at the
//! target path is overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{DpxError, Result};

/// Longest base name written directly; longer names are written under a
/// short temporary name and then renamed to the full name. The historical
/// export primitive silently truncated anything longer.
pub const MAX_DIRECT_NAME_LEN: usize = 27;

/// Temporary filename used for the long-name rename path.
const TEMP_FILE_NAME: &str = ".dpx-tmp.png";

/// Write `frame` to `<folder>/<name_no_ext>.png` and return the final path.
///
/// Creates `folder` (and intermediate directories) if absent; safe to call
/// repeatedly for the same folder across tiers.
pub fn write_png(frame: &RgbaImage, folder: &Path, name_no_ext: &str) -> Result<PathBuf> {
    fs::create_dir_all(folder).map_err(|e| DpxError::DirectoryCreate {
        path: folder.to_path_buf(),
        message: e.to_string(),
    })?;

    let final_path = folder.join(format!("{}.png", name_no_ext));

    if name_no_ext.len() > MAX_DIRECT_NAME_LEN {
        let temp_path = folder.join(TEMP_FILE_NAME);
        save_frame(frame, &temp_path)?;
        fs::rename(&temp_path, &final_path).map_err(|e| DpxError::EncodeWrite {
            path: final_path.clone(),
            message: format!("Failed to rename from temporary file: {}", e),
        })?;
    } else {
        save_frame(frame, &final_path)?;
    }

    Ok(final_path)
}

fn save_frame(frame: &RgbaImage, path: &Path) -> Result<()> {
    frame.save(path).map_err(|e| DpxError::EncodeWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    fn frame(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
        let mut img = RgbaImage::new(w, h);
        img.put_pixel(0, 0, Rgba(px));
        img
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("res").join("drawable-mdpi");

        let path = write_png(&frame(2, 2, [1, 2, 3, 255]), &folder, "icon").unwrap();

        assert_eq!(path, folder.join("icon.png"));
        assert!(path.exists());
    }

    #[test]
    fn test_write_is_idempotent_for_folder_creation() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("drawable-hdpi");

        write_png(&frame(2, 2, [0, 0, 0, 255]), &folder, "a").unwrap();
        write_png(&frame(2, 2, [0, 0, 0, 255]), &folder, "b").unwrap();

        assert!(folder.join("a.png").exists());
        assert!(folder.join("b.png").exists());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let folder = dir.path().to_path_buf();

        write_png(&frame(4, 4, [255, 0, 0, 255]), &folder, "icon").unwrap();
        write_png(&frame(2, 2, [0, 255, 0, 255]), &folder, "icon").unwrap();

        let img = image::open(folder.join("icon.png")).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_long_name_gets_exact_final_path() {
        let dir = tempdir().unwrap();
        let name = "a_very_long_asset_name_well_past_the_limit";
        assert!(name.len() > MAX_DIRECT_NAME_LEN);

        let path = write_png(&frame(2, 2, [9, 9, 9, 255]), dir.path(), name).unwrap();

        assert_eq!(path, dir.path().join(format!("{}.png", name)));
        assert!(path.exists());
        assert!(!dir.path().join(TEMP_FILE_NAME).exists());
    }

    #[test]
    fn test_long_name_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let name = "another_name_longer_than_twenty_seven";

        write_png(&frame(4, 4, [1, 1, 1, 255]), dir.path(), name).unwrap();
        write_png(&frame(2, 2, [2, 2, 2, 255]), dir.path(), name).unwrap();

        let img = image::open(dir.path().join(format!("{}.png", name)))
            .unwrap()
            .to_rgba8();
        assert_eq!(img.width(), 2);
    }

    #[test]
    fn test_alpha_survives_round_trip() {
        let dir = tempdir().unwrap();
        let path = write_png(&frame(2, 2, [10, 20, 30, 128]), dir.path(), "semi").unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 128]);
    }

    #[test]
    fn test_uncreatable_folder_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = write_png(&frame(1, 1, [0; 4]), &blocker.join("sub"), "x").unwrap_err();
        assert!(matches!(err, DpxError::DirectoryCreate { .. }));
    }
}
