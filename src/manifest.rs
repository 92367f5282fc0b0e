//! Project manifest (dpx.yaml) parsing.
//!
//! The manifest holds per-project export defaults so repeated runs don't
//! need the full flag set. Every field is optional; CLI flags override
//! manifest values, and built-in defaults fill whatever remains.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DpxError, Result};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "dpx.yaml";

/// Export defaults loaded from dpx.yaml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Density tier the source artwork is authored at.
    pub density: Option<String>,

    /// Resample method name.
    pub method: Option<String>,

    /// Root directory for the drawable-* output folders.
    pub output: Option<PathBuf>,

    /// Trim transparent padding before export.
    pub trim: Option<bool>,

    /// Scale attached styles/effects along with the image.
    pub scale_styles: Option<bool>,

    /// Name separator: "underscore" or "hyphen".
    pub separator: Option<String>,

    /// Drop punctuation from normalized names.
    pub strip_punctuation: Option<bool>,

    /// Subset of tiers to produce (default: the full table).
    pub tiers: Option<Vec<String>>,
}

impl Manifest {
    /// Load a manifest from a dpx.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DpxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| DpxError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check dpx.yaml syntax".to_string()),
        })
    }

    /// Look for a dpx.yaml next to `input` (its parent directory for a
    /// file, the directory itself otherwise).
    pub fn discover(input: &Path) -> Result<Option<Self>> {
        let dir = if input.is_dir() {
            input
        } else {
            input.parent().unwrap_or_else(|| Path::new("."))
        };

        let manifest_path = dir.join(MANIFEST_FILENAME);
        if manifest_path.exists() {
            Ok(Some(Self::load(&manifest_path)?))
        } else {
            Ok(None)
        }
    }
}
