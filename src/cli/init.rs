//! Init command implementation.
//!
//! Generates a starter `dpx.yaml` manifest with the built-in defaults
//! spelled out.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{DpxError, Result};
use crate::manifest::MANIFEST_FILENAME;
use crate::output::Printer;
use crate::resample::ResampleMethod;

/// Initialize a project by generating a dpx.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create the manifest in (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing dpx.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(DpxError::Export {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    // Build YAML manually for clean formatting
    let mut yaml = String::new();
    yaml.push_str("# Density tier the source artwork is authored at\n");
    yaml.push_str("density: xhdpi\n");
    yaml.push_str(&format!(
        "# Resample method: {}\n",
        ResampleMethod::NAMES.join(", ")
    ));
    yaml.push_str("method: automatic\n");
    yaml.push_str("# Root directory for the drawable-* folders\n");
    yaml.push_str("output: res\n");
    yaml.push_str("# Trim transparent padding before export\n");
    yaml.push_str("trim: false\n");

    fs::write(&manifest_path, &yaml).map_err(|e| DpxError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", MANIFEST_FILENAME);

    Ok(())
}
