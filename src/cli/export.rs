//! Export command implementation.
//!
//! Resolves the run configuration (CLI flags over dpx.yaml over built-in
//! defaults), loads the artwork items, and drives the export pipeline.

use std::path::PathBuf;

use clap::Args;

use crate::density::{resolve_tiers, tier_by_name};
use crate::error::{DpxError, Result};
use crate::export::{export_all, export_one, JobTemplate};
use crate::manifest::Manifest;
use crate::naming::{NormalizePolicy, Separator};
use crate::output::{display_path, plural, Printer};
use crate::resample::ResampleMethod;
use crate::source::{scan_items, ArtworkItem};

/// Export density-scaled PNGs from source artwork
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Source PNG file, or a directory with --all
    #[arg(required = true)]
    pub input: PathBuf,

    /// Export every top-level PNG in the input directory
    #[arg(long)]
    pub all: bool,

    /// Base name for the output files (default: input file stem)
    #[arg(long)]
    pub name: Option<String>,

    /// Density tier the source artwork is authored at
    #[arg(long)]
    pub density: Option<String>,

    /// Resample method
    #[arg(long)]
    pub method: Option<String>,

    /// Root directory for the drawable-* folders
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Trim transparent padding before export
    #[arg(long)]
    pub trim: bool,

    /// Scale attached styles/effects along with the image
    #[arg(long)]
    pub scale_styles: bool,

    /// Comma-separated subset of tiers to produce
    #[arg(long, value_delimiter = ',')]
    pub tiers: Option<Vec<String>>,

    /// Name separator: underscore or hyphen
    #[arg(long)]
    pub separator: Option<String>,

    /// Drop punctuation from normalized names
    #[arg(long)]
    pub strip_punctuation: bool,

    /// Print a JSON report to stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::discover(&args.input)?.unwrap_or_default();
    let template = resolve_template(&args, &manifest)?;

    let report = if args.all {
        if !args.input.is_dir() {
            return Err(DpxError::Export {
                message: format!("--all expects a directory, got {}", args.input.display()),
                help: Some("Drop --all to export a single file".to_string()),
            });
        }
        let items = scan_items(&args.input)?;
        if items.is_empty() {
            return Err(DpxError::Export {
                message: format!("No PNG files found in {}", args.input.display()),
                help: None,
            });
        }
        if args.name.is_some() {
            printer.warning(
                "Ignoring",
                "--name has no effect with --all; each item keeps its own name",
            );
        }
        printer.status("Exporting", &plural(items.len(), "item", "items"));
        export_all(&items, &template)
    } else {
        if args.input.is_dir() {
            return Err(DpxError::NoSelection {
                message: format!("{} is a directory", args.input.display()),
                help: Some(
                    "Pass a PNG file, or use --all to export every item in the directory"
                        .to_string(),
                ),
            });
        }
        let item = ArtworkItem::load(&args.input)?;
        let base_name = args.name.clone().unwrap_or_else(|| item.name.clone());
        printer.status("Exporting", &item.name);
        export_one(&item, &base_name, &template)
    };

    for outcome in &report.items {
        match &outcome.error {
            None => {
                for artifact in &outcome.outputs {
                    printer.status(
                        "Wrote",
                        &format!("{} ({}px)", display_path(&artifact.path), artifact.width),
                    );
                }
            }
            Some(err) => printer.error("Failed", &format!("{}: {}", outcome.name, err)),
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| DpxError::Parse {
            message: format!("Failed to encode report: {}", e),
            help: None,
        })?;
        println!("{}", json);
    }

    let written = report.files_written();
    if report.all_succeeded() {
        printer.success(
            "Finished",
            &format!(
                "{} in {}",
                plural(written, "file", "files"),
                display_path(&template.destination_root)
            ),
        );
        Ok(())
    } else {
        Err(DpxError::Export {
            message: format!(
                "{} of {} failed ({} written)",
                plural(report.failures(), "item", "items"),
                report.items.len(),
                plural(written, "file", "files")
            ),
            help: None,
        })
    }
}

/// Merge CLI flags over manifest values over built-in defaults.
fn resolve_template(args: &ExportArgs, manifest: &Manifest) -> Result<JobTemplate> {
    let density_name = args
        .density
        .as_deref()
        .or(manifest.density.as_deref())
        .unwrap_or("xhdpi");
    let source_density = tier_by_name(density_name)?;

    let method = match args.method.as_deref().or(manifest.method.as_deref()) {
        Some(name) => ResampleMethod::parse(name)?,
        None => ResampleMethod::default(),
    };

    let separator = match args.separator.as_deref().or(manifest.separator.as_deref()) {
        Some(name) => Separator::parse(name)?,
        None => Separator::default(),
    };

    let tier_names = args
        .tiers
        .clone()
        .or_else(|| manifest.tiers.clone())
        .unwrap_or_default();

    Ok(JobTemplate {
        source_density,
        method,
        scale_styles: args.scale_styles || manifest.scale_styles.unwrap_or(false),
        trim: args.trim || manifest.trim.unwrap_or(false),
        policy: NormalizePolicy {
            separator,
            strip_punctuation: args.strip_punctuation || manifest.strip_punctuation.unwrap_or(false),
        },
        destination_root: args
            .output
            .clone()
            .or_else(|| manifest.output.clone())
            .unwrap_or_else(|| PathBuf::from("res")),
        tiers: resolve_tiers(&tier_names)?,
    })
}
