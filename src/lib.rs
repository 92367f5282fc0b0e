//! dpx - density-bucket drawable exporter
//!
//! A library for fanning a single source artwork out into the fixed
//! Android density buckets: trim, even-pixel snap, per-tier resize, and
//! PNG output under drawable-<tier>/ directories.

pub mod cli;
pub mod density;
pub mod error;
pub mod export;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod raster;
pub mod resample;
pub mod source;
pub mod writer;

pub use density::{resolve_tiers, tier_by_name, tier_names, width_for_tier, DensityTier, TIERS};
pub use error::{DpxError, Result};
pub use export::{
    export_all, export_one, run_job, ExportJob, ExportReport, ItemOutcome, JobTemplate,
    OutputArtifact, WorkingCopy,
};
pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use naming::{normalize, NormalizePolicy, Separator};
pub use resample::ResampleMethod;
pub use source::{scan_items, ArtworkItem};
pub use writer::write_png;
