//! Export job parameters.

use std::path::PathBuf;

use crate::density::DensityTier;
use crate::naming::NormalizePolicy;
use crate::resample::ResampleMethod;

/// Run-wide export parameters, shared by every item in a run.
///
/// One [`ExportJob`] is stamped out per artwork item from this template;
/// only the base name differs between items.
#[derive(Debug, Clone)]
pub struct JobTemplate {
    /// Density tier the source artwork is authored at.
    pub source_density: DensityTier,
    /// Resample method for the per-tier resize.
    pub method: ResampleMethod,
    /// Scale attached styles/effects along with the image. Plain raster
    /// artwork carries no styles, so the built-in engine accepts and
    /// ignores this.
    pub scale_styles: bool,
    /// Trim transparent padding before snapping and resizing.
    pub trim: bool,
    /// Output name normalization policy.
    pub policy: NormalizePolicy,
    /// Root directory the drawable-* folders are created under.
    pub destination_root: PathBuf,
    /// Tiers to produce, ascending by scale factor.
    pub tiers: Vec<DensityTier>,
}

impl JobTemplate {
    /// Resolve a per-item job with the given base name.
    pub fn job(&self, base_name: &str) -> ExportJob {
        ExportJob {
            base_name: base_name.to_string(),
            template: self.clone(),
        }
    }
}

/// A fully resolved per-item job. Consumed by [`super::run_job`] and
/// discarded; jobs are never persisted or reused.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Raw base name; normalized by the export unit before writing.
    pub base_name: String,
    /// The run-wide parameters.
    pub template: JobTemplate,
}
