//! Single-artwork export unit.
//!
//! Runs the isolate → trim → snap → (resize → write) × tiers sequence for
//! one item. Every destructive operation happens on a [`WorkingCopy`]
//! owned by the job; the source item's pixels are never written through,
//! and the copy is dropped on every exit path.

use std::path::PathBuf;

use image::{imageops, RgbaImage};
use serde::Serialize;

use crate::density::width_for_tier;
use crate::error::{DpxError, Result};
use crate::naming::normalize;
use crate::raster;
use crate::resample::ResampleMethod;
use crate::source::ArtworkItem;
use crate::writer::write_png;

use super::ExportJob;

/// One produced output file.
#[derive(Debug, Clone, Serialize)]
pub struct OutputArtifact {
    /// Density tier name, e.g. "hdpi".
    pub tier: String,
    /// Final path of the written PNG.
    pub path: PathBuf,
    /// Width of the written frame in pixels.
    pub width: u32,
}

/// A disposable clone of one artwork item's pixels.
///
/// Created fresh for each job and mutated in place by trim and snap; the
/// per-tier frames are derived from it without further mutation.
#[derive(Debug)]
pub struct WorkingCopy {
    canvas: RgbaImage,
}

impl WorkingCopy {
    /// Composite `item` onto a fresh transparent canvas of its own size.
    pub fn isolate(item: &ArtworkItem) -> Self {
        let mut canvas = RgbaImage::new(item.width(), item.height());
        imageops::replace(&mut canvas, &item.pixels, 0, 0);
        Self { canvas }
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Crop the canvas to its content bounding box.
    ///
    /// Fully transparent artwork has no bounding box to keep; that is an
    /// error, not a zero-size asset.
    pub fn trim(&mut self, item_name: &str) -> Result<()> {
        match raster::trim_transparent(&self.canvas) {
            Some(trimmed) => {
                self.canvas = trimmed;
                Ok(())
            }
            None => Err(DpxError::EmptyArtwork {
                name: item_name.to_string(),
            }),
        }
    }

    /// Grow the canvas so width and height are even, anchored top-left.
    pub fn snap_to_even(&mut self) {
        let canvas = std::mem::replace(&mut self.canvas, RgbaImage::new(0, 0));
        self.canvas = raster::snap_to_even(canvas);
    }

    /// Derive a frame resized to `target_width` from the current canvas.
    ///
    /// `_scale_styles` is part of the resize call contract; raster frames
    /// carry no attached styles, so it has no effect here.
    pub fn frame_for_width(
        &self,
        target_width: u32,
        method: ResampleMethod,
        _scale_styles: bool,
    ) -> RgbaImage {
        raster::resize_to_width(&self.canvas, target_width, method)
    }
}

/// Run one export job to completion.
///
/// Returns the artifacts written, one per tier, in ascending tier order.
/// Any step failure abandons the remaining tiers for this item; files
/// already written for earlier tiers stay on disk.
pub fn run_job(item: &ArtworkItem, job: &ExportJob) -> Result<Vec<OutputArtifact>> {
    let template = &job.template;

    let mut copy = WorkingCopy::isolate(item);

    if template.trim {
        copy.trim(&item.name)?;
    }

    copy.snap_to_even();

    let name = normalize(&job.base_name, template.policy);
    let master_width = copy.width();
    let mut outputs = Vec::with_capacity(template.tiers.len());

    for tier in &template.tiers {
        let target_width = width_for_tier(master_width, template.source_density, *tier);
        let frame = copy.frame_for_width(target_width, template.method, template.scale_styles);

        let folder = template.destination_root.join(tier.folder_name());
        let path = write_png(&frame, &folder, &name)?;

        outputs.push(OutputArtifact {
            tier: tier.name.to_string(),
            path,
            width: frame.width(),
        });
    }

    Ok(outputs)
}
