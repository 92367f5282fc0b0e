//! Multi-item export driver.
//!
//! Applies the export unit across an item set. Each item is an
//! independent unit of work: a failing item is recorded in the report and
//! its siblings still run.

use serde::Serialize;

use crate::source::ArtworkItem;

use super::job::JobTemplate;
use super::unit::{run_job, OutputArtifact};

/// Outcome of one artwork item's job.
#[derive(Debug, Serialize)]
pub struct ItemOutcome {
    /// Item name (not yet normalized).
    pub name: String,
    /// Artifacts written, one per tier, in tier order. Partial on failure.
    pub outputs: Vec<OutputArtifact>,
    /// Rendered error when the job failed.
    pub error: Option<String>,
}

impl ItemOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-run report, one entry per item in input order.
#[derive(Debug, Default, Serialize)]
pub struct ExportReport {
    pub items: Vec<ItemOutcome>,
}

impl ExportReport {
    /// Number of items whose job failed.
    pub fn failures(&self) -> usize {
        self.items.iter().filter(|i| !i.succeeded()).count()
    }

    /// Total files written across all items.
    pub fn files_written(&self) -> usize {
        self.items.iter().map(|i| i.outputs.len()).sum()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures() == 0
    }
}

/// Export every item, deriving each base name from the item's own name.
pub fn export_all(items: &[ArtworkItem], template: &JobTemplate) -> ExportReport {
    let mut report = ExportReport::default();
    for item in items {
        report.items.push(outcome_for(item, template, &item.name));
    }
    report
}

/// Export exactly one item under the given base name.
pub fn export_one(item: &ArtworkItem, base_name: &str, template: &JobTemplate) -> ExportReport {
    ExportReport {
        items: vec![outcome_for(item, template, base_name)],
    }
}

fn outcome_for(item: &ArtworkItem, template: &JobTemplate, base_name: &str) -> ItemOutcome {
    let job = template.job(base_name);
    match run_job(item, &job) {
        Ok(outputs) => ItemOutcome {
            name: item.name.clone(),
            outputs,
            error: None,
        },
        Err(e) => ItemOutcome {
            name: item.name.clone(),
            outputs: Vec::new(),
            error: Some(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::{tier_by_name, TIERS};
    use crate::naming::NormalizePolicy;
    use crate::resample::ResampleMethod;
    use image::{Rgba, RgbaImage};
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn opaque_item(name: &str, w: u32, h: u32) -> ArtworkItem {
        let mut pixels = RgbaImage::new(w, h);
        for x in 0..w {
            for y in 0..h {
                pixels.put_pixel(x, y, Rgba([50, 50, 50, 255]));
            }
        }
        ArtworkItem {
            name: name.to_string(),
            path: PathBuf::from(format!("{}.png", name)),
            pixels,
        }
    }

    fn transparent_item(name: &str) -> ArtworkItem {
        ArtworkItem {
            name: name.to_string(),
            path: PathBuf::from(format!("{}.png", name)),
            pixels: RgbaImage::new(50, 50),
        }
    }

    fn template(root: PathBuf, trim: bool) -> JobTemplate {
        JobTemplate {
            source_density: tier_by_name("xhdpi").unwrap(),
            method: ResampleMethod::Automatic,
            scale_styles: false,
            trim,
            policy: NormalizePolicy::default(),
            destination_root: root,
            tiers: TIERS.to_vec(),
        }
    }

    #[test]
    fn test_export_all_uses_item_names() {
        let dir = tempdir().unwrap();
        let items = vec![opaque_item("Nav Bar", 8, 8), opaque_item("button", 8, 8)];

        let report = export_all(&items, &template(dir.path().to_path_buf(), false));

        assert!(report.all_succeeded());
        assert_eq!(report.files_written(), 10);
        assert!(dir.path().join("drawable-mdpi/nav_bar.png").exists());
        assert!(dir.path().join("drawable-mdpi/button.png").exists());
    }

    #[test]
    fn test_one_failure_does_not_abort_siblings() {
        let dir = tempdir().unwrap();
        let items = vec![
            opaque_item("first", 8, 8),
            transparent_item("ghost"),
            opaque_item("last", 8, 8),
        ];

        let report = export_all(&items, &template(dir.path().to_path_buf(), true));

        assert_eq!(report.failures(), 1);
        assert_eq!(report.items.len(), 3);
        assert!(report.items[0].succeeded());
        assert!(!report.items[1].succeeded());
        assert!(report.items[2].succeeded());
        assert!(dir.path().join("drawable-xxhdpi/last.png").exists());
        assert!(!dir.path().join("drawable-mdpi/ghost.png").exists());
    }

    #[test]
    fn test_export_one_uses_given_base_name() {
        let dir = tempdir().unwrap();
        let item = opaque_item("Layer 1", 8, 8);

        let report = export_one(&item, "Launcher Icon", &template(dir.path().to_path_buf(), false));

        assert!(report.all_succeeded());
        assert!(dir.path().join("drawable-hdpi/launcher_icon.png").exists());
        assert!(!dir.path().join("drawable-hdpi/layer_1.png").exists());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let dir = tempdir().unwrap();
        let items = vec![opaque_item("icon", 4, 4)];

        let report = export_all(&items, &template(dir.path().to_path_buf(), false));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["items"][0]["name"], "icon");
        assert!(json["items"][0]["error"].is_null());
        assert_eq!(json["items"][0]["outputs"][1]["tier"], "mdpi");
    }
}
