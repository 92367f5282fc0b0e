//! Density tiers and tier-width arithmetic.
//!
//! The tier table is the fixed Android density bucket set. Scale factors
//! are relative to mdpi; every output width is derived from the source
//! artwork's width and its stated density.

use crate::error::{DpxError, Result};

/// A named density bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityTier {
    /// Tier name, e.g. "xhdpi".
    pub name: &'static str,
    /// Scale factor relative to mdpi.
    pub scale: f64,
}

impl DensityTier {
    /// Output directory name for this tier, e.g. "drawable-xhdpi".
    pub fn folder_name(&self) -> String {
        format!("drawable-{}", self.name)
    }
}

/// The fixed tier set, ascending by scale factor.
pub const TIERS: [DensityTier; 5] = [
    DensityTier { name: "ldpi", scale: 0.75 },
    DensityTier { name: "mdpi", scale: 1.0 },
    DensityTier { name: "hdpi", scale: 1.5 },
    DensityTier { name: "xhdpi", scale: 2.0 },
    DensityTier { name: "xxhdpi", scale: 3.0 },
];

/// Look up a tier by name (case-insensitive).
pub fn tier_by_name(name: &str) -> Result<DensityTier> {
    let lower = name.trim().to_lowercase();
    TIERS
        .iter()
        .copied()
        .find(|t| t.name == lower)
        .ok_or_else(|| DpxError::InvalidDensity {
            name: name.to_string(),
            help: Some(format!("Valid tiers: {}", tier_names().join(", "))),
        })
}

/// Names of all tiers, ascending by scale factor.
pub fn tier_names() -> Vec<&'static str> {
    TIERS.iter().map(|t| t.name).collect()
}

/// Resolve a list of tier names into table entries, keeping table order.
///
/// An empty list means the full table.
pub fn resolve_tiers(names: &[String]) -> Result<Vec<DensityTier>> {
    if names.is_empty() {
        return Ok(TIERS.to_vec());
    }
    let mut requested = Vec::with_capacity(names.len());
    for name in names {
        requested.push(tier_by_name(name)?);
    }
    Ok(TIERS
        .iter()
        .copied()
        .filter(|t| requested.iter().any(|r| r.name == t.name))
        .collect())
}

/// Target pixel width for a tier.
///
/// `round(source_width * target.scale / source.scale)`, rounding half up.
/// The same rule applies to every tier so sibling assets stay consistent.
pub fn width_for_tier(source_width: u32, source: DensityTier, target: DensityTier) -> u32 {
    (source_width as f64 * target.scale / source.scale).round() as u32
}
