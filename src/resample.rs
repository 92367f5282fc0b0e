//! Resample method registry.
//!
//! Maps the human-readable method names offered by the export dialog onto
//! the `image` crate's filters. `Automatic` is a sentinel: the concrete
//! filter is chosen per resize based on scale direction.

use image::imageops::FilterType;

use crate::error::{DpxError, Result};

/// A resampling algorithm choice for the per-tier resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleMethod {
    /// Pick a filter per resize: Lanczos3 when shrinking, CatmullRom
    /// when enlarging.
    #[default]
    Automatic,
    NearestNeighbour,
    Bilinear,
    Bicubic,
    BicubicSmoother,
    BicubicSharper,
}

impl ResampleMethod {
    /// All method names accepted by [`ResampleMethod::parse`].
    pub const NAMES: [&'static str; 6] = [
        "automatic",
        "nearest",
        "bilinear",
        "bicubic",
        "bicubic-smoother",
        "bicubic-sharper",
    ];

    /// Parse a method name.
    ///
    /// Accepts the canonical names plus a few common spellings.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "automatic" | "auto" => Ok(ResampleMethod::Automatic),
            "nearest" | "nearest-neighbour" | "nearest-neighbor" => {
                Ok(ResampleMethod::NearestNeighbour)
            }
            "bilinear" => Ok(ResampleMethod::Bilinear),
            "bicubic" => Ok(ResampleMethod::Bicubic),
            "bicubic-smoother" | "smoother" => Ok(ResampleMethod::BicubicSmoother),
            "bicubic-sharper" | "sharper" => Ok(ResampleMethod::BicubicSharper),
            _ => Err(DpxError::Parse {
                message: format!("Unknown resample method '{}'", s),
                help: Some(format!("Valid methods: {}", Self::NAMES.join(", "))),
            }),
        }
    }

    /// Canonical name of this method.
    pub fn name(&self) -> &'static str {
        match self {
            ResampleMethod::Automatic => "automatic",
            ResampleMethod::NearestNeighbour => "nearest",
            ResampleMethod::Bilinear => "bilinear",
            ResampleMethod::Bicubic => "bicubic",
            ResampleMethod::BicubicSmoother => "bicubic-smoother",
            ResampleMethod::BicubicSharper => "bicubic-sharper",
        }
    }

    /// Concrete filter for resizing from `from_width` to `to_width`.
    pub fn filter_for(&self, from_width: u32, to_width: u32) -> FilterType {
        match self {
            ResampleMethod::Automatic => {
                if to_width < from_width {
                    FilterType::Lanczos3
                } else {
                    FilterType::CatmullRom
                }
            }
            ResampleMethod::NearestNeighbour => FilterType::Nearest,
            ResampleMethod::Bilinear => FilterType::Triangle,
            ResampleMethod::Bicubic => FilterType::CatmullRom,
            ResampleMethod::BicubicSmoother => FilterType::Gaussian,
            ResampleMethod::BicubicSharper => FilterType::Lanczos3,
        }
    }
}
