//! Tiers command implementation.
//!
//! Prints the density tier table, optionally with the output widths a
//! given source width would produce at each tier.

use clap::Args;
use serde::Serialize;

use crate::density::{tier_by_name, width_for_tier, TIERS};
use crate::error::{DpxError, Result};
use crate::output::Printer;

/// List the density tier table
#[derive(Args, Debug)]
pub struct TiersArgs {
    /// Show per-tier output widths for this source width
    #[arg(long)]
    pub width: Option<u32>,

    /// Density the source width is authored at
    #[arg(long, default_value = "xhdpi")]
    pub density: String,

    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TierRow {
    name: &'static str,
    scale: f64,
    folder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
}

fn tier_rows(width: Option<u32>, density: &str) -> Result<Vec<TierRow>> {
    let source = tier_by_name(density)?;
    Ok(TIERS
        .iter()
        .map(|t| TierRow {
            name: t.name,
            scale: t.scale,
            folder: t.folder_name(),
            width: width.map(|w| width_for_tier(w, source, *t)),
        })
        .collect())
}

pub fn run(args: TiersArgs, printer: &Printer) -> Result<()> {
    let rows = tier_rows(args.width, &args.density)?;

    if args.json {
        let json = serde_json::to_string_pretty(&rows).map_err(|e| DpxError::Parse {
            message: format!("Failed to encode tier table: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    for row in &rows {
        let mut line = format!("{:<8} x{:<5} {}", row.name, row.scale, printer.dim(&row.folder));
        if let Some(w) = row.width {
            line.push_str(&format!("  {}px", w));
        }
        println!("{}", line);
    }

    Ok(())
}
