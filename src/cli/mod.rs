pub mod completions;
pub mod export;
pub mod init;
pub mod tiers;

use clap::{Parser, Subcommand};

/// dpx - density-bucket drawable exporter
#[derive(Parser, Debug)]
#[command(name = "dpx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export density-scaled PNGs from source artwork
    Export(export::ExportArgs),

    /// Initialize a project (generates dpx.yaml)
    Init(init::InitArgs),

    /// List the density tier table
    Tiers(tiers::TiersArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
