use clap::Parser;
use miette::Result;

use dpx::cli::{Cli, Commands};
use dpx::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Export(args) => dpx::cli::export::run(args, &printer)?,
        Commands::Init(args) => dpx::cli::init::run(args, &printer)?,
        Commands::Tiers(args) => dpx::cli::tiers::run(args, &printer)?,
        Commands::Completions(args) => dpx::cli::completions::run(args)?,
    }

    Ok(())
}
