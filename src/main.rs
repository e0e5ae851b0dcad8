use std::path::Path;

use clap::Parser;
use miette::Result;

use brandframe::cli::{Cli, Commands};
use brandframe::config::Config;
use brandframe::output::Printer;
use brandframe::types::BrandPalette;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();
    let palette = BrandPalette::brand();

    match cli.command {
        Commands::Gradients(args) => {
            let config = Config::discover(cli.config.as_deref(), Path::new("."))?;
            brandframe::cli::gradients::run(args, &config, &palette, &printer)?;
        }
        Commands::Border(args) => {
            let config = Config::discover(cli.config.as_deref(), Path::new("."))?;
            brandframe::cli::border::run(args, &config, &palette, &printer)?;
        }
        Commands::Palette(args) => brandframe::cli::palette::run(args, &palette)?,
        Commands::Init(args) => brandframe::cli::init::run(args, &printer)?,
        Commands::Completions(args) => brandframe::cli::completions::run(args)?,
    }

    Ok(())
}
