use clap::Args;
use serde::Serialize;

use crate::error::{BrandError, Result};
use crate::types::{BrandColour, BrandPalette};

/// Print the brand colour palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Print the palette as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PaletteEntry {
    name: BrandColour,
    hex: String,
}

pub fn run(args: PaletteArgs, palette: &BrandPalette) -> Result<()> {
    print!("{}", render(palette, args.json)?);
    Ok(())
}

/// Palette listing: `$name: #rrggbb` lines, or a JSON array.
fn render(palette: &BrandPalette, json: bool) -> Result<String> {
    if json {
        let entries: Vec<PaletteEntry> = palette
            .iter()
            .map(|(name, value)| PaletteEntry {
                name,
                hex: value.to_string(),
            })
            .collect();
        let mut out = serde_json::to_string_pretty(&entries).map_err(|e| BrandError::Validation {
            message: format!("Failed to serialize palette: {}", e),
            help: None,
        })?;
        out.push('\n');
        return Ok(out);
    }

    Ok(palette
        .iter()
        .map(|(name, value)| format!("${}: {}\n", name, value))
        .collect())
}
