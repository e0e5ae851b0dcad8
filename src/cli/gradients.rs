//! Gradients command implementation.
//!
//! Writes one vertical gradient background per brand colour.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use image::RgbaImage;

use crate::config::{validate_intensity, Config};
use crate::error::{BrandError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{render_gradient, to_json, write_image, GradientParams, GradientReport, OutputFormat};
use crate::types::{BrandPalette, Colour};

/// Generate gradient backgrounds in every brand colour
#[derive(Args, Debug, Default)]
pub struct GradientsArgs {
    /// Output directory (default: instagram_backgrounds)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Brightness spread; 0.15 is 15% lighter at the top and 15% darker at the bottom
    #[arg(long, short, allow_negative_numbers = true)]
    pub intensity: Option<f64>,

    /// Canvas width in pixels (default: 1024)
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels (default: 1920)
    #[arg(long)]
    pub height: Option<u32>,

    /// Print a JSON report of written files to stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(
    args: GradientsArgs,
    config: &Config,
    palette: &BrandPalette,
    printer: &Printer,
) -> Result<Vec<GradientReport>> {
    let settings = &config.gradient;
    let output = args.output.unwrap_or_else(|| settings.output.clone());
    let intensity = args.intensity.unwrap_or(settings.intensity);
    let width = args.width.unwrap_or(settings.width);
    let height = args.height.unwrap_or(settings.height);

    validate_intensity(intensity)?;
    if width == 0 || height == 0 {
        return Err(BrandError::Validation {
            message: format!("Canvas size must be non-zero, got {}x{}", width, height),
            help: Some("Use --width and --height of at least 1".to_string()),
        });
    }

    fs::create_dir_all(&output).map_err(|e| BrandError::Io {
        path: output.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut reports = Vec::with_capacity(palette.len());

    for (colour, base) in palette.iter() {
        let path = output.join(format!("{}_gradient_square.png", colour.name()));
        let params = GradientParams::new(base)
            .with_intensity(intensity)
            .with_size(width, height);

        let img: RgbaImage = render_gradient(&params);
        write_image(&img, false, &path, OutputFormat::Png, Colour::WHITE)?;
        printer.status("Created", &display_path(&path));

        reports.push(GradientReport {
            colour,
            hex: base.to_string(),
            path,
            size: (width, height).into(),
            intensity,
        });
    }

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(reports.len(), "gradient background", "gradient backgrounds"),
            display_path(&output)
        ),
    );

    if args.json {
        println!("{}", to_json(&reports)?);
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BrandColour;
    use tempfile::tempdir;

    fn small_args(output: PathBuf) -> GradientsArgs {
        GradientsArgs {
            output: Some(output),
            width: Some(8),
            height: Some(20),
            ..Default::default()
        }
    }

    #[test]
    fn test_writes_one_file_per_colour() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("backgrounds");

        let reports = run(
            small_args(output.clone()),
            &Config::default(),
            &BrandPalette::brand(),
            &Printer::new(),
        )
        .unwrap();

        assert_eq!(reports.len(), 6);
        for colour in BrandColour::ALL {
            let path = output.join(format!("{}_gradient_square.png", colour.name()));
            assert!(path.exists(), "{} missing", path.display());
        }
    }

    #[test]
    fn test_output_pixels_match_gradient() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");

        run(
            small_args(output.clone()),
            &Config::default(),
            &BrandPalette::brand(),
            &Printer::new(),
        )
        .unwrap();

        let img = image::open(output.join("yellow_gradient_square.png"))
            .unwrap()
            .to_rgb8();
        assert_eq!(img.dimensions(), (8, 20));

        let base = Colour::rgb(0xdb, 0xab, 0x45);
        assert_eq!(img.get_pixel(0, 0).0, base.scaled(1.15).to_rgb());
        assert_eq!(img.get_pixel(7, 10).0, GradientParams::new(base).with_size(8, 20).row_colour(10).to_rgb());
    }

    #[test]
    fn test_config_defaults_apply() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.gradient.output = dir.path().join("from-config");
        config.gradient.width = 2;
        config.gradient.height = 3;
        config.gradient.intensity = 0.5;

        let reports = run(
            GradientsArgs::default(),
            &config,
            &BrandPalette::brand(),
            &Printer::new(),
        )
        .unwrap();

        assert_eq!(reports[0].intensity, 0.5);
        assert_eq!((reports[0].size.w, reports[0].size.h), (2, 3));
        assert!(dir.path().join("from-config/red_gradient_square.png").exists());
    }

    #[test]
    fn test_rejects_zero_size() {
        let dir = tempdir().unwrap();
        let mut args = small_args(dir.path().join("out"));
        args.height = Some(0);

        let result = run(args, &Config::default(), &BrandPalette::brand(), &Printer::new());
        assert!(matches!(result, Err(BrandError::Validation { .. })));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_rejects_nan_intensity() {
        let dir = tempdir().unwrap();
        let mut args = small_args(dir.path().join("out"));
        args.intensity = Some(f64::NAN);

        assert!(run(args, &Config::default(), &BrandPalette::brand(), &Printer::new()).is_err());
    }
}
