//! Border command implementation.
//!
//! Pads an image with a brand-coloured border, growing the short sides so
//! the result is square unless told otherwise.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::error::{BrandError, Result};
use crate::output::{dimensions, display_path, plural, Printer};
use crate::render::{
    compose_border, load_image, to_json, write_image, BorderMode, BorderReport, LoadedImage,
    OutputFormat,
};
use crate::types::{BrandColour, BrandPalette, Colour};

/// Add brand-coloured borders to an image
#[derive(Args, Debug)]
pub struct BorderArgs {
    /// Input image path
    pub image: PathBuf,

    /// Border colour (if not using --all)
    #[arg(long, short, value_enum)]
    pub color: Option<BrandColour>,

    /// Output path for a single image
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Create variants with all colours
    #[arg(long, short)]
    pub all: bool,

    /// Fixed border size in pixels (overrides auto-square)
    #[arg(long, short)]
    pub border_size: Option<u32>,

    /// Disable automatic squaring of the image
    #[arg(long)]
    pub no_square: bool,

    /// Minimum border in pixels when squaring (default: 20)
    #[arg(long, short)]
    pub min_border: Option<u32>,

    /// Output directory for variants (used with --all)
    #[arg(long, short = 'd')]
    pub output_dir: Option<PathBuf>,

    /// Output format for variants (default: png)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print a JSON report of written files to stdout
    #[arg(long)]
    pub json: bool,
}

/// Everything a border run needs besides the input and output paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSettings {
    pub mode: BorderMode,
    /// Flatten background for formats without alpha.
    pub background: Colour,
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self {
            mode: BorderMode::default(),
            background: Colour::WHITE,
        }
    }
}

pub fn run(
    args: BorderArgs,
    config: &Config,
    palette: &BrandPalette,
    printer: &Printer,
) -> Result<Vec<BorderReport>> {
    ensure_input_exists(&args.image)?;

    let min_border = args.min_border.unwrap_or(config.border.min_border);
    let settings = BorderSettings {
        mode: BorderMode::from_options(args.border_size, !args.no_square, min_border),
        background: config.border.background_colour()?,
    };
    let format = args.format.unwrap_or(config.border.format);

    let reports = match args.color {
        Some(colour) if !args.all => {
            let output = match &args.output {
                Some(path) => path.clone(),
                None => default_single_output(&args.image, colour, format),
            };
            vec![add_border(&args.image, &output, colour, settings, palette, printer)?]
        }
        _ => create_all_variants(
            &args.image,
            args.output_dir.as_deref(),
            settings,
            format,
            palette,
            printer,
        )?,
    };

    if args.json {
        println!("{}", to_json(&reports)?);
    }

    Ok(reports)
}

/// Add a border in `colour` to the image at `input` and write it to `output`.
///
/// The encoder is picked from the output path's extension.
pub fn add_border(
    input: &Path,
    output: &Path,
    colour: BrandColour,
    settings: BorderSettings,
    palette: &BrandPalette,
    printer: &Printer,
) -> Result<BorderReport> {
    ensure_input_exists(input)?;
    let format = OutputFormat::from_path(output)?;
    let img = load_image(input)?;
    write_variant(&img, output, colour, format, settings, palette, printer)
}

/// Write one bordered variant per brand colour as `<stem>_<colour>.<ext>`.
///
/// Defaults to `<input_stem>_bordered/` beside the input. Variants are
/// written in palette order; a failure stops the batch and leaves earlier
/// variants on disk.
pub fn create_all_variants(
    input: &Path,
    output_dir: Option<&Path>,
    settings: BorderSettings,
    format: OutputFormat,
    palette: &BrandPalette,
    printer: &Printer,
) -> Result<Vec<BorderReport>> {
    ensure_input_exists(input)?;

    let stem = file_stem(input);
    let output_dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => sibling(input, &format!("{}_bordered", stem)),
    };

    fs::create_dir_all(&output_dir).map_err(|e| BrandError::Io {
        path: output_dir.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| stem.clone());
    printer.status("Bordering", &file_name);
    printer.info("Output", &display_path(&output_dir));

    let img = load_image(input)?;
    let mut reports = Vec::with_capacity(palette.len());

    for (colour, _) in palette.iter() {
        let path = output_dir.join(format!("{}_{}.{}", stem, colour.name(), format.extension()));
        reports.push(write_variant(&img, &path, colour, format, settings, palette, printer)?);
    }

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(reports.len(), "variant", "variants"),
            display_path(&output_dir)
        ),
    );

    Ok(reports)
}

fn write_variant(
    img: &LoadedImage,
    path: &Path,
    colour: BrandColour,
    format: OutputFormat,
    settings: BorderSettings,
    palette: &BrandPalette,
    printer: &Printer,
) -> Result<BorderReport> {
    let original = (img.width(), img.height());
    let border = settings.mode.resolve(original.0, original.1)?;
    let value = palette.get(colour);

    let bordered = compose_border(&img.pixels, img.has_alpha, border, value)?;
    write_image(&bordered, img.has_alpha, path, format, settings.background)?;

    let report = BorderReport::new(
        colour,
        value,
        path.to_path_buf(),
        original,
        bordered.dimensions(),
        border,
        format,
    );

    printer.status("Created", &display_path(path));
    printer.info(
        "Size",
        &format!(
            "{} -> {}",
            dimensions(report.original.w, report.original.h),
            dimensions(report.size.w, report.size.h)
        ),
    );
    printer.info(
        "Border",
        &format!(
            "top={}, right={}, bottom={}, left={}",
            border.top, border.right, border.bottom, border.left
        ),
    );
    printer.info(
        "Colour",
        &format!("{} {}", colour, printer.dim(&format!("({})", report.hex))),
    );

    Ok(report)
}

/// Report a missing input before anything is read or written.
fn ensure_input_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(BrandError::InputNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// `<stem>_<colour><suffix>` beside the input. Falls back to `format` when
/// the input's own extension is not something we can write.
fn default_single_output(input: &Path, colour: BrandColour, format: OutputFormat) -> PathBuf {
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| OutputFormat::from_extension(e).is_some())
        .unwrap_or(format.extension())
        .to_string();

    sibling(
        input,
        &format!("{}_{}.{}", file_stem(input), colour.name(), extension),
    )
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

fn sibling(path: &Path, name: &str) -> PathBuf {
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
