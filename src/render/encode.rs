//! Image decoding and encoding.
//!
//! PNG is written with the best compression setting. JPEG has no alpha, so
//! transparent canvases are flattened onto an opaque background first and
//! encoded at quality 100.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use clap::ValueEnum;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{BrandError, Result};
use crate::types::Colour;

use super::surface::composite_over;

/// Supported output containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    #[value(alias = "jpeg")]
    #[serde(alias = "jpeg")]
    Jpg,
}

impl OutputFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
        }
    }

    /// Format implied by a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpg),
            _ => None,
        }
    }

    /// Format implied by a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| BrandError::UnsupportedFormat {
                path: path.to_path_buf(),
                help: Some("Use a .png, .jpg or .jpeg output path".to_string()),
            })
    }
}

/// A decoded image in RGBA form, remembering whether the source had alpha.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub pixels: RgbaImage,
    pub has_alpha: bool,
}

impl LoadedImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Decode an image from disk.
///
/// Paletted images with a transparency entry decode with an alpha channel,
/// so they are treated as transparent too.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path).map_err(|e| BrandError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;

    let has_alpha = img.color().has_alpha();
    Ok(LoadedImage {
        pixels: img.into_rgba8(),
        has_alpha,
    })
}

/// Write an image, choosing the encoder from `format`.
///
/// When `has_alpha` is false the alpha channel is dropped. When the format
/// cannot store alpha, alpha is flattened onto `background`.
pub fn write_image(
    img: &RgbaImage,
    has_alpha: bool,
    path: &Path,
    format: OutputFormat,
    background: Colour,
) -> Result<()> {
    let file = File::create(path).map_err(|e| BrandError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create file: {}", e),
    })?;
    let writer = BufWriter::new(file);

    let result = match format {
        OutputFormat::Png => {
            let encoder =
                PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
            let dynamic = if has_alpha {
                DynamicImage::ImageRgba8(img.clone())
            } else {
                DynamicImage::ImageRgb8(to_rgb(img))
            };
            dynamic.write_with_encoder(encoder)
        }
        OutputFormat::Jpg => {
            let encoder = JpegEncoder::new_with_quality(writer, 100);
            let rgb = if has_alpha {
                flatten(img, background)
            } else {
                to_rgb(img)
            };
            DynamicImage::ImageRgb8(rgb).write_with_encoder(encoder)
        }
    };

    result.map_err(|e| BrandError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to write {}: {}", format.extension().to_uppercase(), e),
    })
}

/// Composite every pixel over an opaque background, dropping alpha.
pub fn flatten(img: &RgbaImage, background: Colour) -> RgbImage {
    let background = background.with_alpha(255);
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let top = Colour::from(img.get_pixel(x, y).0);
        image::Rgb(composite_over(top, background).to_rgb())
    })
}

fn to_rgb(img: &RgbaImage) -> RgbImage {
    DynamicImage::ImageRgba8(img.clone()).into_rgb8()
}
