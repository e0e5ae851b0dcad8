//! Machine-readable run reports.
//!
//! Printed as JSON on stdout when `--json` is passed; status lines still go
//! to stderr.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{BrandError, Result};
use crate::types::{BrandColour, Colour};

use super::{BorderSpec, OutputFormat};

/// Pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl From<(u32, u32)> for Size {
    fn from((w, h): (u32, u32)) -> Self {
        Self { w, h }
    }
}

/// One written gradient background.
#[derive(Debug, Clone, Serialize)]
pub struct GradientReport {
    pub colour: BrandColour,
    pub hex: String,
    pub path: PathBuf,
    pub size: Size,
    pub intensity: f64,
}

/// One written bordered image.
#[derive(Debug, Clone, Serialize)]
pub struct BorderReport {
    pub colour: BrandColour,
    pub hex: String,
    pub path: PathBuf,
    pub original: Size,
    pub size: Size,
    pub border: BorderSpec,
    pub format: OutputFormat,
}

impl BorderReport {
    pub fn new(
        colour: BrandColour,
        value: Colour,
        path: PathBuf,
        original: (u32, u32),
        size: (u32, u32),
        border: BorderSpec,
        format: OutputFormat,
    ) -> Self {
        Self {
            colour,
            hex: value.to_string(),
            path,
            original: original.into(),
            size: size.into(),
            border,
            format,
        }
    }
}

/// Serialize reports as pretty JSON.
pub fn to_json<T: Serialize>(reports: &[T]) -> Result<String> {
    serde_json::to_string_pretty(reports).map_err(|e| BrandError::Validation {
        message: format!("Failed to serialize report: {}", e),
        help: None,
    })
}
