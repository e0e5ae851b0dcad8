//! Project configuration (brandframe.yaml).
//!
//! Every field is optional. Command-line flags override whatever is set
//! here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BrandError, Result};
use crate::render::{
    OutputFormat, DEFAULT_HEIGHT, DEFAULT_INTENSITY, DEFAULT_MIN_BORDER, DEFAULT_WIDTH,
};
use crate::types::Colour;

/// Config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "brandframe.yaml";

/// Project configuration loaded from brandframe.yaml.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gradient: GradientConfig,
    pub border: BorderConfig,
}

/// Defaults for `brandframe gradients`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// Output directory for gradient backgrounds.
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Top/bottom brightness spread.
    pub intensity: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("instagram_backgrounds"),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            intensity: DEFAULT_INTENSITY,
        }
    }
}

/// Defaults for `brandframe border`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    /// Minimum border when squaring; uniform border with squaring off.
    pub min_border: u32,
    /// Output format for batch mode.
    pub format: OutputFormat,
    /// Background that transparent pixels are flattened onto for JPEG.
    pub background: String,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            min_border: DEFAULT_MIN_BORDER,
            format: OutputFormat::Png,
            background: "#ffffff".to_string(),
        }
    }
}

impl BorderConfig {
    /// Parsed JPEG flatten background.
    pub fn background_colour(&self) -> Result<Colour> {
        Colour::from_hex(&self.background)
    }
}

impl Config {
    /// Load config from a brandframe.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BrandError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse and validate config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content).map_err(|e| BrandError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Explicit path if given, else `brandframe.yaml` in `dir` if present,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values no run could use.
    ///
    /// Intensities outside (0, 1) are kept: channels simply clamp.
    pub fn validate(&self) -> Result<()> {
        if self.gradient.width == 0 || self.gradient.height == 0 {
            return Err(BrandError::Config {
                message: format!(
                    "Gradient size must be non-zero, got {}x{}",
                    self.gradient.width, self.gradient.height
                ),
                help: Some("Set gradient.width and gradient.height to at least 1".to_string()),
            });
        }

        validate_intensity(self.gradient.intensity)?;
        self.border.background_colour()?;
        Ok(())
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| BrandError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}

/// Reject NaN and infinite intensities.
pub fn validate_intensity(intensity: f64) -> Result<()> {
    if intensity.is_finite() {
        Ok(())
    } else {
        Err(BrandError::Validation {
            message: format!("Gradient intensity must be a finite number, got {}", intensity),
            help: Some("Typical values are between 0.05 and 0.3".to_string()),
        })
    }
}
