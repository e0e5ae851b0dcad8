//! brandframe - Brand-coloured gradient backgrounds and image borders
//!
//! Generates vertical gradient backgrounds from the brand palette and pads
//! images with brand-coloured borders, optionally squaring them.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use cli::border::{add_border, create_all_variants, BorderSettings};
pub use config::Config;
pub use error::{BrandError, Result};
pub use render::{
    calculate_border_for_square, compose_border, render_gradient, BorderMode, BorderSpec,
    GradientParams, OutputFormat, RasterSurface,
};
pub use types::{BrandColour, BrandPalette, Colour};
