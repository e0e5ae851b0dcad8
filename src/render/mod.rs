//! Rendering module for brandframe.
//!
//! Gradient and border rendering run against the [`RasterSurface`] trait;
//! `encode` handles the trip to and from disk.

mod border;
mod encode;
mod gradient;
mod report;
mod surface;

pub use border::{
    calculate_border_for_square, compose_border, BorderMode, BorderSpec, DEFAULT_MIN_BORDER,
    MAX_CANVAS_PIXELS,
};
pub use encode::{flatten, load_image, write_image, LoadedImage, OutputFormat};
pub use gradient::{
    gradient_factor, render_gradient, GradientParams, DEFAULT_HEIGHT, DEFAULT_INTENSITY,
    DEFAULT_WIDTH,
};
pub use report::{to_json, BorderReport, GradientReport, Size};
pub use surface::{composite_over, PasteMode, RasterSurface, Rect};
