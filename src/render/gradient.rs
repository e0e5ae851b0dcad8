//! Vertical brand gradients.
//!
//! Each row is the base colour scaled by a factor that runs linearly from
//! `1 + intensity` at the top to `1 - intensity` at the bottom.

use crate::types::Colour;

use super::surface::{RasterSurface, Rect};

/// Default canvas width (Instagram story).
pub const DEFAULT_WIDTH: u32 = 1024;

/// Default canvas height (Instagram story).
pub const DEFAULT_HEIGHT: u32 = 1920;

/// Default top/bottom brightness spread.
pub const DEFAULT_INTENSITY: f64 = 0.15;

/// Parameters for a single gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientParams {
    pub base: Colour,
    pub intensity: f64,
    pub width: u32,
    pub height: u32,
}

impl GradientParams {
    /// Default-sized gradient for `base`.
    pub fn new(base: Colour) -> Self {
        Self {
            base,
            intensity: DEFAULT_INTENSITY,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Colour of row `y`.
    pub fn row_colour(&self, y: u32) -> Colour {
        self.base
            .scaled(gradient_factor(y, self.height, self.intensity))
            .with_alpha(255)
    }
}

/// Brightness factor for row `y` of a `height`-row gradient.
pub fn gradient_factor(y: u32, height: u32, intensity: f64) -> f64 {
    let progress = if height == 0 {
        0.0
    } else {
        y as f64 / height as f64
    };
    1.0 + intensity - 2.0 * intensity * progress
}

/// Render a gradient onto a fresh surface.
pub fn render_gradient<S: RasterSurface>(params: &GradientParams) -> S {
    let mut surface = S::blank(params.width, params.height, params.base);
    for y in 0..params.height {
        surface.fill_rect(Rect::new(0, y, params.width, 1), params.row_colour(y));
    }
    surface
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BrandPalette;
    use image::RgbaImage;

    #[test]
    fn test_factor_endpoints() {
        assert!((gradient_factor(0, 1920, 0.15) - 1.15).abs() < 1e-12);
        assert!((gradient_factor(960, 1920, 0.15) - 1.0).abs() < 1e-12);

        let last = gradient_factor(1919, 1920, 0.15);
        assert!(last > 0.85 && last < 0.851);
    }

    #[test]
    fn test_factor_zero_height() {
        assert!((gradient_factor(0, 0, 0.2) - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_yellow_rows() {
        let params = GradientParams::new(Colour::rgb(0xdb, 0xab, 0x45));
        assert_eq!(params.row_colour(0), Colour::rgb(251, 196, 79));
        assert_eq!(params.row_colour(1919), Colour::rgb(186, 145, 58));
    }

    #[test]
    fn test_full_size_gradient_for_every_brand_colour() {
        let palette = BrandPalette::brand();
        for (_, base) in palette.iter() {
            let params = GradientParams::new(base);
            let img: RgbaImage = render_gradient(&params);

            assert_eq!(img.dimensions(), (1024, 1920));

            let top = img.pixel(0, 0);
            assert_eq!(top, base.scaled(1.0 + DEFAULT_INTENSITY));
            assert_eq!(img.pixel(1023, 0), top);

            let bottom = img.pixel(512, 1919);
            assert_eq!(bottom, base.scaled(1.0 - DEFAULT_INTENSITY));

            let middle = img.pixel(0, 960);
            for (m, b) in middle.to_rgb().iter().zip(base.to_rgb()) {
                assert!((*m as i32 - b as i32).abs() <= 1);
            }
        }
    }

    #[test]
    fn test_gradient_darkens_monotonically() {
        let params = GradientParams::new(Colour::rgb(0xa9, 0xc0, 0xcf)).with_size(4, 64);
        let img: RgbaImage = render_gradient(&params);
        for y in 1..64 {
            let above = img.pixel(0, y - 1);
            let here = img.pixel(0, y);
            assert!(here.r <= above.r && here.g <= above.g && here.b <= above.b);
        }
    }

    #[test]
    fn test_large_intensity_clamps() {
        let params = GradientParams::new(Colour::rgb(200, 100, 50))
            .with_intensity(2.0)
            .with_size(1, 10);
        assert_eq!(params.row_colour(0), Colour::rgb(255, 255, 150));
        assert_eq!(params.row_colour(9), Colour::BLACK);
    }
}
