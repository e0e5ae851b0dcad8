//! Raster surface abstraction.
//!
//! Gradient and border rendering only create a canvas, fill rectangles,
//! paste one surface onto another and read pixels back.

use image::{imageops, Rgba, RgbaImage};

use crate::types::Colour;

/// Axis-aligned rectangle in pixel coordinates. `x + width` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// How pasted pixels combine with what is already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteMode {
    /// Source pixels overwrite the destination.
    Replace,
    /// Source is composited over the destination using its own alpha.
    Masked,
}

/// Minimal drawing capability needed by the renderers.
pub trait RasterSurface: Sized {
    /// Create a `width x height` surface filled with `fill`.
    fn blank(width: u32, height: u32, fill: Colour) -> Self;

    /// Surface size as `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Fill `rect` with `colour`, clipped to the surface.
    fn fill_rect(&mut self, rect: Rect, colour: Colour);

    /// Paste `src` with its top-left corner at `(x, y)`, clipped to the surface.
    fn paste(&mut self, src: &Self, x: u32, y: u32, mode: PasteMode);

    /// Read a single pixel.
    fn pixel(&self, x: u32, y: u32) -> Colour;
}

impl RasterSurface for RgbaImage {
    fn blank(width: u32, height: u32, fill: Colour) -> Self {
        RgbaImage::from_pixel(width, height, Rgba(fill.to_rgba()))
    }

    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        let (width, height) = RgbaImage::dimensions(self);
        let x_end = rect.x.saturating_add(rect.width).min(width);
        let y_end = rect.y.saturating_add(rect.height).min(height);
        if rect.x >= x_end || rect.y >= y_end {
            return;
        }

        let strip = RgbaImage::from_pixel(x_end - rect.x, y_end - rect.y, Rgba(colour.to_rgba()));
        imageops::replace(self, &strip, i64::from(rect.x), i64::from(rect.y));
    }

    fn paste(&mut self, src: &Self, x: u32, y: u32, mode: PasteMode) {
        match mode {
            PasteMode::Replace => imageops::replace(self, src, i64::from(x), i64::from(y)),
            PasteMode::Masked => paste_masked(self, src, x, y),
        }
    }

    fn pixel(&self, x: u32, y: u32) -> Colour {
        Colour::from(self.get_pixel(x, y).0)
    }
}

/// Composite `src` onto `dst` pixel by pixel with [`composite_over`].
///
/// `imageops::overlay` blends into transparent pixels instead of copying
/// them, which loses the colour of fully transparent source pixels.
fn paste_masked(dst: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    let (width, height) = dst.dimensions();
    let (src_w, src_h) = src.dimensions();

    for sy in 0..src_h {
        let dy = y.saturating_add(sy);
        if dy >= height {
            break;
        }
        for sx in 0..src_w {
            let dx = x.saturating_add(sx);
            if dx >= width {
                break;
            }
            let top = Colour::from(src.get_pixel(sx, sy).0);
            let bottom = Colour::from(dst.get_pixel(dx, dy).0);
            dst.put_pixel(dx, dy, Rgba(composite_over(top, bottom).to_rgba()));
        }
    }
}

/// Composite `top` over `bottom` with straight (non-premultiplied) alpha.
///
/// A fully transparent destination takes the source pixel verbatim, so a
/// masked paste onto an empty region reproduces the source exactly.
pub fn composite_over(top: Colour, bottom: Colour) -> Colour {
    if top.a == 255 || bottom.a == 0 {
        return top;
    }
    if top.a == 0 {
        return bottom;
    }

    let ta = top.a as f32 / 255.0;
    let ba = bottom.a as f32 / 255.0;
    let out_a = ta + ba * (1.0 - ta);

    let channel = |t: u8, b: u8| {
        let value = (t as f32 * ta + b as f32 * ba * (1.0 - ta)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };

    Colour::new(
        channel(top.r, bottom.r),
        channel(top.g, bottom.g),
        channel(top.b, bottom.b),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fills_every_pixel() {
        let img = RgbaImage::blank(3, 2, Colour::rgb(1, 2, 3));
        assert_eq!(RasterSurface::dimensions(&img), (3, 2));
        for (_, _, p) in img.enumerate_pixels() {
            assert_eq!(p.0, [1, 2, 3, 255]);
        }
    }

    #[test]
    fn test_fill_rect_is_exclusive_and_clipped() {
        let mut img = RgbaImage::blank(4, 4, Colour::TRANSPARENT);
        img.fill_rect(Rect::new(2, 2, 10, 10), Colour::WHITE);

        assert_eq!(img.pixel(1, 1), Colour::TRANSPARENT);
        assert_eq!(img.pixel(2, 2), Colour::WHITE);
        assert_eq!(img.pixel(3, 3), Colour::WHITE);
    }

    #[test]
    fn test_fill_empty_rect_is_noop() {
        let mut img = RgbaImage::blank(2, 2, Colour::BLACK);
        img.fill_rect(Rect::new(0, 0, 0, 2), Colour::WHITE);
        assert_eq!(img.pixel(0, 0), Colour::BLACK);
    }

    #[test]
    fn test_paste_replace_overwrites_alpha() {
        let mut canvas = RgbaImage::blank(3, 3, Colour::WHITE);
        let src = RgbaImage::blank(1, 1, Colour::new(10, 20, 30, 0));
        canvas.paste(&src, 1, 1, PasteMode::Replace);

        assert_eq!(canvas.pixel(1, 1), Colour::new(10, 20, 30, 0));
        assert_eq!(canvas.pixel(0, 0), Colour::WHITE);
    }

    #[test]
    fn test_paste_masked_keeps_destination_under_transparent_source() {
        let mut canvas = RgbaImage::blank(2, 2, Colour::rgb(200, 0, 0));
        let src = RgbaImage::blank(2, 2, Colour::TRANSPARENT);
        canvas.paste(&src, 0, 0, PasteMode::Masked);
        assert_eq!(canvas.pixel(1, 1), Colour::rgb(200, 0, 0));
    }

    #[test]
    fn test_paste_masked_onto_empty_is_exact() {
        let mut canvas = RgbaImage::blank(2, 1, Colour::TRANSPARENT);
        let mut src = RgbaImage::blank(2, 1, Colour::TRANSPARENT);
        src.put_pixel(0, 0, Rgba([12, 34, 56, 78]));
        src.put_pixel(1, 0, Rgba([90, 80, 70, 0]));

        canvas.paste(&src, 0, 0, PasteMode::Masked);

        assert_eq!(canvas.pixel(0, 0), Colour::new(12, 34, 56, 78));
        assert_eq!(canvas.pixel(1, 0), Colour::new(90, 80, 70, 0));
    }

    #[test]
    fn test_paste_is_clipped() {
        let mut canvas = RgbaImage::blank(2, 2, Colour::BLACK);
        let src = RgbaImage::blank(4, 4, Colour::WHITE);
        canvas.paste(&src, 1, 1, PasteMode::Replace);

        assert_eq!(canvas.pixel(0, 0), Colour::BLACK);
        assert_eq!(canvas.pixel(1, 1), Colour::WHITE);
    }

    #[test]
    fn test_composite_half_alpha_over_opaque() {
        let out = composite_over(Colour::new(255, 255, 255, 128), Colour::BLACK);
        assert_eq!(out.a, 255);
        assert!((out.r as i32 - 128).abs() <= 1);
    }
}
