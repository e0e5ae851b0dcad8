//! Border geometry and compositing.

use serde::Serialize;

use crate::error::{BrandError, Result};
use crate::types::Colour;

use super::surface::{PasteMode, RasterSurface, Rect};

/// Minimum border used when squaring, and the uniform border otherwise.
pub const DEFAULT_MIN_BORDER: u32 = 20;

/// Largest canvas, in pixels, a border may produce (1 GiB of RGBA).
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Padding added to each edge, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderSpec {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl BorderSpec {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same padding on every edge.
    pub const fn uniform(size: u32) -> Self {
        Self::new(size, size, size, size)
    }

    /// Canvas size after padding a `width x height` image.
    ///
    /// Fails when a side does not fit in `u32` or the canvas would exceed
    /// [`MAX_CANVAS_PIXELS`].
    pub fn padded_size(&self, width: u32, height: u32) -> Result<(u32, u32)> {
        let new_width = width
            .checked_add(self.left)
            .and_then(|w| w.checked_add(self.right));
        let new_height = height
            .checked_add(self.top)
            .and_then(|h| h.checked_add(self.bottom));

        match (new_width, new_height) {
            (Some(w), Some(h)) if u64::from(w) * u64::from(h) <= MAX_CANVAS_PIXELS => Ok((w, h)),
            _ => Err(BrandError::Validation {
                message: format!(
                    "Border (top={}, right={}, bottom={}, left={}) is too large for a {}x{} image",
                    self.top, self.right, self.bottom, self.left, width, height
                ),
                help: Some(format!(
                    "The bordered image may hold at most {} pixels",
                    MAX_CANVAS_PIXELS
                )),
            }),
        }
    }
}

/// How the border for an image is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMode {
    /// Uniform border of the given size; never squares.
    Fixed(u32),
    /// Grow the shorter sides so the canvas ends up square.
    Square { min_border: u32 },
    /// Uniform minimum border, no squaring.
    Uniform { min_border: u32 },
}

impl BorderMode {
    /// Pick a mode from the command-line switches. A fixed size always wins.
    pub fn from_options(border_size: Option<u32>, make_square: bool, min_border: u32) -> Self {
        match border_size {
            Some(size) => BorderMode::Fixed(size),
            None if make_square => BorderMode::Square { min_border },
            None => BorderMode::Uniform { min_border },
        }
    }

    /// Border for a `width x height` image.
    pub fn resolve(self, width: u32, height: u32) -> Result<BorderSpec> {
        let border = match self {
            BorderMode::Fixed(size) => BorderSpec::uniform(size),
            BorderMode::Square { min_border } => {
                calculate_border_for_square(width, height, min_border)?
            }
            BorderMode::Uniform { min_border } => BorderSpec::uniform(min_border),
        };
        border.padded_size(width, height)?;
        Ok(border)
    }
}

impl Default for BorderMode {
    fn default() -> Self {
        BorderMode::Square {
            min_border: DEFAULT_MIN_BORDER,
        }
    }
}

/// Border that makes a `width x height` image exactly square.
///
/// The extra padding goes on the short axis, split evenly; an odd leftover
/// pixel lands on the bottom (wide images) or the right (tall images).
pub fn calculate_border_for_square(
    width: u32,
    height: u32,
    min_border: u32,
) -> Result<BorderSpec> {
    let diff = width.abs_diff(height);
    let extra = diff / 2;
    let odd = diff % 2;

    let too_large = || BrandError::Validation {
        message: format!(
            "Minimum border {} is too large to square a {}x{} image",
            min_border, width, height
        ),
        help: Some("Use a smaller --min-border".to_string()),
    };
    let grown = min_border.checked_add(extra).ok_or_else(too_large)?;
    let grown_odd = grown.checked_add(odd).ok_or_else(too_large)?;

    Ok(if width > height {
        BorderSpec::new(grown, min_border, grown_odd, min_border)
    } else if height > width {
        BorderSpec::new(min_border, grown_odd, min_border, grown)
    } else {
        BorderSpec::uniform(min_border)
    })
}

/// Pad `src` with `border` painted in `colour`.
///
/// Opaque sources land on a canvas pre-filled with the border colour. For
/// sources with alpha only the four border strips are painted, the interior
/// stays transparent, and the source is composited through its own alpha.
pub fn compose_border<S: RasterSurface>(
    src: &S,
    has_alpha: bool,
    border: BorderSpec,
    colour: Colour,
) -> Result<S> {
    let (width, height) = src.dimensions();
    let (new_width, new_height) = border.padded_size(width, height)?;
    let colour = colour.with_alpha(255);

    if !has_alpha {
        let mut canvas = S::blank(new_width, new_height, colour);
        canvas.paste(src, border.left, border.top, PasteMode::Replace);
        return Ok(canvas);
    }

    let mut canvas = S::blank(new_width, new_height, Colour::TRANSPARENT);
    for strip in border_strips(border, new_width, new_height) {
        if !strip.is_empty() {
            canvas.fill_rect(strip, colour);
        }
    }
    canvas.paste(src, border.left, border.top, PasteMode::Masked);
    Ok(canvas)
}

/// Top, bottom, left and right strips. Side strips span only the rows
/// between the top and bottom strips. `width` and `height` are the padded
/// canvas size, so they already include every edge.
fn border_strips(border: BorderSpec, width: u32, height: u32) -> [Rect; 4] {
    let inner_height = height - border.top - border.bottom;
    [
        Rect::new(0, 0, width, border.top),
        Rect::new(0, height - border.bottom, width, border.bottom),
        Rect::new(0, border.top, border.left, inner_height),
        Rect::new(width - border.right, border.top, border.right, inner_height),
    ]
}
