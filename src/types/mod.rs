//! Core domain types for brandframe.
//!
//! - `Colour` - RGBA colour values
//! - `BrandColour` - the six named brand colours
//! - `BrandPalette` - the name -> colour table shared by every command

mod brand;
mod colour;
mod palette;

pub use brand::BrandColour;
pub use colour::Colour;
pub use palette::BrandPalette;
