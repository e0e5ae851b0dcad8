//! The brand palette table shared by every command.

use super::{BrandColour, Colour};

/// Fixed brand values, indexed in `BrandColour::ALL` order.
const BRAND_TABLE: [Colour; 6] = [
    Colour::rgb(0xdb, 0xab, 0x45),
    Colour::rgb(0x87, 0x8e, 0x64),
    Colour::rgb(0x41, 0x55, 0x6b),
    Colour::rgb(0x67, 0x34, 0x17),
    Colour::rgb(0xcf, 0xc1, 0xa6),
    Colour::rgb(0xa9, 0xc0, 0xcf),
];

/// An immutable name -> colour table, passed to commands as `&BrandPalette`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandPalette {
    values: [Colour; 6],
}

impl BrandPalette {
    /// The brand palette.
    pub fn brand() -> Self {
        Self {
            values: BRAND_TABLE,
        }
    }

    /// Get the colour for a brand entry.
    pub fn get(&self, colour: BrandColour) -> Colour {
        self.values[colour.index()]
    }

    /// Iterate entries in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (BrandColour, Colour)> + '_ {
        BrandColour::ALL.into_iter().zip(self.values.iter().copied())
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for BrandPalette {
    fn default() -> Self {
        Self::brand()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_palette_has_six_entries_in_order() {
        let palette = BrandPalette::brand();
        assert_eq!(palette.len(), 6);

        let order: Vec<BrandColour> = palette.iter().map(|(c, _)| c).collect();
        assert_eq!(order, BrandColour::ALL.to_vec());
    }

    #[test]
    fn test_brand_hex_values() {
        let palette = BrandPalette::brand();
        let hex: Vec<String> = palette.iter().map(|(_, v)| v.to_string()).collect();
        assert_eq!(
            hex,
            vec!["#dbab45", "#878e64", "#41556b", "#673417", "#cfc1a6", "#a9c0cf"]
        );
    }

    #[test]
    fn test_get_matches_iteration() {
        let palette = BrandPalette::brand();
        for (colour, value) in palette.iter() {
            assert_eq!(palette.get(colour), value);
        }
        assert_eq!(palette.get(BrandColour::Red), Colour::rgb(0x67, 0x34, 0x17));
        assert_eq!(palette.get(BrandColour::PaleBlue), Colour::rgb(0xa9, 0xc0, 0xcf));
    }

    #[test]
    fn test_every_brand_colour_is_opaque() {
        for (_, value) in BrandPalette::brand().iter() {
            assert_eq!(value.a, 255);
        }
    }
}
