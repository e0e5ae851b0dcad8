//! The closed set of brand colour names.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{BrandError, Result};

/// One of the six brand colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrandColour {
    Yellow,
    Green,
    Blue,
    Red,
    Beige,
    #[value(name = "pale_blue")]
    PaleBlue,
}

impl BrandColour {
    /// Every brand colour, in palette order.
    pub const ALL: [BrandColour; 6] = [
        BrandColour::Yellow,
        BrandColour::Green,
        BrandColour::Blue,
        BrandColour::Red,
        BrandColour::Beige,
        BrandColour::PaleBlue,
    ];

    /// Name used in file names and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            BrandColour::Yellow => "yellow",
            BrandColour::Green => "green",
            BrandColour::Blue => "blue",
            BrandColour::Red => "red",
            BrandColour::Beige => "beige",
            BrandColour::PaleBlue => "pale_blue",
        }
    }

    /// Position in [`BrandColour::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// All valid names, in palette order.
    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|c| c.name().to_string()).collect()
    }
}

impl FromStr for BrandColour {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| BrandError::InvalidColour {
                name: s.to_string(),
                valid: Self::names(),
            })
    }
}

impl fmt::Display for BrandColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
