use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Master palette every game draws its colors from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Pink,
    Cyan,
    Magenta,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
        Self::Pink,
        Self::Cyan,
        Self::Magenta,
    ];
}

/// The subset of [`Color::ALL`] a particular board was painted with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette(Vec<Color>);

impl Palette {
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Result<Self> {
        let mut seen = Vec::new();
        for color in colors {
            if seen.contains(&color) {
                return Err(GameError::DuplicatePaletteColor(color));
            }
            seen.push(color);
        }

        let count = u8::try_from(seen.len()).unwrap_or(u8::MAX);
        if !(MIN_COLORS..=MAX_COLORS).contains(&count) {
            return Err(ConfigError::ColorCountOutOfRange(count).into());
        }

        Ok(Self(seen))
    }

    pub fn len(&self) -> u8 {
        // bounded by MAX_COLORS on construction
        self.0.len() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
