use thiserror::Error;

use crate::{Color, Coord};

/// Out-of-bounds game configuration. The size and color-count bounds are reported separately.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size must be between 2 and 26 cells per side (inclusive), got {0}")]
    SizeOutOfRange(Coord),
    #[error("Color count must be between 3 and 8 (inclusive), got {0}")]
    ColorCountOutOfRange(u8),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Color {0:?} is not part of the board palette")]
    ColorNotInPalette(Color),
    #[error("Color {0:?} appears more than once in the palette")]
    DuplicatePaletteColor(Color),
}

pub type Result<T> = core::result::Result<T, GameError>;
