#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use color::*;
pub use error::*;
pub use flood::*;
pub use game::*;
pub use generator::*;
pub use layout::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod color;
mod error;
mod flood;
mod game;
mod generator;
mod layout;
mod snapshot;
mod types;

pub const MIN_SIZE: Coord = 2;
pub const MAX_SIZE: Coord = 26;
pub const MIN_COLORS: u8 = 3;
pub const MAX_COLORS: u8 = Color::ALL.len() as u8;

/// Counter type for player attempts.
pub type Attempts = u16;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: Coord,
    pub colors: u8,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, colors: u8) -> Self {
        Self { size, colors }
    }

    pub fn new(size: Coord, colors: u8) -> Result<Self> {
        let config = Self::new_unchecked(size, colors);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_COLORS..=MAX_COLORS).contains(&self.colors) {
            return Err(ConfigError::ColorCountOutOfRange(self.colors).into());
        }
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::SizeOutOfRange(self.size).into());
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Attempts allowed before the game is lost, growing with both board size and color count.
    pub const fn max_attempts(&self) -> Attempts {
        let size = self.size as Attempts;
        let extra_colors = (self.colors as Attempts).saturating_sub(3);
        size + extra_colors * (size / 3)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(14, 6)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Selected,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Selected => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// The game is already over.
    NoChange,
    /// One layer was processed and the frontier still has cells.
    Flooded,
    /// The frontier ran out, the next tick starts a new episode.
    EpisodeComplete,
    Won,
    Lost,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            NoChange => false,
            Flooded => true,
            EpisodeComplete => true,
            Won => true,
            Lost => true,
        }
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
