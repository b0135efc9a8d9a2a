use ndarray::Array2;

use super::*;

/// Replays one predetermined color grid on every call, for scripted games and replays.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator {
    palette: Palette,
    colors: Array2<Color>,
}

impl FixedBoardGenerator {
    pub fn new(palette: Palette, colors: Array2<Color>) -> Result<Self> {
        // build once so a bad layout is rejected here instead of on first use
        Board::from_colors(palette.clone(), colors.clone())?;
        Ok(Self { palette, colors })
    }

    /// Replays the current colors of `board`.
    pub fn from_board(board: &Board) -> Self {
        Self {
            palette: board.palette().clone(),
            colors: board.colors(),
        }
    }

    pub fn config(&self) -> GameConfig {
        // validated in Board::from_colors
        GameConfig::new_unchecked(self.colors.nrows() as Coord, self.palette.len())
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Board> {
        config.validate()?;
        if config != self.config() {
            log::warn!(
                "Requested {:?} but the fixed layout is {:?}",
                config,
                self.config()
            );
            return Err(GameError::InvalidBoardShape);
        }
        Board::from_colors(self.palette.clone(), self.colors.clone())
    }
}
