use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only copy of everything a renderer needs to draw a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord,
    pub palette: Palette,
    pub colors: Array2<Color>,
    pub flooded: Array2<bool>,
    pub target: Color,
    pub attempts: Attempts,
    pub max_attempts: Attempts,
    pub status: GameStatus,
}

impl Snapshot {
    pub fn from_game<G>(game: &Game<G>) -> Self {
        let board = game.board();
        let size = board.size();
        let shape = (usize::from(size), usize::from(size));

        let mut flooded = Array2::from_elem(shape, false);
        for cell in board.cells().filter(|cell| cell.is_flooded()) {
            flooded[cell.coords().to_nd_index()] = true;
        }

        Self {
            size,
            palette: board.palette().clone(),
            colors: board.colors(),
            flooded,
            target: game.target_color(),
            attempts: game.attempts(),
            max_attempts: game.max_attempts(),
            status: game.status(),
        }
    }

    pub fn color_at(&self, coords: Coord2) -> Color {
        self.colors[coords.to_nd_index()]
    }

    pub fn is_flooded(&self, coords: Coord2) -> bool {
        self.flooded[coords.to_nd_index()]
    }
}
