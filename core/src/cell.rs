use serde::{Deserialize, Serialize};

use crate::*;

/// One neighbor slot of a cell. Slots pointing off the board hold [`Neighbor::Empty`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighbor {
    Cell(CellIndex),
    Empty,
}

impl Neighbor {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn index(self) -> Option<CellIndex> {
        match self {
            Self::Cell(index) => Some(index),
            Self::Empty => None,
        }
    }
}

impl Default for Neighbor {
    fn default() -> Self {
        Self::Empty
    }
}

/// A single square of the board.
///
/// `flooded` only ever goes from `false` to `true`; the board is rebuilt rather than unflooded.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    color: Color,
    flooded: bool,
    neighbors: [Neighbor; 4],
}

impl Cell {
    pub(crate) fn new(coords: Coord2, color: Color) -> Self {
        Self {
            coords,
            color,
            flooded: false,
            neighbors: Default::default(),
        }
    }

    pub fn coords(&self) -> Coord2 {
        self.coords
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_flooded(&self) -> bool {
        self.flooded
    }

    pub fn neighbor(&self, direction: Direction) -> Neighbor {
        self.neighbors[direction.slot()]
    }

    /// Indices of the real neighbors, in left, top, right, bottom order.
    pub fn neighbors(&self) -> impl Iterator<Item = CellIndex> + use<> {
        self.neighbors.into_iter().filter_map(Neighbor::index)
    }

    /// Whether this cell joins a flood spreading from a cell that was `previous` and is now `target`.
    ///
    /// Matching `target` as well lets an episode absorb cells that already carry the new color.
    pub fn should_flood(&self, previous: Color, target: Color) -> bool {
        self.color == previous || self.color == target
    }

    pub(crate) fn link(&mut self, direction: Direction, neighbor: Neighbor) {
        self.neighbors[direction.slot()] = neighbor;
    }

    pub(crate) fn paint(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn mark_flooded(&mut self) {
        self.flooded = true;
    }
}
