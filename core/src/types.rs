use serde::{Deserialize, Serialize};

/// Single coordinate axis used for the board side length and row/column positions.
pub type Coord = u8;

/// Count type used for total-cell counts and attempt counters.
pub type CellCount = u16;

/// Row-major position of a cell inside the board arena.
pub type CellIndex = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major arena index of `coords` on a square board with side `size`.
pub const fn index_of((row, col): Coord2, size: Coord) -> CellIndex {
    mult(row, size) + col as CellIndex
}

/// Inverse of [`index_of`].
pub const fn coords_of(index: CellIndex, size: Coord) -> Coord2 {
    let size = size as CellIndex;
    ((index / size) as Coord, (index % size) as Coord)
}

/// The four neighbor slots every cell carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Top,
    Right,
    Bottom,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Left => Right,
            Top => Bottom,
            Right => Left,
            Bottom => Top,
        }
    }

    /// Slot number inside a cell's neighbor array.
    pub const fn slot(self) -> usize {
        self as usize
    }

    const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Left => (0, -1),
            Top => (-1, 0),
            Right => (0, 1),
            Bottom => (1, 0),
        }
    }

    /// Applies this direction to `coords`, returning a value only when it remains on a board of side `size`.
    pub fn step(self, coords: Coord2, size: Coord) -> Option<Coord2> {
        let (row, col) = coords;
        let (d_row, d_col) = self.delta();

        let next_row = row.checked_add_signed(d_row)?;
        if next_row >= size {
            return None;
        }

        let next_col = col.checked_add_signed(d_col)?;
        if next_col >= size {
            return None;
        }

        Some((next_row, next_col))
    }
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, size: Coord) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = (Direction, Coord2);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let direction = *Direction::ALL.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(coords) = direction.step(self.center, self.size) {
                return Some((direction, coords));
            }
        }
    }
}
