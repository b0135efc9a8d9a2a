use serde::{Deserialize, Serialize};

use crate::*;

/// Screen geometry of a drawn board, used to turn pointer positions into cell coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Top-left corner of the board in pixels.
    pub origin: (i32, i32),
    /// Width and height reserved for the board in pixels.
    pub extent: u32,
    pub size: Coord,
}

impl BoardLayout {
    pub const STANDARD_EXTENT: u32 = 750;
    pub const STANDARD_MARGIN: i32 = 125;

    pub const fn new(size: Coord, origin: (i32, i32), extent: u32) -> Self {
        Self {
            origin,
            extent,
            size,
        }
    }

    /// A 750px board inset by 125px, inside a 1000px square scene.
    pub const fn standard(size: Coord) -> Self {
        Self::new(
            size,
            (Self::STANDARD_MARGIN, Self::STANDARD_MARGIN),
            Self::STANDARD_EXTENT,
        )
    }

    /// Side of one cell in whole pixels. Leftover pixels past the last cell are not part of the board.
    pub const fn cell_extent(&self) -> u32 {
        let size = if self.size == 0 { 1 } else { self.size as u32 };
        let cell = self.extent / size;
        if cell == 0 { 1 } else { cell }
    }

    /// Cell under the point `(x, y)`. Points on the board's top or left edge line are outside.
    pub fn cell_at(&self, (x, y): (i32, i32)) -> Option<Coord2> {
        Some((self.axis(y, self.origin.1)?, self.axis(x, self.origin.0)?))
    }

    /// Pixel center of the cell at `coords`.
    pub fn cell_center(&self, (row, col): Coord2) -> (i32, i32) {
        let cell = self.cell_extent() as i32;
        let center = |start: i32, offset: Coord| start + i32::from(offset) * cell + cell / 2;
        (center(self.origin.0, col), center(self.origin.1, row))
    }

    fn axis(&self, position: i32, start: i32) -> Option<Coord> {
        let offset = position.checked_sub(start).filter(|&offset| offset > 0)?;
        let index = offset.unsigned_abs() / self.cell_extent();
        if index < u32::from(self.size) {
            Coord::try_from(index).ok()
        } else {
            None
        }
    }
}
