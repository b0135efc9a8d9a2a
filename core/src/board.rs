use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Index of the cell every flood starts from, the top-left corner.
pub const ORIGIN: CellIndex = 0;

/// Square grid of cells stored row-major, with adjacency kept as arena indices.
///
/// Serializes as a [`BoardState`] and goes back through [`Board::from_colors`] on load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "BoardState", try_from = "BoardState")]
pub struct Board {
    cells: Array2<Cell>,
    palette: Palette,
}

impl Board {
    /// Builds a board from an explicit color grid, wiring adjacency and flooding the origin.
    pub fn from_colors(palette: Palette, colors: Array2<Color>) -> Result<Self> {
        let (rows, cols) = colors.dim();
        if rows != cols {
            log::warn!("Rejected {}x{} color grid, boards must be square", rows, cols);
            return Err(GameError::InvalidBoardShape);
        }

        let size = Coord::try_from(rows).unwrap_or(Coord::MAX);
        GameConfig::new(size, palette.len())?;

        if let Some(&color) = colors.iter().find(|&&color| !palette.contains(color)) {
            log::warn!("Rejected color grid using {:?} outside of {:?}", color, palette);
            return Err(GameError::ColorNotInPalette(color));
        }

        let mut cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
            Cell::new((row as Coord, col as Coord), colors[[row, col]])
        });

        // slots start out empty, only on-board neighbors get linked
        for cell in cells.iter_mut() {
            for (direction, adjacent) in NeighborIter::new(cell.coords(), size) {
                cell.link(direction, Neighbor::Cell(index_of(adjacent, size)));
            }
        }

        let mut board = Self { cells, palette };
        board.cell_mut(ORIGIN).mark_flooded();
        Ok(board)
    }

    /// Side length.
    pub fn size(&self) -> Coord {
        // bounded by MAX_SIZE on construction
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn origin(&self) -> &Cell {
        self.cell(ORIGIN)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Option<CellIndex> {
        let size = self.size();
        (coords.0 < size && coords.1 < size).then(|| index_of(coords, size))
    }

    pub fn cell(&self, index: CellIndex) -> &Cell {
        &self.cells[coords_of(index, self.size()).to_nd_index()]
    }

    pub(crate) fn cell_mut(&mut self, index: CellIndex) -> &mut Cell {
        let coords = coords_of(index, self.size());
        &mut self.cells[coords.to_nd_index()]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn neighbors(&self, index: CellIndex) -> impl Iterator<Item = &Cell> {
        self.cell(index).neighbors().map(|neighbor| self.cell(neighbor))
    }

    pub fn flooded_count(&self) -> CellCount {
        // at most MAX_SIZE squared
        self.cells.iter().filter(|cell| cell.is_flooded()).count() as CellCount
    }

    pub fn is_fully_flooded(&self) -> bool {
        self.cells.iter().all(Cell::is_flooded)
    }

    /// Color grid, for rendering and replays.
    pub fn colors(&self) -> Array2<Color> {
        self.cells.map(Cell::color)
    }

    #[cfg(test)]
    pub(crate) fn flood_all(&mut self) {
        self.cells.iter_mut().for_each(Cell::mark_flooded);
    }
}

/// Colors and flood flags of a board. Adjacency is derived, so it is not stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    pub palette: Palette,
    pub colors: Array2<Color>,
    pub flooded: Array2<bool>,
}

impl From<Board> for BoardState {
    fn from(board: Board) -> Self {
        Self {
            colors: board.colors(),
            flooded: board.cells.map(Cell::is_flooded),
            palette: board.palette,
        }
    }
}

impl TryFrom<BoardState> for Board {
    type Error = GameError;

    fn try_from(state: BoardState) -> Result<Self> {
        if state.flooded.dim() != state.colors.dim() {
            return Err(GameError::InvalidBoardShape);
        }

        let mut board = Board::from_colors(state.palette, state.colors)?;
        for (cell, &flooded) in board.cells.iter_mut().zip(&state.flooded) {
            if flooded {
                cell.mark_flooded();
            }
        }
        Ok(board)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
