//! The 3x3 grid of cells.

use crate::coord::{BOARD_SIZE, Coord};
use crate::types::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Row-major read snapshot of every cell.
pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Fixed-size tic-tac-toe board.
///
/// Cells are only ever written through [`Board::place_marker`], which
/// refuses to overwrite an occupied cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    pub(crate) cells: Grid,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, 2]`.
    #[track_caller]
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.at(checked(row, column))
    }

    /// Returns the cell at a validated coordinate.
    pub fn at(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.column()]
    }

    /// Places `marker` at `(row, column)` unless the cell is already taken.
    ///
    /// Returns whether the cell was written. Placing onto an occupied cell
    /// leaves the board untouched.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, 2]`.
    #[track_caller]
    pub fn place_marker(&mut self, row: usize, column: usize, marker: Marker) -> bool {
        self.place(checked(row, column), marker)
    }

    /// Places `marker` at a validated coordinate unless the cell is taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coord, marker: Marker) -> bool {
        let cell = &mut self.cells[coord.row()][coord.column()];
        if !cell.is_empty() {
            trace!(%coord, ?cell, "Cell already occupied");
            return false;
        }
        *cell = Cell::Occupied(marker);
        true
    }

    /// Copy of the whole grid, row-major.
    pub fn grid(&self) -> Grid {
        self.cells
    }

    /// Clears every cell back to empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = Grid::default();
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(|coord| self.at(*coord).is_empty())
    }
}

#[track_caller]
fn checked(row: usize, column: usize) -> Coord {
    match Coord::new(row, column) {
        Ok(coord) => coord,
        Err(err) => panic!("board access out of range: {}", err.message),
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                write!(f, "{}", cell.symbol())?;
                if c < BOARD_SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if r < BOARD_SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
