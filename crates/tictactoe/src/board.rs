//! The 3x3 board and its cell-level rules.

use super::error::GameError;
use super::line::Line;
use super::types::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of rows and columns.
pub const BOARD_SIZE: usize = 3;

/// 3x3 tic-tac-toe board.
///
/// A cell goes from `Empty` to `Marked` once and stays there until
/// [`Board::reset`] clears the whole grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    fn check_bounds(row: usize, column: usize) -> Result<(), GameError> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { row, column });
        }
        Ok(())
    }

    /// Puts `marker` on an empty cell.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if either coordinate is past the edge, checked first.
    /// `CellOccupied` if the cell already holds a marker. The board is left
    /// untouched on failure.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, column: usize, marker: Marker) -> Result<(), GameError> {
        Self::check_bounds(row, column)?;

        if !self.cells[row][column].is_empty() {
            debug!("Space is already taken");
            return Err(GameError::CellOccupied { row, column });
        }

        self.cells[row][column] = Cell::Marked(marker);
        debug!("Assignment complete");
        Ok(())
    }

    /// Places a raw cell value, for callers that hold a `Cell` rather than
    /// a `Marker`.
    ///
    /// Checks run in the order bounds, occupancy, marker, so an `Empty`
    /// value aimed at an occupied cell reports `CellOccupied`.
    #[instrument(skip(self))]
    pub fn place_cell(&mut self, row: usize, column: usize, cell: Cell) -> Result<(), GameError> {
        Self::check_bounds(row, column)?;
        if !self.cells[row][column].is_empty() {
            return Err(GameError::CellOccupied { row, column });
        }
        let marker = Marker::try_from(cell)?;
        self.place(row, column, marker)
    }

    /// Returns the cell at (row, column).
    pub fn marker_at(&self, row: usize, column: usize) -> Result<Cell, GameError> {
        Self::check_bounds(row, column)?;
        Ok(self.cells[row][column])
    }

    /// Returns row `i`, left to right.
    pub fn row(&self, i: usize) -> Result<[Cell; BOARD_SIZE], GameError> {
        Self::check_bounds(i, 0)?;
        Ok(self.cells[i])
    }

    /// Returns column `j`, top to bottom.
    pub fn column(&self, j: usize) -> Result<[Cell; BOARD_SIZE], GameError> {
        Self::check_bounds(0, j)?;
        Ok([self.cells[0][j], self.cells[1][j], self.cells[2][j]])
    }

    /// Returns the three cells of `line`, in the order of
    /// [`Line::coordinates`].
    pub fn line(&self, line: Line) -> [Cell; BOARD_SIZE] {
        line.coordinates().map(|(row, column)| self.cells[row][column])
    }

    /// Checks if (row, column) is on the board and empty.
    pub fn is_empty_at(&self, row: usize, column: usize) -> bool {
        matches!(self.marker_at(row, column), Ok(Cell::Empty))
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |column| (row, column)))
            .filter(|&(row, column)| self.cells[row][column].is_empty())
            .collect()
    }

    /// Number of cells holding a marker.
    pub fn filled_count(&self) -> usize {
        self.cells().filter(|cell| !cell.is_empty()).count()
    }

    /// Checks if every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| !cell.is_empty())
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        debug!("Board reset");
    }

    /// Snapshot for a UI layer.
    pub fn render(&self) -> BoardView {
        BoardView {
            rows: self.cells.map(|row| row.map(Cell::symbol)),
            filled: self.filled_count(),
            full: self.is_full(),
        }
    }
}

impl std::fmt::Display for Board {
    /// Each cell symbol followed by a space, one row per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serializable board snapshot handed to a UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Cell symbols (`x`, `o`, `-`) row by row.
    pub rows: [[char; BOARD_SIZE]; BOARD_SIZE],
    /// Number of cells holding a marker.
    pub filled: usize,
    /// True once no empty cell remains.
    pub full: bool,
}
