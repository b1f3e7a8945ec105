//! Bounds-checked board coordinates.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 3;

/// A zero-based `(row, column)` position that is known to be on the board.
///
/// Row 0 is the top row and column 0 the left-most column. Constructing a
/// `Coord` is the only place bounds are checked; everything that accepts a
/// `Coord` can index the grid without further validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: usize,
    column: usize,
}

impl Coord {
    /// Creates a coordinate, rejecting anything outside `[0, BOARD_SIZE)`.
    #[track_caller]
    #[instrument]
    pub fn new(row: usize, column: usize) -> Result<Self, CoordError> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(CoordError::new(format!(
                "cell ({}, {}) is off the {}x{} board",
                row, column, BOARD_SIZE, BOARD_SIZE
            )));
        }
        Ok(Self { row, column })
    }

    pub(crate) const fn new_unchecked(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < BOARD_SIZE * BOARD_SIZE)
            .then(|| Self::new_unchecked(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self.row * BOARD_SIZE + self.column
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn column(self) -> usize {
        self.column
    }

    /// True when the cell lies on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.column
    }

    /// True when the cell lies on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.column == BOARD_SIZE - 1
    }

    /// Every coordinate on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE * BOARD_SIZE).map(|i| Self::new_unchecked(i / BOARD_SIZE, i % BOARD_SIZE))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = CoordError;

    #[track_caller]
    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, column)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.column)
    }
}

/// Parses `"row,column"` or `"row column"`.
impl FromStr for Coord {
    type Err = CoordError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Exactly one separator: a single comma, or whitespace when no comma is present.
        let pair = match s.split_once(',') {
            Some((row, column)) => Some((row.trim(), column.trim())),
            None => {
                let mut parts = s.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(row), Some(column), None) => Some((row, column)),
                    _ => None,
                }
            }
        };
        let Some((row, column)) = pair else {
            return Err(CoordError::new(format!("expected \"row,column\", got {:?}", s)));
        };

        let parse = |part: &str| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CoordError::new(format!(
                    "invalid coordinate {:?}: expected digits",
                    part
                )));
            }
            part.parse::<usize>()
                .map_err(|e| CoordError::new(format!("invalid coordinate {:?}: {}", part, e)))
        };

        Self::new(parse(row)?, parse(column)?)
    }
}

/// Coordinate rejected before reaching the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Coordinate error: {} at {}:{}", message, file, line)]
pub struct CoordError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CoordError {
    /// Creates a new coordinate error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
