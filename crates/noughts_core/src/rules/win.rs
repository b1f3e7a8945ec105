//! Win detection logic for tic-tac-toe.

use crate::coord::{BOARD_SIZE, Coord};
use crate::{Board, Cell, Marker};
use tracing::instrument;

const fn at(row: usize, column: usize) -> Coord {
    Coord::new_unchecked(row, column)
}

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks whether the marker just placed at `coord` completed a line.
///
/// Only the lines through `coord` are examined: its row, its column, and
/// each diagonal it lies on.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, coord: Coord, marker: Marker) -> bool {
    let owned = |row: usize, column: usize| board.at(at(row, column)) == Cell::Occupied(marker);
    let (row, column) = (coord.row(), coord.column());

    if (0..BOARD_SIZE).all(|c| owned(row, c)) {
        return true;
    }

    if (0..BOARD_SIZE).all(|r| owned(r, column)) {
        return true;
    }

    if coord.on_main_diagonal() && (0..BOARD_SIZE).all(|i| owned(i, i)) {
        return true;
    }

    coord.on_anti_diagonal() && (0..BOARD_SIZE).all(|i| owned(i, BOARD_SIZE - 1 - i))
}

/// Returns the marker filling every cell of `line`, if one does.
pub fn line_owner(board: &Board, line: &[Coord; 3]) -> Option<Marker> {
    let [a, b, c] = *line;
    let first = board.at(a);
    if first == board.at(b) && first == board.at(c) {
        first.marker()
    } else {
        None
    }
}

/// Scans all eight lines for a winner.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Marker> {
    LINES.iter().find_map(|line| line_owner(board, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marker: Marker, cells: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(row, column) in cells {
            board.place_marker(row, column, marker);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in &LINES {
            let mut board = Board::new();
            for coord in line {
                board.place(*coord, Marker::O);
            }
            assert_eq!(winner(&board), Some(Marker::O), "line {:?}", line);
            for coord in line {
                assert!(completes_line(&board, *coord, Marker::O), "line {:?} via {}", line, coord);
                assert!(!completes_line(&board, *coord, Marker::X));
            }
        }
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let board = board_with(Marker::X, &[(0, 0), (0, 1)]);
        assert_eq!(winner(&board), None);
        assert!(!completes_line(&board, Coord::new(0, 1).unwrap(), Marker::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Marker::X, &[(0, 0), (0, 1)]);
        board.place_marker(0, 2, Marker::O);
        assert_eq!(line_owner(&board, &LINES[0]), None);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_diagonals_only_checked_through_member_cells() {
        // Main diagonal complete, but (0, 1) is not on it and its own row
        // and column are incomplete.
        let mut board = board_with(Marker::X, &[(0, 0), (1, 1), (2, 2)]);
        board.place_marker(0, 1, Marker::X);
        assert!(!completes_line(&board, Coord::new(0, 1).unwrap(), Marker::X));
        assert!(completes_line(&board, Coord::new(2, 2).unwrap(), Marker::X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(Marker::O, &[(0, 2), (1, 1), (2, 0)]);
        assert!(completes_line(&board, Coord::new(2, 0).unwrap(), Marker::O));
        assert_eq!(winner(&board), Some(Marker::O));
    }
}
