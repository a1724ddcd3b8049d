//! Error types for coordinate construction and board placement.

use crate::color::Color;
use crate::coordinate::Coordinate;

/// Errors raised by [`Coordinate`] construction and [`Board`](crate::board::Board) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A coordinate was requested outside the 8x8 board.
    #[error("coordinate (file {file}, rank {rank}) is off the board")]
    OutOfBounds {
        /// Requested file.
        file: i32,
        /// Requested rank.
        rank: i32,
    },
    /// A piece was added onto a cell that already holds one.
    #[error("cell {at} is already occupied")]
    CellOccupied {
        /// The occupied cell.
        at: Coordinate,
    },
    /// An operation that needs a piece found an empty cell.
    #[error("no piece at {at}")]
    NoSuchPiece {
        /// The empty cell.
        at: Coordinate,
    },
    /// No king of the requested color is on the board.
    #[error("no {color} king on the board")]
    MissingKing {
        /// The side without a king.
        color: Color,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// The grid and the per-color rosters disagree about a cell.
    #[error("grid and piece rosters disagree at {at}")]
    Inconsistent {
        /// The cell where the disagreement was found.
        at: Coordinate,
    },
}

#[cfg(test)]
mod tests {
    use super::BoardError;
    use crate::color::Color;
    use crate::coordinate::Coordinate;

    #[test]
    fn out_of_bounds_display() {
        let err = BoardError::OutOfBounds { file: 8, rank: -1 };
        assert_eq!(format!("{err}"), "coordinate (file 8, rank -1) is off the board");
    }

    #[test]
    fn cell_occupied_display() {
        let at = Coordinate::new(3, 0).unwrap();
        let err = BoardError::CellOccupied { at };
        assert_eq!(format!("{err}"), "cell (3, 0) is already occupied");
    }

    #[test]
    fn king_count_display() {
        let err = BoardError::InvalidKingCount { color: Color::Dark, count: 2 };
        assert_eq!(format!("{err}"), "expected 1 king for Dark, found 2");
    }
}
