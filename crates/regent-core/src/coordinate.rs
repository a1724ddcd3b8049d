//! Board coordinates as validated (file, rank) pairs.

use std::fmt;

use crate::error::BoardError;
use crate::square_set::SquareSet;

/// A square on the board, addressed by file (column, x) and rank (row, y).
///
/// Both components are always in `0..8`. Every public constructor is checked,
/// so an off-board coordinate cannot exist.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    file: u8,
    rank: u8,
}

impl Coordinate {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// File 0, rank 0.
    pub const ORIGIN: Coordinate = Coordinate { file: 0, rank: 0 };

    /// Create a coordinate, failing with [`BoardError::OutOfBounds`] off the board.
    pub fn new(file: i32, rank: i32) -> Result<Coordinate, BoardError> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Ok(Coordinate {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(BoardError::OutOfBounds { file, rank })
        }
    }

    /// Create a coordinate without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both components are below 8.
    #[inline]
    pub(crate) const fn new_unchecked(file: u8, rank: u8) -> Coordinate {
        debug_assert!(file < 8 && rank < 8);
        Coordinate { file, rank }
    }

    /// Create a coordinate from a zero-based index (`rank * 8 + file`).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Coordinate> {
        if index < 64 {
            Some(Coordinate {
                file: index % 8,
                rank: index / 8,
            })
        } else {
            None
        }
    }

    /// Return the file (column).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Return the rank (row).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Return the zero-based index (`rank * 8 + file`).
    #[inline]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Step by `(df, dr)`, returning `None` if the result leaves the board.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Coordinate> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            Some(Coordinate {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Return a set containing only this coordinate.
    #[inline]
    pub const fn square_set(self) -> SquareSet {
        SquareSet::new(1u64 << self.index())
    }

    /// Iterate over all 64 coordinates in index order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0u8..64).filter_map(Coordinate::from_index)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate{}", self)
    }
}
