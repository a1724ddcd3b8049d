//! Sets of board coordinates packed into a 64-bit integer, one bit per square.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::coordinate::Coordinate;

/// A set of coordinates; bit `rank * 8 + file` marks membership.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// No squares.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// All 64 squares.
    pub const FULL: SquareSet = SquareSet(!0);

    /// Create a set from raw bits.
    #[inline]
    pub const fn new(bits: u64) -> SquareSet {
        SquareSet(bits)
    }

    /// Return the underlying `u64`.
    #[inline]
    pub const fn inner(self) -> u64 {
        self.0
    }

    /// Return `true` if no squares are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count the squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if `at` is in the set.
    #[inline]
    pub const fn contains(self, at: Coordinate) -> bool {
        (self.0 & (1u64 << at.index())) != 0
    }

    /// Return a new set with `at` added.
    #[inline]
    pub const fn with(self, at: Coordinate) -> SquareSet {
        SquareSet(self.0 | (1u64 << at.index()))
    }

    /// Add `at` to the set.
    #[inline]
    pub fn insert(&mut self, at: Coordinate) {
        self.0 |= 1u64 << at.index();
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl Not for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn not(self) -> SquareSet {
        SquareSet(!self.0)
    }
}

impl FromIterator<Coordinate> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        for at in iter {
            set.insert(at);
        }
        set
    }
}

impl Iterator for SquareSet {
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Coordinate> {
        if self.0 == 0 {
            return None;
        }
        let at = Coordinate::from_index(self.0.trailing_zeros() as u8);
        self.0 &= self.0 - 1;
        at
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for SquareSet {}

// Rank 0 printed first, matching the board's textual layout.
impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for rank in 0..8 {
            write!(f, "  {rank} ")?;
            for file in 0..8 {
                if (self.0 >> (rank * 8 + file)) & 1 == 1 {
                    write!(f, "x ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "    0 1 2 3 4 5 6 7")
    }
}
