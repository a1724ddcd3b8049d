//! Per-kind destination generation.
//!
//! Every generator is a total function of (board, piece, mode). Off-board
//! squares are never produced: neighbours are derived with
//! [`Coordinate::offset`], which refuses to leave the board.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::color::Color;
use crate::coordinate::Coordinate;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square_set::SquareSet;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{gen_bishop, gen_queen, gen_rook};

/// What a generator is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Squares the piece may relocate to right now: empty squares it reaches,
    /// or squares holding an opposing piece it can capture.
    Normal,
    /// Every square the piece threatens, for king-safety queries. Squares held
    /// by the piece's own color are included, and slider rays run through the
    /// opposing king instead of stopping on it.
    AttackMap,
}

/// Maximum number of destinations a single piece can produce (a centralized queen has 27).
const CAPACITY: usize = 32;

/// Stack-allocated, ordered, duplicate-free list of destination squares.
#[derive(Clone, Copy)]
pub struct Destinations {
    squares: [Coordinate; CAPACITY],
    len: u8,
}

impl Destinations {
    /// Create an empty list.
    pub fn new() -> Destinations {
        Destinations {
            squares: [Coordinate::ORIGIN; CAPACITY],
            len: 0,
        }
    }

    /// Append `at` unless it is already present.
    #[inline]
    pub fn push(&mut self, at: Coordinate) {
        if self.contains(at) {
            return;
        }
        debug_assert!((self.len as usize) < CAPACITY);
        self.squares[self.len as usize] = at;
        self.len += 1;
    }

    /// Return `true` if `at` is in the list.
    #[inline]
    pub fn contains(&self, at: Coordinate) -> bool {
        self.as_slice().contains(&at)
    }

    /// Return the number of destinations.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if there are no destinations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the destinations in generation order.
    #[inline]
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.squares[..self.len as usize]
    }

    /// Collect the destinations into a [`SquareSet`].
    #[inline]
    pub fn to_square_set(&self) -> SquareSet {
        self.as_slice().iter().copied().collect()
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Destinations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a Destinations {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate the destinations of `piece` on `board` in the given mode.
pub fn destinations(board: &Board, piece: &Piece, mode: Mode) -> Destinations {
    let mut list = Destinations::new();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, piece, mode, &mut list),
        PieceKind::Knight => gen_knight(board, piece, mode, &mut list),
        PieceKind::Bishop => gen_bishop(board, piece, mode, &mut list),
        PieceKind::Rook => gen_rook(board, piece, mode, &mut list),
        PieceKind::Queen => gen_queen(board, piece, mode, &mut list),
        PieceKind::King => gen_king(board, piece, mode, &mut list),
    }
    list
}

/// Union of the `AttackMap`-mode destinations of every piece of `color`.
pub fn attack_map(board: &Board, color: Color) -> SquareSet {
    let mut attacked = SquareSet::EMPTY;
    for piece in board.pieces_of(color) {
        for &at in &destinations(board, piece, Mode::AttackMap) {
            attacked.insert(at);
        }
    }
    attacked
}

/// Return `true` if any piece of `by` attacks `at`.
///
/// Stops at the first attacker found rather than building the full map.
pub fn is_attacked(board: &Board, at: Coordinate, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|piece| destinations(board, piece, Mode::AttackMap).contains(at))
}

/// Classify `to` for a piece of color `us`: `None` when empty, otherwise
/// whether it holds a friendly piece.
#[inline]
fn occupant(board: &Board, to: Coordinate, us: Color) -> Option<bool> {
    board.color_at(to).map(|color| color == us)
}

/// Push `to` if a piece of color `us` may land on it (or, in `AttackMap`
/// mode, covers it). Used by the fixed-offset generators.
#[inline]
fn push_step(board: &Board, to: Coordinate, us: Color, mode: Mode, list: &mut Destinations) {
    match (occupant(board, to, us), mode) {
        (Some(true), Mode::Normal) => {}
        _ => list.push(to),
    }
}
