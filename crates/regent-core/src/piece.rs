//! Colored pieces with their current location.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::coordinate::Coordinate;
use crate::movegen::{Mode, destinations};
use crate::piece_kind::PieceKind;

/// A piece on the board: color, kind, where it stands, and whether it has moved.
///
/// Pieces are plain values. The [`Board`] owns the authoritative copy of every
/// piece it holds; a `Piece` obtained from [`Board::piece_at`] is a snapshot
/// that goes stale once the board moves or captures it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    location: Coordinate,
    moved_before: bool,
}

impl Piece {
    /// Create an unmoved piece at `location`.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind, location: Coordinate) -> Piece {
        Piece {
            color,
            kind,
            location,
            moved_before: false,
        }
    }

    /// Return the color.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Return the kind.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Return the square this piece occupies.
    #[inline]
    pub const fn location(&self) -> Coordinate {
        self.location
    }

    /// Return `true` once the piece has been relocated at least once.
    #[inline]
    pub const fn moved_before(&self) -> bool {
        self.moved_before
    }

    /// Return `true` if this is a king.
    #[inline]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Relocate the piece. Only the board calls this, so grid and location never drift.
    #[inline]
    pub(crate) fn relocate(&mut self, to: Coordinate) {
        self.location = to;
        self.moved_before = true;
    }

    #[inline]
    pub(crate) fn mark_moved(&mut self) {
        self.moved_before = true;
    }

    /// Return the Unicode glyph for this piece.
    ///
    /// Light pieces use the filled glyphs, Dark pieces the outlined ones.
    pub const fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::Light, PieceKind::King) => '♚',
            (Color::Light, PieceKind::Queen) => '♛',
            (Color::Light, PieceKind::Rook) => '♜',
            (Color::Light, PieceKind::Bishop) => '♝',
            (Color::Light, PieceKind::Knight) => '♞',
            (Color::Light, PieceKind::Pawn) => '♟',
            (Color::Dark, PieceKind::King) => '♔',
            (Color::Dark, PieceKind::Queen) => '♕',
            (Color::Dark, PieceKind::Rook) => '♖',
            (Color::Dark, PieceKind::Bishop) => '♗',
            (Color::Dark, PieceKind::Knight) => '♘',
            (Color::Dark, PieceKind::Pawn) => '♙',
        }
    }

    /// Return the ASCII tag: uppercase for Light, lowercase for Dark.
    #[inline]
    pub const fn letter(&self) -> char {
        let base = self.kind.letter();
        match self.color {
            Color::Light => base.to_ascii_uppercase(),
            Color::Dark => base,
        }
    }

    /// Squares this piece may move to right now, ignoring whose turn it is.
    pub fn valid_locations(&self, board: &Board) -> Vec<Coordinate> {
        destinations(board, self, Mode::Normal).as_slice().to_vec()
    }

    /// Move this piece to `destination` if that is one of its `Normal`-mode destinations.
    ///
    /// Captures whatever stands on `destination`. Returns `false` and leaves the
    /// board untouched when the move is not available, or when this value no
    /// longer matches the piece the board holds at its location.
    pub fn try_move(&self, destination: Coordinate, board: &mut Board) -> bool {
        if board.piece_at(self.location) != Some(self) {
            return false;
        }
        if !destinations(board, self, Mode::Normal).contains(destination) {
            return false;
        }
        board.move_piece(self.location, destination).is_ok()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} {} ({}) @ {}>",
            self.color,
            self.kind,
            self.symbol(),
            self.location
        )
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::board::Board;
    use crate::color::Color;
    use crate::coordinate::Coordinate;
    use crate::piece_kind::PieceKind;

    fn at(file: i32, rank: i32) -> Coordinate {
        Coordinate::new(file, rank).unwrap()
    }

    #[test]
    fn symbols_are_unique_per_color_and_kind() {
        let mut seen = Vec::new();
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let symbol = Piece::new(color, kind, Coordinate::ORIGIN).symbol();
                assert!(!seen.contains(&symbol), "duplicate symbol {symbol}");
                seen.push(symbol);
            }
        }
    }

    #[test]
    fn letters() {
        assert_eq!(Piece::new(Color::Light, PieceKind::Knight, at(1, 7)).letter(), 'N');
        assert_eq!(Piece::new(Color::Dark, PieceKind::Queen, at(4, 0)).letter(), 'q');
    }

    #[test]
    fn display_format() {
        let king = Piece::new(Color::Light, PieceKind::King, at(4, 7));
        assert_eq!(format!("{king}"), "<Light King (♚) @ (4, 7)>");
        assert_eq!(format!("{king:?}"), "K(4, 7)");
    }

    #[test]
    fn try_move_accepts_listed_destination() {
        let mut board = Board::starting_position();
        let knight = *board.piece_at(at(1, 7)).unwrap();
        assert!(knight.try_move(at(2, 5), &mut board));
        assert!(board.piece_at(at(1, 7)).is_none());
        let moved = board.piece_at(at(2, 5)).unwrap();
        assert_eq!(moved.kind(), PieceKind::Knight);
        assert_eq!(moved.location(), at(2, 5));
        assert!(moved.moved_before());
    }

    #[test]
    fn try_move_rejects_unlisted_destination() {
        let mut board = Board::starting_position();
        let before = board.clone();
        let rook = *board.piece_at(at(0, 7)).unwrap();
        assert!(!rook.try_move(at(0, 3), &mut board), "rook is blocked by its own pawn");
        assert_eq!(board, before);
    }

    #[test]
    fn try_move_rejects_stale_piece() {
        let mut board = Board::starting_position();
        let pawn = *board.piece_at(at(4, 6)).unwrap();
        assert!(pawn.try_move(at(4, 4), &mut board));
        // The old snapshot still claims (4, 6) and has not moved.
        assert!(!pawn.try_move(at(4, 5), &mut board));
        assert!(board.piece_at(at(4, 5)).is_none());
    }

    #[test]
    fn valid_locations_for_opening_pawn() {
        let board = Board::starting_position();
        let pawn = board.piece_at(at(0, 6)).unwrap();
        assert_eq!(pawn.valid_locations(&board), vec![at(0, 5), at(0, 4)]);
    }
}
