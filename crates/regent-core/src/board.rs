//! The board: an 8x8 placement grid plus an ordered roster of live pieces per color.

use std::fmt;

use tracing::trace;

use crate::color::Color;
use crate::coordinate::Coordinate;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Placement of a piece by color and kind, as accepted by [`Board::from_grid`].
pub type Placement = Option<(Color, PieceKind)>;

/// Piece placement state.
///
/// The grid is indexed `[rank][file]` and owns every [`Piece`]. Each roster
/// lists the coordinates of one color's live pieces in the order they were
/// added; a piece keeps its roster slot when it moves. Every mutation keeps
/// the two in step:
///
/// - the piece stored at a cell reports that cell as its location;
/// - a piece is in its color's roster iff it occupies exactly one cell;
/// - at most one piece occupies any cell.
///
/// `Clone` yields a fully independent board, which is what intercept search
/// mutates.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    rosters: [Vec<Coordinate>; Color::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
            rosters: [Vec::with_capacity(16), Vec::with_capacity(16)],
        }
    }

    /// Return the standard opening layout.
    ///
    /// Dark occupies ranks 0 and 1, Light ranks 6 and 7. Dark's king stands on
    /// (3, 0) and queen on (4, 0); Light's king on (4, 7) and queen on (3, 7).
    pub fn starting_position() -> Board {
        let mut board = Board::empty();

        for file in 0..8u8 {
            for color in [Color::Dark, Color::Light] {
                board.place(Piece::new(color, PieceKind::Pawn, home(file, color.pawn_rank())));
            }
        }

        for (i, kind) in [PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop]
            .into_iter()
            .enumerate()
        {
            let i = i as u8;
            for color in [Color::Dark, Color::Light] {
                let rank = color.back_rank();
                board.place(Piece::new(color, kind, home(i, rank)));
                board.place(Piece::new(color, kind, home(7 - i, rank)));
            }
        }

        board.place(Piece::new(Color::Dark, PieceKind::King, home(3, 0)));
        board.place(Piece::new(Color::Dark, PieceKind::Queen, home(4, 0)));
        board.place(Piece::new(Color::Light, PieceKind::King, home(4, 7)));
        board.place(Piece::new(Color::Light, PieceKind::Queen, home(3, 7)));

        board
    }

    /// Build a board from an explicit `[rank][file]` grid of placements.
    ///
    /// Rosters are rebuilt by scanning ranks then files. Pawns standing off
    /// their starting rank are marked as having moved, so they lose the
    /// double step.
    pub fn from_grid(placements: [[Placement; 8]; 8]) -> Board {
        let mut board = Board::empty();
        for at in Coordinate::all() {
            let Some((color, kind)) = placements[at.rank() as usize][at.file() as usize] else {
                continue;
            };
            let mut piece = Piece::new(color, kind, at);
            if kind == PieceKind::Pawn && at.rank() != color.pawn_rank() {
                piece.mark_moved();
            }
            board.place(piece);
        }
        board
    }

    /// Return the piece on `at`, if any.
    #[inline]
    pub fn piece_at(&self, at: Coordinate) -> Option<&Piece> {
        self.grid[at.rank() as usize][at.file() as usize].as_ref()
    }

    /// Return `true` if `at` holds a piece.
    #[inline]
    pub fn is_occupied(&self, at: Coordinate) -> bool {
        self.piece_at(at).is_some()
    }

    /// Return the color of the piece on `at`, if any.
    #[inline]
    pub fn color_at(&self, at: Coordinate) -> Option<Color> {
        self.piece_at(at).map(Piece::color)
    }

    /// Iterate over the live pieces of `color` in roster order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.rosters[color.index()]
            .iter()
            .filter_map(|&at| self.piece_at(at))
    }

    /// Number of live pieces of `color`.
    #[inline]
    pub fn count_of(&self, color: Color) -> usize {
        self.rosters[color.index()].len()
    }

    /// Return the king of `color`.
    pub fn king(&self, color: Color) -> Result<&Piece, BoardError> {
        self.pieces_of(color)
            .find(|piece| piece.is_king())
            .ok_or(BoardError::MissingKing { color })
    }

    /// Add `piece` at its own location.
    ///
    /// Fails with [`BoardError::CellOccupied`] if that cell already holds a piece.
    pub fn add_piece(&mut self, piece: Piece) -> Result<(), BoardError> {
        let at = piece.location();
        if self.is_occupied(at) {
            return Err(BoardError::CellOccupied { at });
        }
        self.place(piece);
        Ok(())
    }

    /// Remove and return the piece on `at`. Returns `None` for an empty cell.
    pub fn remove_piece_at(&mut self, at: Coordinate) -> Option<Piece> {
        let piece = self.grid[at.rank() as usize][at.file() as usize].take()?;
        let roster = &mut self.rosters[piece.color().index()];
        if let Some(slot) = roster.iter().position(|&c| c == at) {
            roster.remove(slot);
        }
        trace!(%piece, "removed piece");
        Some(piece)
    }

    /// Move the piece on `from` to `to`, capturing any occupant of `to`.
    ///
    /// No move-rule check happens here; callers go through
    /// [`Piece::try_move`] for that. Returns the captured piece, or
    /// [`BoardError::NoSuchPiece`] if `from` is empty (the board is then unchanged).
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) -> Result<Option<Piece>, BoardError> {
        let Some(mut piece) = self.grid[from.rank() as usize][from.file() as usize].take() else {
            return Err(BoardError::NoSuchPiece { at: from });
        };
        let captured = self.remove_piece_at(to);

        piece.relocate(to);
        self.grid[to.rank() as usize][to.file() as usize] = Some(piece);
        if let Some(slot) = self.rosters[piece.color().index()]
            .iter_mut()
            .find(|c| **c == from)
        {
            *slot = to;
        }

        trace!(%piece, %from, captured = captured.is_some(), "moved piece");
        Ok(captured)
    }

    /// Try to move whatever stands on `from` to `to` under its move rules.
    ///
    /// Fails with [`BoardError::NoSuchPiece`] if `from` is empty; otherwise
    /// behaves like [`Piece::try_move`].
    pub fn move_from(&mut self, from: Coordinate, to: Coordinate) -> Result<bool, BoardError> {
        let piece = *self.piece_at(from).ok_or(BoardError::NoSuchPiece { at: from })?;
        Ok(piece.try_move(to, self))
    }

    /// Return an independent copy for what-if evaluation.
    #[inline]
    pub fn deep_copy(&self) -> Board {
        self.clone()
    }

    /// Check that grid and rosters agree: locations match cells, and every
    /// roster entry points at exactly one cell holding a piece of that color.
    pub fn validate_placement(&self) -> Result<(), BoardError> {
        for at in Coordinate::all() {
            let Some(piece) = self.piece_at(at) else {
                continue;
            };
            let listed = self.rosters[piece.color().index()]
                .iter()
                .filter(|&&c| c == at)
                .count();
            if piece.location() != at || listed != 1 {
                return Err(BoardError::Inconsistent { at });
            }
        }

        for color in Color::ALL {
            for &at in &self.rosters[color.index()] {
                if self.color_at(at) != Some(color) {
                    return Err(BoardError::Inconsistent { at });
                }
            }
        }

        Ok(())
    }

    /// Check placement consistency and that each side has exactly one king.
    pub fn validate(&self) -> Result<(), BoardError> {
        self.validate_placement()?;
        for color in Color::ALL {
            let count = self.pieces_of(color).filter(|p| p.is_king()).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    /// Write `piece` into the grid and append it to its roster.
    ///
    /// The target cell must be empty.
    fn place(&mut self, piece: Piece) {
        let at = piece.location();
        debug_assert!(!self.is_occupied(at));
        self.grid[at.rank() as usize][at.file() as usize] = Some(piece);
        self.rosters[piece.color().index()].push(at);
        trace!(%piece, "placed piece");
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

#[inline]
fn home(file: u8, rank: u8) -> Coordinate {
    Coordinate::new_unchecked(file, rank)
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"")?;
        for rank in 0..8 {
            if rank > 0 {
                write!(f, "/")?;
            }
            for cell in &self.grid[rank] {
                let c = cell.as_ref().map_or('.', Piece::letter);
                write!(f, "{c}")?;
            }
        }
        write!(f, "\")")
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid of piece symbols.
///
/// Rank 0 (Dark's back rank) is printed first.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, row) in self.0.grid.iter().enumerate() {
            write!(f, "{rank}  ")?;
            for (file, cell) in row.iter().enumerate() {
                let c = cell.as_ref().map_or('.', Piece::symbol);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   0 1 2 3 4 5 6 7")
    }
}
