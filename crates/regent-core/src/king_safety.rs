//! Check, immobility and checkmate detection.
//!
//! Nothing here keeps incremental attack or pin state. Questions about
//! hypothetical moves are answered by copying the board, playing the move on
//! the copy, and asking [`is_in_check`] again.

use std::fmt;

use tracing::debug;

use crate::board::Board;
use crate::color::Color;
use crate::coordinate::Coordinate;
use crate::error::BoardError;
use crate::movegen::{Destinations, Mode, destinations, is_attacked};
use crate::piece::Piece;

/// Combined safety verdict for one side's king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KingStatus {
    /// Not in check, and the side has at least one safe move.
    Safe,
    /// In check, with a way out.
    Check,
    /// In check, the king cannot move, and no other piece resolves it.
    Checkmate,
    /// Not in check, but no piece of the side has a safe move.
    Stalemate,
}

impl fmt::Display for KingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            KingStatus::Safe => "safe",
            KingStatus::Check => "check",
            KingStatus::Checkmate => "checkmate",
            KingStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// Return `true` if some opposing piece attacks the king's square.
pub fn is_in_check(board: &Board, king: &Piece) -> bool {
    is_attacked(board, king.location(), king.color().flip())
}

/// Return `true` if the king has no `Normal`-mode destination.
pub fn is_surrounded(board: &Board, king: &Piece) -> bool {
    destinations(board, king, Mode::Normal).is_empty()
}

/// Return `true` if some other piece of the king's color has a move after
/// which the king is no longer in check.
pub fn has_intercept(board: &Board, king: &Piece) -> bool {
    resolving_move(board, king).is_some()
}

/// Find the first non-king move, in roster order, that leaves the king out of check.
///
/// Each candidate is played on an independent copy of `board`.
pub fn resolving_move(board: &Board, king: &Piece) -> Option<(Coordinate, Coordinate)> {
    for piece in board.pieces_of(king.color()) {
        if piece.is_king() {
            continue;
        }
        let from = piece.location();
        for &to in &destinations(board, piece, Mode::Normal) {
            let mut simulated = board.deep_copy();
            if simulated.move_piece(from, to).is_err() {
                continue;
            }
            if !is_in_check(&simulated, king) {
                debug!(%from, %to, "found check-resolving move");
                return Some((from, to));
            }
        }
    }
    None
}

/// Return `true` if the king is in check, cannot move, and no ally can resolve it.
pub fn is_checkmate(board: &Board, king: &Piece) -> bool {
    let mate = is_in_check(board, king) && is_surrounded(board, king) && !has_intercept(board, king);
    debug!(king = %king, mate, "checkmate query");
    mate
}

/// `Normal`-mode destinations of `piece` that do not leave its own king in check.
///
/// A side without a king has nothing to protect, so every `Normal`-mode
/// destination is kept.
pub fn safe_destinations(board: &Board, piece: &Piece) -> Destinations {
    let candidates = destinations(board, piece, Mode::Normal);
    if board.king(piece.color()).is_err() {
        return candidates;
    }

    let from = piece.location();
    let mut safe = Destinations::new();
    for &to in &candidates {
        let mut simulated = board.deep_copy();
        if simulated.move_piece(from, to).is_err() {
            continue;
        }
        let exposed = simulated
            .king(piece.color())
            .map_or(true, |king| is_in_check(&simulated, king));
        if !exposed {
            safe.push(to);
        }
    }
    safe
}

/// Return `true` if some piece of `color` has a safe destination.
pub fn has_safe_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|piece| !safe_destinations(board, piece).is_empty())
}

/// Return `true` if the king is not in check but its side has no safe move.
pub fn is_stalemate(board: &Board, king: &Piece) -> bool {
    !is_in_check(board, king) && !has_safe_move(board, king.color())
}

/// Classify the position of `color`'s king.
///
/// Fails with [`BoardError::MissingKing`] if `color` has no king.
pub fn evaluate(board: &Board, color: Color) -> Result<KingStatus, BoardError> {
    let king = board.king(color)?;
    let status = if is_in_check(board, king) {
        if is_surrounded(board, king) && !has_intercept(board, king) {
            KingStatus::Checkmate
        } else {
            KingStatus::Check
        }
    } else if has_safe_move(board, color) {
        KingStatus::Safe
    } else {
        KingStatus::Stalemate
    };
    debug!(%color, %status, "king safety verdict");
    Ok(status)
}
