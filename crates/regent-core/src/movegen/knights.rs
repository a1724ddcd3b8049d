//! Knight destination generation.

use crate::board::Board;
use crate::piece::Piece;

use super::{Destinations, Mode, push_step};

/// The eight knight jumps, clockwise from north-north-west.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
];

/// Generate knight destinations.
pub(super) fn gen_knight(board: &Board, piece: &Piece, mode: Mode, list: &mut Destinations) {
    let from = piece.location();
    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(df, dr) {
            push_step(board, to, piece.color(), mode, list);
        }
    }
}
