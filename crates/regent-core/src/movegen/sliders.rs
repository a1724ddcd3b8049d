//! Sliding piece (bishop, rook, queen) destination generation.

use crate::board::Board;
use crate::piece::Piece;

use super::{Destinations, Mode};

/// North, east, south, west.
const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// North-east, south-east, south-west, north-west.
const DIAGONAL: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

/// Generate rook destinations.
pub(super) fn gen_rook(board: &Board, piece: &Piece, mode: Mode, list: &mut Destinations) {
    ray_walk(board, piece, &ORTHOGONAL, mode, list);
}

/// Generate bishop destinations.
pub(super) fn gen_bishop(board: &Board, piece: &Piece, mode: Mode, list: &mut Destinations) {
    ray_walk(board, piece, &DIAGONAL, mode, list);
}

/// Generate queen destinations: the rook walk followed by the bishop walk.
pub(super) fn gen_queen(board: &Board, piece: &Piece, mode: Mode, list: &mut Destinations) {
    gen_rook(board, piece, mode, list);
    gen_bishop(board, piece, mode, list);
}

/// Extend each ray from the piece until the board edge or the first occupied square.
///
/// An opposing piece ends the ray and is included. A friendly piece ends the
/// ray and is included only in `AttackMap` mode. In `AttackMap` mode the
/// opposing king does not end the ray, so a king cannot step back along the
/// line it is attacked on.
fn ray_walk(
    board: &Board,
    piece: &Piece,
    directions: &[(i8, i8)],
    mode: Mode,
    list: &mut Destinations,
) {
    let us = piece.color();
    for &(df, dr) in directions {
        let mut cursor = piece.location();
        while let Some(to) = cursor.offset(df, dr) {
            cursor = to;
            let Some(blocker) = board.piece_at(to) else {
                list.push(to);
                continue;
            };
            if blocker.color() != us {
                list.push(to);
                if mode == Mode::AttackMap && blocker.is_king() {
                    continue;
                }
            } else if mode == Mode::AttackMap {
                list.push(to);
            }
            break;
        }
    }
}
