//! Pawn destination generation.

use crate::board::Board;
use crate::piece::Piece;

use super::{Destinations, Mode, occupant};

/// Generate pawn destinations.
///
/// `Normal`: a single step onto an empty square, a double step from an
/// unmoved pawn through two empty squares, and diagonal captures of opposing
/// pieces. `AttackMap`: both forward diagonals, whatever stands there.
/// A pawn on its final rank yields nothing in either mode.
pub(super) fn gen_pawn(board: &Board, piece: &Piece, mode: Mode, list: &mut Destinations) {
    let us = piece.color();
    let from = piece.location();
    let dir = us.pawn_direction();

    if mode == Mode::Normal {
        if let Some(one) = from.offset(0, dir)
            && !board.is_occupied(one)
        {
            list.push(one);
            if !piece.moved_before()
                && let Some(two) = one.offset(0, dir)
                && !board.is_occupied(two)
            {
                list.push(two);
            }
        }
    }

    for df in [-1, 1] {
        let Some(to) = from.offset(df, dir) else {
            continue;
        };
        match mode {
            Mode::AttackMap => list.push(to),
            Mode::Normal => {
                if occupant(board, to, us) == Some(false) {
                    list.push(to);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::coordinate::Coordinate;
    use crate::movegen::{Mode, destinations};
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;

    fn at(file: i32, rank: i32) -> Coordinate {
        Coordinate::new(file, rank).unwrap()
    }

    fn pawn_moves(board: &Board, from: Coordinate, mode: Mode) -> Vec<Coordinate> {
        let pawn = board.piece_at(from).unwrap();
        destinations(board, pawn, mode).as_slice().to_vec()
    }

    #[test]
    fn unmoved_pawns_step_once_or_twice() {
        let board = Board::starting_position();
        assert_eq!(pawn_moves(&board, at(4, 6), Mode::Normal), vec![at(4, 5), at(4, 4)]);
        assert_eq!(pawn_moves(&board, at(4, 1), Mode::Normal), vec![at(4, 2), at(4, 3)]);
    }

    #[test]
    fn moved_pawn_steps_once() {
        let mut board = Board::starting_position();
        board.move_piece(at(2, 6), at(2, 5)).unwrap();
        assert_eq!(pawn_moves(&board, at(2, 5), Mode::Normal), vec![at(2, 4)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::empty();
        board.add_piece(Piece::new(Color::Dark, PieceKind::Pawn, at(3, 1))).unwrap();
        board.add_piece(Piece::new(Color::Light, PieceKind::Knight, at(3, 2))).unwrap();
        assert!(pawn_moves(&board, at(3, 1), Mode::Normal).is_empty());

        board.remove_piece_at(at(3, 2));
        board.add_piece(Piece::new(Color::Light, PieceKind::Knight, at(3, 3))).unwrap();
        assert_eq!(pawn_moves(&board, at(3, 1), Mode::Normal), vec![at(3, 2)]);
    }

    #[test]
    fn captures_only_opposing_pieces_diagonally() {
        let mut board = Board::empty();
        board.add_piece(Piece::new(Color::Light, PieceKind::Pawn, at(4, 4))).unwrap();
        board.add_piece(Piece::new(Color::Dark, PieceKind::Rook, at(3, 3))).unwrap();
        board.add_piece(Piece::new(Color::Light, PieceKind::Rook, at(5, 3))).unwrap();
        board.add_piece(Piece::new(Color::Dark, PieceKind::Bishop, at(4, 3))).unwrap();

        assert_eq!(pawn_moves(&board, at(4, 4), Mode::Normal), vec![at(3, 3)]);
    }

    #[test]
    fn attack_map_is_both_diagonals() {
        let mut board = Board::empty();
        board.add_piece(Piece::new(Color::Dark, PieceKind::Pawn, at(0, 4))).unwrap();
        board.add_piece(Piece::new(Color::Dark, PieceKind::Pawn, at(5, 2))).unwrap();
        assert_eq!(pawn_moves(&board, at(0, 4), Mode::AttackMap), vec![at(1, 5)]);
        assert_eq!(
            pawn_moves(&board, at(5, 2), Mode::AttackMap),
            vec![at(4, 3), at(6, 3)],
            "forward pushes are never attacks"
        );
    }

    #[test]
    fn final_rank_pawn_has_no_destinations() {
        let mut board = Board::empty();
        board.add_piece(Piece::new(Color::Light, PieceKind::Pawn, at(2, 0))).unwrap();
        board.add_piece(Piece::new(Color::Dark, PieceKind::Pawn, at(6, 7))).unwrap();
        for from in [at(2, 0), at(6, 7)] {
            assert!(pawn_moves(&board, from, Mode::Normal).is_empty());
            assert!(pawn_moves(&board, from, Mode::AttackMap).is_empty());
        }
    }
}
