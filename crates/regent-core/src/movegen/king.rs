//! King destination generation.

use crate::board::Board;
use crate::piece::Piece;

use super::{Destinations, Mode, attack_map, push_step};

/// The eight adjacent squares.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Generate king destinations.
///
/// `AttackMap` yields every adjacent square. `Normal` additionally drops
/// friendly squares and any square the opponent attacks, which keeps the
/// king from stepping into check.
pub(super) fn gen_king(board: &Board, piece: &Piece, mode: Mode, list: &mut Destinations) {
    let from = piece.location();
    let mut adjacent = Destinations::new();
    for (df, dr) in KING_OFFSETS {
        if let Some(to) = from.offset(df, dr) {
            push_step(board, to, piece.color(), mode, &mut adjacent);
        }
    }

    if mode == Mode::AttackMap {
        *list = adjacent;
        return;
    }
    if adjacent.is_empty() {
        return;
    }

    let attacked = attack_map(board, piece.color().flip());
    for &to in &adjacent {
        if !attacked.contains(to) {
            list.push(to);
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

    #[test]
    fn lone_king_moves_to_every_neighbour() {
        let mut board = Board::empty();
        let king = Piece::new(Color::Dark, PieceKind::King, at(4, 4));
        board.add_piece(king).unwrap();
        assert_eq!(destinations(&board, &king, Mode::Normal).len(), 8);

        let corner = Piece::new(Color::Light, PieceKind::King, at(7, 7));
        board.add_piece(corner).unwrap();
        assert_eq!(destinations(&board, &corner, Mode::Normal).len(), 3);
    }

    #[test]
    fn king_avoids_attacked_squares() {
        let mut board = Board::empty();
        let king = Piece::new(Color::Dark, PieceKind::King, at(4, 4));
        board.add_piece(king).unwrap();
        board.add_piece(Piece::new(Color::Light, PieceKind::Rook, at(0, 3))).unwrap();

        let moves = destinations(&board, &king, Mode::Normal);
        for file in 3..6 {
            assert!(!moves.contains(at(file, 3)), "({file}, 3) is on the rook's rank");
        }
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn king_cannot_retreat_along_attacking_ray() {
        let mut board = Board::empty();
        let king = Piece::new(Color::Dark, PieceKind::King, at(4, 4));
        board.add_piece(king).unwrap();
        board.add_piece(Piece::new(Color::Light, PieceKind::Rook, at(0, 4))).unwrap();

        let moves = destinations(&board, &king, Mode::Normal);
        assert!(!moves.contains(at(5, 4)), "square behind the king is still on the rook's line");
        assert!(!moves.contains(at(3, 4)));
        assert!(moves.contains(at(4, 3)));
    }

    #[test]
    fn king_may_not_capture_defended_piece() {
        let mut board = Board::empty();
        let king = Piece::new(Color::Dark, PieceKind::King, at(4, 4));
        board.add_piece(king).unwrap();
        board.add_piece(Piece::new(Color::Light, PieceKind::Knight, at(4, 5))).unwrap();
        board.add_piece(Piece::new(Color::Light, PieceKind::Rook, at(4, 7))).unwrap();
        board.add_piece(Piece::new(Color::Light, PieceKind::Pawn, at(5, 4))).unwrap();

        let moves = destinations(&board, &king, Mode::Normal);
        assert!(!moves.contains(at(4, 5)), "knight is defended by the rook");
        assert!(moves.contains(at(5, 4)), "pawn is undefended");
    }

    #[test]
    fn kings_keep_their_distance() {
        let mut board = Board::empty();
        let dark = Piece::new(Color::Dark, PieceKind::King, at(3, 3));
        board.add_piece(dark).unwrap();
        board.add_piece(Piece::new(Color::Light, PieceKind::King, at(5, 3))).unwrap();

        let moves = destinations(&board, &dark, Mode::Normal);
        for rank in 2..5 {
            assert!(!moves.contains(at(4, rank)));
        }
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn attack_map_ignores_safety() {
        let mut board = Board::empty();
        let king = Piece::new(Color::Dark, PieceKind::King, at(0, 0));
        board.add_piece(king).unwrap();
        board.add_piece(Piece::new(Color::Dark, PieceKind::Pawn, at(1, 1))).unwrap();
        board.add_piece(Piece::new(Color::Light, PieceKind::Rook, at(7, 1))).unwrap();

        let attacks = destinations(&board, &king, Mode::AttackMap);
        assert_eq!(attacks.len(), 3);
        assert!(attacks.contains(at(1, 1)));
    }
}
