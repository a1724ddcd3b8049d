//! Chess rules oracle: piece placement, destination generation, and king safety.
//!
//! Coordinates are `(file, rank)` with both in `0..8`. Rank 0 is Dark's back
//! rank and rank 7 is Light's. The engine does not track whose turn it is.

mod board;
mod color;
mod coordinate;
mod error;
pub mod king_safety;
pub mod movegen;
mod piece;
mod piece_kind;
mod square_set;

pub use board::{Board, Placement, PrettyBoard};
pub use color::Color;
pub use coordinate::Coordinate;
pub use error::BoardError;
pub use king_safety::KingStatus;
pub use movegen::{Destinations, Mode};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square_set::SquareSet;
