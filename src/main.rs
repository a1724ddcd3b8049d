use std::str::FromStr;

use anyhow::{Result, bail};
use tracing::info;

use regent_core::king_safety::evaluate;
use regent_core::{Board, Color, Coordinate, Piece, PieceKind};

/// Canned position to print and evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Demo {
    /// The standard starting layout.
    #[default]
    Opening,
    /// Dark king on (4, 0) mated by a guarded queen.
    Mate,
    /// Same as `Mate`, but the queen is unguarded and the king captures it.
    Escape,
}

impl FromStr for Demo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "opening" => Ok(Demo::Opening),
            "mate" => Ok(Demo::Mate),
            "escape" => Ok(Demo::Escape),
            other => bail!("unknown demo {other:?}, expected opening, mate or escape"),
        }
    }
}

impl Demo {
    fn board(self) -> Result<Board> {
        if self == Demo::Opening {
            return Ok(Board::starting_position());
        }

        let mut pieces = vec![
            (Color::Dark, PieceKind::King, 4, 0),
            (Color::Light, PieceKind::King, 7, 5),
            (Color::Light, PieceKind::Rook, 0, 0),
            (Color::Light, PieceKind::Queen, 4, 1),
        ];
        if self == Demo::Mate {
            pieces.push((Color::Light, PieceKind::Rook, 4, 7));
        }

        let mut board = Board::empty();
        for (color, kind, file, rank) in pieces {
            board.add_piece(Piece::new(color, kind, Coordinate::new(file, rank)?))?;
        }
        Ok(board)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let demo = match std::env::args().nth(1) {
        Some(name) => name.parse::<Demo>()?,
        None => Demo::default(),
    };
    info!(?demo, "regent starting");

    let board = demo.board()?;
    board.validate()?;
    println!("{}", board.pretty());

    for color in Color::ALL {
        println!("{color}: {}", evaluate(&board, color)?);
    }
    Ok(())
}
