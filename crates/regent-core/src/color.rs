//! Piece colors.

use std::fmt;
use std::ops::Not;

/// A piece color: Light or Dark.
///
/// Light starts on the high ranks (6 and 7) and advances toward rank 0;
/// Dark starts on ranks 0 and 1 and advances toward rank 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Light = 0,
    Dark = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    /// Return the index (0 for Light, 1 for Dark).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank delta of a single pawn step for this color.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Rank this color's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Rank holding this color's rooks, knights, bishops, king and queen.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "Light"),
            Color::Dark => write!(f, "Dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn index_values() {
        assert_eq!(Color::Light.index(), 0);
        assert_eq!(Color::Dark.index(), 1);
    }

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::Light.flip(), Color::Dark);
        assert_eq!(Color::Dark.flip(), Color::Light);
        assert_eq!(!!Color::Light, Color::Light);
    }

    #[test]
    fn pawns_advance_away_from_home() {
        for color in Color::ALL {
            let next = color.pawn_rank() as i8 + color.pawn_direction();
            assert_ne!(
                next as u8,
                color.back_rank(),
                "{color} pawns must not step toward their own back rank"
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::Light), "Light");
        assert_eq!(format!("{}", Color::Dark), "Dark");
    }
}
