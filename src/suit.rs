//! Card suits.

use core::fmt;

use crate::error::SuitError;
use crate::glyph::SuitStyle;

/// Card suit, ordered clubs < diamonds < hearts < spades.
///
/// The discriminant is the 2-bit value packed into the high bits of a
/// [`Card`](crate::Card).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Clubs.
    #[default]
    Clubs = 0,
    /// Diamonds.
    Diamonds = 1,
    /// Hearts.
    Hearts = 2,
    /// Spades.
    Spades = 3,
}

impl Suit {
    /// All four suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];
    /// The lowest suit.
    pub const MIN: Self = Self::Clubs;
    /// The highest suit.
    pub const MAX: Self = Self::Spades;

    /// Creates a suit from its integer value.
    ///
    /// # Errors
    ///
    /// Returns [`SuitError::OutOfRange`] if `n` is not in `0..=3`.
    pub const fn new(n: u8) -> Result<Self, SuitError> {
        match n {
            0 => Ok(Self::Clubs),
            1 => Ok(Self::Diamonds),
            2 => Ok(Self::Hearts),
            3 => Ok(Self::Spades),
            _ => Err(SuitError::OutOfRange(n)),
        }
    }

    /// Returns the suit's integer value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the 16-bit block of hand positions owned by this suit.
    #[must_use]
    pub const fn mask(self) -> u64 {
        0xFFFF << (16 * self as u32)
    }

    /// Returns the glyph for this suit in the given style.
    #[must_use]
    pub const fn glyph(self, style: SuitStyle) -> char {
        match style {
            SuitStyle::Unicode => match self {
                Self::Clubs => '♣',
                Self::Diamonds => '♢',
                Self::Hearts => '♡',
                Self::Spades => '♠',
            },
            SuitStyle::Ascii => match self {
                Self::Clubs => 'c',
                Self::Diamonds => 'd',
                Self::Hearts => 'h',
                Self::Spades => 's',
            },
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = SuitError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<Suit> for u8 {
    fn from(suit: Suit) -> Self {
        suit.value()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph(SuitStyle::Unicode))
    }
}
