//! Packed card values.

use core::fmt;

use crate::error::{CardError, RangeError, RankError};
use crate::glyph::Glyphs;
use crate::hand::Hand;
use crate::rank;
use crate::suit::Suit;

/// A playing card packed into six bits: `(suit << 4) | rank`.
///
/// Cards order by raw value, so every card of one suit sorts before every
/// card of the next suit, and ranks ascend within a suit.
///
/// ```
/// use cardbits::{Card, Suit};
///
/// let jack = Card::new(11, Suit::Clubs).unwrap();
/// assert_eq!(jack.rank(), 11);
/// assert_eq!(jack.suit(), Suit::Clubs);
/// assert_eq!(jack.raw(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

impl Card {
    /// Number of distinct raw card values.
    pub const COUNT: usize = 64;

    /// Creates a card from a rank and a suit.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::OutOfRange`] if `rank` is not in `0..=15`.
    pub const fn new(rank: u8, suit: Suit) -> Result<Self, RankError> {
        if rank > rank::MAX {
            return Err(RankError::OutOfRange(rank));
        }
        Ok(Self::pack(rank, suit))
    }

    /// Decodes a card from its raw value.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::OutOfRange`] if `raw` is not in `0..=63`.
    pub const fn from_raw(raw: u8) -> Result<Self, CardError> {
        if raw as usize >= Self::COUNT {
            return Err(CardError::OutOfRange(raw));
        }
        Ok(Self(raw))
    }

    /// Packs an already validated rank.
    pub(crate) const fn pack(rank: u8, suit: Suit) -> Self {
        Self((suit.value() << 4) | (rank & rank::MAX))
    }

    /// Card at a bit position of a hand mask. `index` must be below 64.
    pub(crate) const fn at(index: u32) -> Self {
        Self(index as u8)
    }

    /// Returns the raw 6-bit value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns the rank stored in bits 0-3.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 & rank::MAX
    }

    /// Returns the suit stored in bits 4-5.
    #[must_use]
    pub const fn suit(self) -> Suit {
        match self.0 >> 4 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the single-bit hand mask for this card.
    #[must_use]
    pub const fn bit(self) -> u64 {
        1 << self.0
    }

    /// Returns whether this card carries a joker rank.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        rank::is_joker(self.rank())
    }

    /// Builds the hand of every card from `self` to `to`, inclusive.
    ///
    /// Both cards must share a suit. A `to` ranked below `self` yields the
    /// empty hand.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::MixedSuits`] if the suits differ.
    pub fn range_to(self, to: Self) -> Result<Hand, RangeError> {
        if self.suit() != to.suit() {
            log::debug!("rejected card range {self}..{to}: suits differ");
            return Err(RangeError::MixedSuits { from: self, to });
        }
        Hand::ranks(self.rank()..=to.rank(), self.suit())
    }
}

/// Creates a card from a rank and a suit.
///
/// Shorthand for [`Card::new`].
///
/// # Errors
///
/// Returns [`RankError::OutOfRange`] if `rank` is not in `0..=15`.
pub const fn card(rank: u8, suit: Suit) -> Result<Card, RankError> {
    Card::new(rank, suit)
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.raw()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Glyphs::default().card(*self))
    }
}
