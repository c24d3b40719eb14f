//! Sets of cards packed into a single 64-bit word.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::{BitAnd, BitOr, RangeInclusive};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{HandError, IndexError, RangeError, RankError};
use crate::glyph::Glyphs;
use crate::rank;
use crate::suit::Suit;

/// Bits `lo..=hi` of a single suit block, before shifting into place.
const fn span(lo: u8, hi: u8) -> u64 {
    if lo > hi {
        return 0;
    }
    let width = (hi - lo + 1) as u32;
    ((1u64 << width) - 1) << lo
}

const DECK_BLOCK: u64 = span(2, rank::HIGH_ACE);

/// An immutable set of cards.
///
/// Bit `i` is set iff the card with raw value `i` is a member, so membership,
/// counting and set algebra are single word operations and no hand ever
/// allocates. Every hand method returns a new value.
///
/// ```
/// use cardbits::{Card, Hand, Suit};
///
/// let two = Card::new(2, Suit::Clubs).unwrap();
/// let king = Card::new(13, Suit::Spades).unwrap();
/// let hand = Hand::try_from(&[king, two][..]).unwrap();
///
/// assert_eq!(hand.len(), 2);
/// assert_eq!(hand.get(1), Ok(two));
/// assert_eq!(hand.to_string(), "[2♣, K♠]");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hand(u64);

impl Hand {
    /// The hand with no cards.
    pub const EMPTY: Self = Self(0);

    /// The standard 52-card deck: ranks 2 through high ace in every suit.
    pub const DECK: Self = Self(
        DECK_BLOCK | (DECK_BLOCK << 16) | (DECK_BLOCK << 32) | (DECK_BLOCK << 48),
    );

    /// Creates a hand from its raw bit mask.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the raw bit mask.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Builds a hand from a sequence of cards.
    ///
    /// The build is all or nothing: the first repeated card aborts it.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] naming the first card seen twice.
    pub fn try_from_iter<I>(cards: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        cards
            .into_iter()
            .try_fold(Self::EMPTY, |hand, card| {
                if hand.contains(card) {
                    log::debug!("rejected hand: duplicate card {card}");
                    Err(HandError::DuplicateCard(card))
                } else {
                    Ok(hand.with(card))
                }
            })
    }

    /// Builds the hand of every card of `suit` with a rank in `ranks`.
    ///
    /// An empty range (start above end) yields the empty hand.
    ///
    /// ```
    /// use cardbits::{Hand, Suit};
    ///
    /// let clubs = Hand::ranks(2..=14, Suit::Clubs).unwrap();
    /// assert_eq!(clubs, Hand::DECK.in_suit(Suit::Clubs));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Rank`] if either end is above 15.
    pub fn ranks(ranks: RangeInclusive<u8>, suit: Suit) -> Result<Self, RangeError> {
        let (lo, hi) = ranks.into_inner();
        for end in [lo, hi] {
            if end > rank::MAX {
                log::debug!("rejected rank range {lo}..={hi}: rank {end} out of range");
                return Err(RankError::OutOfRange(end).into());
            }
        }
        Ok(Self(span(lo, hi) << (16 * suit.value() as u32)))
    }

    /// Draws a random subset of the deck from `rng`.
    ///
    /// Each deck card is included independently with probability 1/2, so
    /// every subset is reachable but sizes near 26 dominate. Cards outside
    /// the deck never appear.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hand = Self(rng.random::<u64>() & Self::DECK.0);
        log::trace!("sampled random hand of {} cards", hand.len());
        hand
    }

    /// Draws a random subset of the deck from a ChaCha generator seeded with `seed`.
    ///
    /// The same seed always yields the same hand.
    #[must_use]
    pub fn random_seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::random_with(&mut rng)
    }

    /// Draws a random subset of the deck from the thread-local generator.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Returns whether `card` is a member.
    #[must_use]
    pub const fn contains(self, card: Card) -> bool {
        self.0 & card.bit() != 0
    }

    /// Returns the number of cards.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the hand has no cards.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the lowest card.
    #[must_use]
    pub const fn first(self) -> Option<Card> {
        if self.is_empty() {
            None
        } else {
            Some(Card::at(self.0.trailing_zeros()))
        }
    }

    /// Returns the highest card.
    #[must_use]
    pub const fn last(self) -> Option<Card> {
        if self.is_empty() {
            None
        } else {
            Some(Card::at(63 - self.0.leading_zeros()))
        }
    }

    /// Returns the `index`-th card (1-based) in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfBounds`] unless `1 <= index <= len`.
    pub const fn get(self, index: usize) -> Result<Card, IndexError> {
        let len = self.len();
        if index == 0 || index > len {
            return Err(IndexError::OutOfBounds { index, len });
        }
        Ok(self.select(index))
    }

    /// Returns the `index`-th card (1-based) without checking bounds.
    ///
    /// `index` must satisfy `1 <= index <= len`; any other value returns an
    /// unspecified card. Use [`Hand::get`] unless the range is already known.
    ///
    /// Binary search over the six halvings of the word: at each level the
    /// lower half of the window is popcounted, and if it holds fewer than
    /// `index` cards the search moves to the upper half and sets that
    /// position bit. Position bits are decided from 32 down to 1.
    #[must_use]
    pub const fn select(self, index: usize) -> Card {
        debug_assert!(index >= 1 && index <= self.len());
        let mut target = index as u32;
        let mut position = 0u32;
        let mut width = 32u32;
        while width > 0 {
            let lower = (self.0 >> position) & ((1u64 << width) - 1);
            let ones = lower.count_ones();
            if target > ones {
                target -= ones;
                position |= width;
            }
            width >>= 1;
        }
        Card::at(position)
    }

    /// Returns the 1-based position of `card` in ascending order.
    ///
    /// This inverts [`Hand::get`]: `hand.get(hand.position(c)?) == Ok(c)`.
    #[must_use]
    pub const fn position(self, card: Card) -> Option<usize> {
        if !self.contains(card) {
            return None;
        }
        let below = self.0 & (card.bit() - 1);
        Some(below.count_ones() as usize + 1)
    }

    /// Returns this hand with `card` added.
    #[must_use]
    pub const fn with(self, card: Card) -> Self {
        Self(self.0 | card.bit())
    }

    /// Returns this hand with `card` removed.
    #[must_use]
    pub const fn without(self, card: Card) -> Self {
        Self(self.0 & !card.bit())
    }

    /// Returns the cards in either hand.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the cards in both hands.
    #[must_use]
    pub const fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the cards of this hand not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the deck cards missing from this hand.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(Self::DECK.0 & !self.0)
    }

    /// Returns only the cards of `suit`.
    #[must_use]
    pub const fn in_suit(self, suit: Suit) -> Self {
        Self(self.0 & suit.mask())
    }

    /// Returns whether every card of this hand is in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns whether the hands share no card.
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Returns an iterator over the cards in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::try_from_iter(cards.iter().copied())
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(card.bit())
    }
}

impl From<u64> for Hand {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<Hand> for u64 {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

impl BitOr for Hand {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for Hand {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersect(rhs)
    }
}

impl BitAnd<Suit> for Hand {
    type Output = Self;

    fn bitand(self, rhs: Suit) -> Self {
        self.in_suit(rhs)
    }
}

impl BitAnd<Hand> for Suit {
    type Output = Hand;

    fn bitand(self, rhs: Hand) -> Hand {
        rhs.in_suit(self)
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &Hand {
    type Item = Card;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Glyphs::default().hand(*self))
    }
}

/// Ascending iterator over the cards of a [`Hand`].
///
/// Holds a copy of the remaining bits, so the hand itself is never consumed
/// and iterating it again yields the same sequence.
#[derive(Debug, Clone)]
pub struct Iter(u64);

impl Iterator for Iter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }
        let card = Card::at(self.0.trailing_zeros());
        self.0 &= self.0 - 1;
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Iter {
    fn next_back(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }
        let card = Card::at(63 - self.0.leading_zeros());
        self.0 &= !card.bit();
        Some(card)
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}
