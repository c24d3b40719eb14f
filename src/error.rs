//! Error types for card and hand operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a suit from an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuitError {
    /// Value is outside `0..=3`.
    #[error("suit value {0} is outside 0..=3")]
    OutOfRange(u8),
}

/// Errors that can occur when building a card from a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// Value is outside `0..=15`.
    #[error("rank {0} is outside 0..=15")]
    OutOfRange(u8),
}

/// Errors that can occur when decoding a card from its raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Value is outside `0..=63`.
    #[error("raw card value {0} is outside 0..=63")]
    OutOfRange(u8),
}

/// Errors that can occur when building a hand from a sequence of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card appears more than once in the sequence.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur when indexing into a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Index is outside `1..=len`.
    #[error("index {index} is outside 1..={len}")]
    OutOfBounds {
        /// The requested 1-based index.
        index: usize,
        /// The number of cards in the hand.
        len: usize,
    },
}

/// Errors that can occur when building a hand from a rank range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The two end cards belong to different suits.
    #[error("cannot build a range from {from} to {to}: suits differ")]
    MixedSuits {
        /// The lower end of the range.
        from: Card,
        /// The upper end of the range.
        to: Card,
    },
    /// An end of the range is not a valid rank.
    #[error(transparent)]
    Rank(#[from] RankError),
}
