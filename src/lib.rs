//! Allocation-free playing cards and hands with optional `no_std` support.
//!
//! A [`Card`] packs a 4-bit rank and a 2-bit [`Suit`] into one byte, and a
//! [`Hand`] is a 64-bit set indexed by that byte. Membership, counting,
//! ordering, ordinal indexing and set algebra all reduce to word operations.
//!
//! # Example
//!
//! ```
//! use cardbits::{Hand, Suit, named};
//!
//! let hearts = Hand::DECK.in_suit(Suit::Hearts);
//! assert_eq!(hearts.len(), 13);
//! assert!(hearts.contains(named::QUEEN_OF_HEARTS));
//! assert_eq!(hearts.get(13).unwrap().rank(), 14);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod glyph;
pub mod hand;
pub mod named;
pub mod rank;
pub mod suit;

// Re-export main types
pub use card::{Card, card};
pub use error::{CardError, HandError, IndexError, RangeError, RankError, SuitError};
pub use glyph::{CardGlyph, Glyphs, HandGlyph, SuitStyle};
pub use hand::{Hand, Iter};
pub use suit::Suit;
