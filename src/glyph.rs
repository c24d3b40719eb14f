//! Text rendering options for cards and hands.

use core::fmt;

use crate::card::Card;
use crate::hand::Hand;
use crate::rank;

/// Character set used for suit glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SuitStyle {
    /// `♣ ♢ ♡ ♠`.
    #[default]
    Unicode,
    /// `c d h s`.
    Ascii,
}

/// Configuration for rendering cards and hands as text.
///
/// Use the builder pattern to customize glyphs:
///
/// ```
/// use cardbits::{Card, Glyphs, Hand, Suit, SuitStyle};
///
/// let glyphs = Glyphs::default()
///     .with_suit_style(SuitStyle::Ascii)
///     .with_separator(" ");
///
/// let hand = Hand::ranks(10..=11, Suit::Hearts).unwrap();
/// assert_eq!(glyphs.hand(hand).to_string(), "[10h Jh]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyphs {
    /// Suit glyph style.
    pub suit_style: SuitStyle,
    /// Glyph printed in place of a rank for jokers.
    pub joker: char,
    /// Text placed between cards when rendering a hand.
    pub separator: &'static str,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            suit_style: SuitStyle::Unicode,
            joker: '★',
            separator: ", ",
        }
    }
}

impl Glyphs {
    /// Sets the suit glyph style.
    #[must_use]
    pub const fn with_suit_style(mut self, suit_style: SuitStyle) -> Self {
        self.suit_style = suit_style;
        self
    }

    /// Sets the joker glyph.
    #[must_use]
    pub const fn with_joker(mut self, joker: char) -> Self {
        self.joker = joker;
        self
    }

    /// Sets the separator placed between cards of a hand.
    #[must_use]
    pub const fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    /// Returns a [`Display`](fmt::Display) adaptor for `card`.
    #[must_use]
    pub const fn card(self, card: Card) -> CardGlyph {
        CardGlyph { glyphs: self, card }
    }

    /// Returns a [`Display`](fmt::Display) adaptor for `hand`.
    #[must_use]
    pub const fn hand(self, hand: Hand) -> HandGlyph {
        HandGlyph { glyphs: self, hand }
    }
}

/// A card rendered with a particular [`Glyphs`] configuration.
#[derive(Debug, Clone, Copy)]
pub struct CardGlyph {
    glyphs: Glyphs,
    card: Card,
}

impl fmt::Display for CardGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = self.card.suit().glyph(self.glyphs.suit_style);
        match rank::glyph(self.card.rank()) {
            Some(rank) => write!(f, "{rank}{suit}"),
            None => write!(f, "{}{suit}", self.glyphs.joker),
        }
    }
}

/// A hand rendered with a particular [`Glyphs`] configuration.
///
/// Cards are listed in ascending order inside brackets.
#[derive(Debug, Clone, Copy)]
pub struct HandGlyph {
    glyphs: Glyphs,
    hand: Hand,
}

impl fmt::Display for HandGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.hand.iter().enumerate() {
            if i > 0 {
                f.write_str(self.glyphs.separator)?;
            }
            write!(f, "{}", self.glyphs.card(card))?;
        }
        f.write_str("]")
    }
}
