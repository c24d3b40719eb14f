//! Named face cards.

use crate::card::Card;
use crate::rank::{JACK, KING, QUEEN};
use crate::suit::Suit;

/// Jack of clubs.
pub const JACK_OF_CLUBS: Card = Card::pack(JACK, Suit::Clubs);
/// Queen of clubs.
pub const QUEEN_OF_CLUBS: Card = Card::pack(QUEEN, Suit::Clubs);
/// King of clubs.
pub const KING_OF_CLUBS: Card = Card::pack(KING, Suit::Clubs);

/// Jack of diamonds.
pub const JACK_OF_DIAMONDS: Card = Card::pack(JACK, Suit::Diamonds);
/// Queen of diamonds.
pub const QUEEN_OF_DIAMONDS: Card = Card::pack(QUEEN, Suit::Diamonds);
/// King of diamonds.
pub const KING_OF_DIAMONDS: Card = Card::pack(KING, Suit::Diamonds);

/// Jack of hearts.
pub const JACK_OF_HEARTS: Card = Card::pack(JACK, Suit::Hearts);
/// Queen of hearts.
pub const QUEEN_OF_HEARTS: Card = Card::pack(QUEEN, Suit::Hearts);
/// King of hearts.
pub const KING_OF_HEARTS: Card = Card::pack(KING, Suit::Hearts);

/// Jack of spades.
pub const JACK_OF_SPADES: Card = Card::pack(JACK, Suit::Spades);
/// Queen of spades.
pub const QUEEN_OF_SPADES: Card = Card::pack(QUEEN, Suit::Spades);
/// King of spades.
pub const KING_OF_SPADES: Card = Card::pack(KING, Suit::Spades);

/// All twelve face cards in ascending order.
pub const FACES: [Card; 12] = [
    JACK_OF_CLUBS,
    QUEEN_OF_CLUBS,
    KING_OF_CLUBS,
    JACK_OF_DIAMONDS,
    QUEEN_OF_DIAMONDS,
    KING_OF_DIAMONDS,
    JACK_OF_HEARTS,
    QUEEN_OF_HEARTS,
    KING_OF_HEARTS,
    JACK_OF_SPADES,
    QUEEN_OF_SPADES,
    KING_OF_SPADES,
];
