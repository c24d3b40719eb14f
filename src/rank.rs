//! Rank values and their glyphs.
//!
//! A rank is a 4-bit value. Both ends are joker sentinels and the ace exists
//! twice, so callers pick the ace and joker they need by value:
//!
//! | rank    | meaning       |
//! |---------|---------------|
//! | 0       | low joker     |
//! | 1       | low ace       |
//! | 2..=10  | numbered      |
//! | 11..=13 | jack to king  |
//! | 14      | high ace      |
//! | 15      | high joker    |

/// Low joker sentinel.
pub const LOW_JOKER: u8 = 0;
/// Ace counted below two.
pub const LOW_ACE: u8 = 1;
/// Ten.
pub const TEN: u8 = 10;
/// Jack.
pub const JACK: u8 = 11;
/// Queen.
pub const QUEEN: u8 = 12;
/// King.
pub const KING: u8 = 13;
/// Ace counted above king.
pub const HIGH_ACE: u8 = 14;
/// High joker sentinel.
pub const HIGH_JOKER: u8 = 15;
/// Largest valid rank.
pub const MAX: u8 = HIGH_JOKER;

const GLYPHS: [&str; 14] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// Returns whether `rank` is one of the two joker sentinels.
#[must_use]
pub const fn is_joker(rank: u8) -> bool {
    rank == LOW_JOKER || rank == HIGH_JOKER
}

/// Returns whether `rank` is a face rank (jack through king).
#[must_use]
pub const fn is_face(rank: u8) -> bool {
    matches!(rank, JACK..=KING)
}

/// Returns the glyph for a non-joker rank.
///
/// Jokers and out-of-range values have no rank glyph and yield `None`.
#[must_use]
pub const fn glyph(rank: u8) -> Option<&'static str> {
    match rank {
        LOW_ACE..=HIGH_ACE => Some(GLYPHS[(rank - 1) as usize]),
        _ => None,
    }
}
