//! Text rendering tests.

use cardbits::{Glyphs, Hand, Suit, SuitStyle, card, named};

#[test]
fn card_glyphs() {
    assert_eq!(card(2, Suit::Clubs).unwrap().to_string(), "2♣");
    assert_eq!(card(10, Suit::Diamonds).unwrap().to_string(), "10♢");
    assert_eq!(named::JACK_OF_HEARTS.to_string(), "J♡");
    assert_eq!(card(14, Suit::Spades).unwrap().to_string(), "A♠");
    assert_eq!(card(1, Suit::Spades).unwrap().to_string(), "1♠");
}

#[test]
fn joker_glyphs() {
    assert_eq!(card(0, Suit::Clubs).unwrap().to_string(), "★♣");
    assert_eq!(card(15, Suit::Hearts).unwrap().to_string(), "★♡");

    let glyphs = Glyphs::default().with_joker('?');
    assert_eq!(glyphs.card(card(15, Suit::Spades).unwrap()).to_string(), "?♠");
}

#[test]
fn ascii_suits() {
    let glyphs = Glyphs::default().with_suit_style(SuitStyle::Ascii);
    let faces: Vec<String> = [
        named::KING_OF_CLUBS,
        named::KING_OF_DIAMONDS,
        named::KING_OF_HEARTS,
        named::KING_OF_SPADES,
    ]
    .into_iter()
    .map(|card| glyphs.card(card).to_string())
    .collect();
    assert_eq!(faces, ["Kc", "Kd", "Kh", "Ks"]);
}

#[test]
fn suit_display() {
    assert_eq!(Suit::Clubs.to_string(), "♣");
    assert_eq!(Suit::Spades.glyph(SuitStyle::Ascii), 's');
}

#[test]
fn hand_listing() {
    assert_eq!(Hand::EMPTY.to_string(), "[]");

    let hand = Hand::try_from(&[named::KING_OF_SPADES, card(2, Suit::Clubs).unwrap()][..]).unwrap();
    assert_eq!(hand.to_string(), "[2♣, K♠]");

    let glyphs = Glyphs::default()
        .with_suit_style(SuitStyle::Ascii)
        .with_separator(" ");
    assert_eq!(glyphs.hand(hand).to_string(), "[2c Ks]");
}
