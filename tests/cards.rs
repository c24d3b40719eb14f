//! Suit and card integration tests.

use cardbits::{Card, CardError, RangeError, RankError, Suit, SuitError, card, named, rank};

#[test]
fn suit_from_integer() {
    assert_eq!(Suit::new(0), Ok(Suit::Clubs));
    assert_eq!(Suit::new(1), Ok(Suit::Diamonds));
    assert_eq!(Suit::new(2), Ok(Suit::Hearts));
    assert_eq!(Suit::new(3), Ok(Suit::Spades));
    assert_eq!(Suit::new(4), Err(SuitError::OutOfRange(4)));
    assert_eq!(Suit::try_from(255u8), Err(SuitError::OutOfRange(255)));
    assert_eq!(u8::from(Suit::Hearts), 2);
}

#[test]
fn suits_are_ordered() {
    assert!(Suit::Clubs < Suit::Diamonds);
    assert!(Suit::Diamonds < Suit::Hearts);
    assert!(Suit::Hearts < Suit::Spades);
    assert_eq!(Suit::MIN, Suit::ALL[0]);
    assert_eq!(Suit::MAX, Suit::ALL[3]);
}

#[test]
fn suit_masks_tile_the_word() {
    let all = Suit::ALL.iter().fold(0u64, |acc, suit| {
        assert_eq!(acc & suit.mask(), 0);
        acc | suit.mask()
    });
    assert_eq!(all, u64::MAX);
    assert_eq!(Suit::Diamonds.mask(), 0xFFFF_0000);
}

#[test]
fn card_packs_rank_and_suit() {
    let jack = Card::new(11, Suit::Clubs).unwrap();
    assert_eq!(jack.rank(), 11);
    assert_eq!(jack.suit(), Suit::Clubs);
    assert_eq!(jack.raw(), 11);

    let ace = card(rank::HIGH_ACE, Suit::Spades).unwrap();
    assert_eq!(ace.raw(), (3 << 4) | 14);
    assert_eq!(ace.bit(), 1 << 62);
}

#[test]
fn card_rejects_rank_above_fifteen() {
    assert_eq!(Card::new(16, Suit::Hearts), Err(RankError::OutOfRange(16)));
    assert_eq!(card(200, Suit::Clubs), Err(RankError::OutOfRange(200)));
}

#[test]
fn card_round_trips_every_rank_and_suit() {
    for suit in Suit::ALL {
        for r in 0..=rank::MAX {
            let c = Card::new(r, suit).unwrap();
            assert_eq!(c.rank(), r);
            assert_eq!(c.suit(), suit);
            assert_eq!(Card::from_raw(c.raw()), Ok(c));
        }
    }
}

#[test]
fn card_from_raw_rejects_values_above_63() {
    assert!(Card::try_from(63u8).is_ok());
    assert_eq!(Card::try_from(64u8), Err(CardError::OutOfRange(64)));
}

#[test]
fn cards_order_suit_major() {
    let king_of_clubs = named::KING_OF_CLUBS;
    let two_of_diamonds = card(2, Suit::Diamonds).unwrap();
    let low_joker_of_spades = card(rank::LOW_JOKER, Suit::Spades).unwrap();
    assert!(king_of_clubs < two_of_diamonds);
    assert!(two_of_diamonds < low_joker_of_spades);
    assert!(card(3, Suit::Hearts).unwrap() < card(4, Suit::Hearts).unwrap());
}

#[test]
fn jokers_and_faces() {
    assert!(card(0, Suit::Clubs).unwrap().is_joker());
    assert!(card(15, Suit::Hearts).unwrap().is_joker());
    assert!(!card(14, Suit::Hearts).unwrap().is_joker());
    assert!(rank::is_face(rank::QUEEN));
    assert!(!rank::is_face(rank::HIGH_ACE));
}

#[test]
fn named_faces_match_constructed_cards() {
    assert_eq!(named::JACK_OF_CLUBS, card(11, Suit::Clubs).unwrap());
    assert_eq!(named::QUEEN_OF_HEARTS, card(12, Suit::Hearts).unwrap());
    assert_eq!(named::KING_OF_SPADES, card(13, Suit::Spades).unwrap());
    assert!(named::FACES.windows(2).all(|w| w[0] < w[1]));
    assert!(named::FACES.iter().all(|c| rank::is_face(c.rank())));
}

#[test]
fn range_to_within_one_suit() {
    let from = card(9, Suit::Diamonds).unwrap();
    let to = named::KING_OF_DIAMONDS;
    let hand = from.range_to(to).unwrap();
    assert_eq!(hand.len(), 5);
    assert_eq!(hand.first(), Some(from));
    assert_eq!(hand.last(), Some(to));

    assert!(to.range_to(from).unwrap().is_empty());
}

#[test]
fn range_to_rejects_mixed_suits() {
    let from = card(2, Suit::Clubs).unwrap();
    let to = card(5, Suit::Hearts).unwrap();
    assert_eq!(
        from.range_to(to),
        Err(RangeError::MixedSuits { from, to })
    );
}
