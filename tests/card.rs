//! Card model tests.

use deckrs::{Card, CardError, Rank, Suit};

#[test]
fn card_display() {
    assert_eq!(Card::new(Rank::Ace, Suit::Spade).to_string(), "(Ace of spade)");
    assert_eq!(Card::JOKER.to_string(), "(Joker of Joker)");
    assert_eq!(Card::new(Rank::Ten, Suit::Heart).to_string(), "(10 of heart)");
    assert_eq!(Card::new(Rank::Queen, Suit::Diamond).to_string(), "(Queen of diamond)");
}

#[test]
fn rank_display() {
    let names: Vec<String> = Rank::STANDARD.iter().map(ToString::to_string).collect();
    assert_eq!(
        names,
        [
            "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King"
        ]
    );
    assert_eq!(Rank::Joker.to_string(), "Joker");
}

#[test]
fn suit_display() {
    let names = [
        Suit::Spade,
        Suit::Diamond,
        Suit::Club,
        Suit::Heart,
        Suit::Joker,
        Suit::None,
    ]
    .map(|suit| suit.to_string());
    assert_eq!(names, ["spade", "diamond", "club", "heart", "Joker", "None"]);
}

#[test]
fn suit_order_matches_standard_sort() {
    assert!(Suit::Spade < Suit::Diamond);
    assert!(Suit::Diamond < Suit::Club);
    assert!(Suit::Club < Suit::Heart);
    assert!(Suit::Heart < Suit::Joker);
    assert!(Rank::Ace < Rank::Two);
    assert!(Rank::King < Rank::Joker);
}

#[test]
fn raw_value_conversions() {
    assert_eq!(Suit::try_from(0u8), Ok(Suit::Spade));
    assert_eq!(Suit::try_from(5u8), Ok(Suit::None));
    assert_eq!(Suit::try_from(6u8), Err(CardError::InvalidSuit(6)));

    assert_eq!(Rank::try_from(1u8), Ok(Rank::Ace));
    assert_eq!(Rank::try_from(10u8), Ok(Rank::Ten));
    assert_eq!(Rank::try_from(14u8), Ok(Rank::Joker));
    assert_eq!(Rank::try_from(0u8), Err(CardError::InvalidRank(0)));
    assert_eq!(Rank::try_from(15u8), Err(CardError::InvalidRank(15)));

    for rank in Rank::STANDARD {
        assert_eq!(Rank::try_from(rank.value()), Ok(rank));
    }
}

#[test]
fn error_messages() {
    assert_eq!(CardError::InvalidRank(0).to_string(), "invalid rank value 0");
    assert_eq!(CardError::InvalidSuit(9).to_string(), "invalid suit value 9");
}

#[test]
fn matching_rules() {
    let two_of_clubs = Card::new(Rank::Two, Suit::Club);

    assert!(two_of_clubs.matches(&Card::new(Rank::Two, Suit::Club)));
    assert!(two_of_clubs.matches(&Card::new(Rank::Two, Suit::None)));
    assert!(!two_of_clubs.matches(&Card::new(Rank::Two, Suit::Spade)));
    assert!(!two_of_clubs.matches(&Card::new(Rank::Three, Suit::None)));

    assert!(Card::JOKER.matches(&Card::new(Rank::Joker, Suit::None)));
    assert!(Card::JOKER.is_joker());
    assert!(!two_of_clubs.is_joker());
}
