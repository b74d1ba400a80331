//! Card types and their textual rendering.

use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// Suits order by declaration, which is also the order used by the
/// standard sort: spades, diamonds, clubs, hearts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spade = 0,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Suit carried by joker cards.
    Joker,
    /// Wildcard matching any suit when removing cards. Never generated.
    None,
}

impl Suit {
    /// The four regular suits in factory order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spade => "spade",
            Self::Diamond => "diamond",
            Self::Club => "club",
            Self::Heart => "heart",
            Self::Joker => "Joker",
            Self::None => "None",
        };
        f.write_str(name)
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Spade),
            1 => Ok(Self::Diamond),
            2 => Ok(Self::Club),
            3 => Ok(Self::Heart),
            4 => Ok(Self::Joker),
            5 => Ok(Self::None),
            _ => Err(CardError::InvalidSuit(value)),
        }
    }
}

/// Card rank.
///
/// Discriminants follow card values (1 = Ace, 13 = King), with jokers
/// ranked above kings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Joker, only paired with [`Suit::Joker`].
    Joker,
}

impl Rank {
    /// The thirteen regular ranks from ace to king.
    pub const STANDARD: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the numeric value of the rank (1 = Ace, 14 = Joker).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ace => f.write_str("Ace"),
            Self::Jack => f.write_str("Jack"),
            Self::Queen => f.write_str("Queen"),
            Self::King => f.write_str("King"),
            Self::Joker => f.write_str("Joker"),
            pip => write!(f, "{}", pip.value()),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=13 => Ok(Self::STANDARD[value as usize - 1]),
            14 => Ok(Self::Joker),
            _ => Err(CardError::InvalidRank(value)),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// A joker card.
    pub const JOKER: Self = Self::new(Rank::Joker, Suit::Joker);

    /// Creates a new card.
    ///
    /// Note: rank and suit are not checked against each other, so a
    /// pattern such as `Card::new(Rank::Two, Suit::None)` can be built for
    /// use with [`DeckOption::RemoveCards`](crate::DeckOption::RemoveCards).
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns whether this is a joker card.
    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.rank == Rank::Joker
    }

    /// Returns whether this card matches a removal pattern.
    ///
    /// Ranks must be equal. Suits must be equal unless the pattern suit is
    /// [`Suit::None`], which matches any suit.
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let two_of_clubs = Card::new(Rank::Two, Suit::Club);
    /// assert!(two_of_clubs.matches(&Card::new(Rank::Two, Suit::None)));
    /// assert!(!two_of_clubs.matches(&Card::new(Rank::Two, Suit::Heart)));
    /// ```
    #[must_use]
    pub fn matches(&self, pattern: &Self) -> bool {
        self.rank == pattern.rank && (pattern.suit == Suit::None || self.suit == pattern.suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} of {})", self.rank, self.suit)
    }
}

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;
