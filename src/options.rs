//! Deck transformation options.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;

/// Comparator used by [`DeckOption::CustomSort`].
///
/// Called with the deck as it stands when the sort runs and two positions
/// into it. Returns `true` when the card at the first position sorts before
/// the card at the second.
pub type Comparator = Box<dyn Fn(&[Card], usize, usize) -> bool>;

/// A single transformation applied to a deck.
///
/// Options run in the order they are given to the builder. Each one takes
/// the whole deck and returns its replacement, so the same options in a
/// different order can produce a different deck.
///
/// ```
/// use deckrs::{Card, DeckOption, Rank, Suit, new_deck_seeded};
///
/// let deck = new_deck_seeded(
///     [
///         DeckOption::RemoveCards(vec![Card::new(Rank::Two, Suit::None)]),
///         DeckOption::AddJokers(2),
///     ],
///     7,
/// );
/// assert_eq!(deck.len(), 50);
/// ```
#[non_exhaustive]
pub enum DeckOption {
    /// Shuffle the deck into a uniformly random order.
    Shuffle,
    /// Sort the deck with a caller comparator.
    CustomSort(Comparator),
    /// Sort by suit then rank, both ascending.
    StandardSort,
    /// Append this many jokers to the end of the deck.
    AddJokers(usize),
    /// Remove every card matching any of these patterns.
    ///
    /// See [`Card::matches`] for the matching rule.
    RemoveCards(Vec<Card>),
    /// Replace the deck with this many copies of itself.
    ///
    /// Counts of 0 and 1 leave the deck unchanged.
    DuplicateDeck(usize),
}

impl DeckOption {
    /// Creates a [`DeckOption::CustomSort`] from a positional comparator.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOption, Rank, new_deck_seeded};
    ///
    /// let by_rank = DeckOption::custom_sort(|cards, i, j| cards[i].rank < cards[j].rank);
    /// let deck = new_deck_seeded([by_rank], 0);
    /// assert_eq!(deck[3].rank, Rank::Ace);
    /// assert_eq!(deck[4].rank, Rank::Two);
    /// ```
    #[must_use]
    pub fn custom_sort<F>(less: F) -> Self
    where
        F: Fn(&[Card], usize, usize) -> bool + 'static,
    {
        Self::CustomSort(Box::new(less))
    }

    /// Creates a [`DeckOption::CustomSort`] from a card comparator.
    #[must_use]
    pub fn sort_by<F>(compare: F) -> Self
    where
        F: Fn(&Card, &Card) -> Ordering + 'static,
    {
        Self::custom_sort(move |cards, i, j| compare(&cards[i], &cards[j]) == Ordering::Less)
    }

    /// Creates a [`DeckOption::RemoveCards`] from any collection of patterns.
    #[must_use]
    pub fn without_cards<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self::RemoveCards(patterns.into_iter().collect())
    }

    /// Returns a short name for the option, used in log output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Shuffle => "shuffle",
            Self::CustomSort(_) => "custom sort",
            Self::StandardSort => "standard sort",
            Self::AddJokers(_) => "add jokers",
            Self::RemoveCards(_) => "remove cards",
            Self::DuplicateDeck(_) => "duplicate deck",
        }
    }

    /// Applies the option to `cards` and returns the resulting cards.
    #[must_use]
    pub fn apply<R: Rng + ?Sized>(&self, mut cards: Vec<Card>, rng: &mut R) -> Vec<Card> {
        match self {
            Self::Shuffle => {
                cards.shuffle(rng);
                cards
            }
            Self::CustomSort(less) => sort_by_position(&cards, &**less),
            Self::StandardSort => {
                cards.sort_by_key(|card| (card.suit, card.rank));
                cards
            }
            Self::AddJokers(count) => {
                cards.extend(core::iter::repeat_n(Card::JOKER, *count));
                cards
            }
            Self::RemoveCards(patterns) => {
                cards.retain(|card| !patterns.iter().any(|pattern| card.matches(pattern)));
                cards
            }
            Self::DuplicateDeck(count) => {
                if *count <= 1 {
                    return cards;
                }
                cards.repeat(*count)
            }
        }
    }
}

impl fmt::Debug for DeckOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shuffle => f.write_str("Shuffle"),
            Self::CustomSort(_) => f.debug_tuple("CustomSort").finish_non_exhaustive(),
            Self::StandardSort => f.write_str("StandardSort"),
            Self::AddJokers(count) => f.debug_tuple("AddJokers").field(count).finish(),
            Self::RemoveCards(patterns) => f.debug_tuple("RemoveCards").field(patterns).finish(),
            Self::DuplicateDeck(count) => f.debug_tuple("DuplicateDeck").field(count).finish(),
        }
    }
}

/// Sorts a snapshot of `cards` by position, so the comparator always sees
/// the deck as it was when the sort started.
fn sort_by_position(cards: &[Card], less: &dyn Fn(&[Card], usize, usize) -> bool) -> Vec<Card> {
    let mut order: Vec<usize> = (0..cards.len()).collect();
    order.sort_by(|&i, &j| {
        if less(cards, i, j) {
            Ordering::Less
        } else if less(cards, j, i) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    order.into_iter().map(|i| cards[i]).collect()
}
