//! Deck construction and the option pipeline.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Deref;

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::options::DeckOption;

/// An ordered sequence of cards.
///
/// Order is meaningful and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the 52-card deck in factory order.
    ///
    /// Spades come first, then diamonds, clubs and hearts, each running
    /// from ace to king.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::STANDARD {
            for rank in Rank::STANDARD {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Applies a single option and returns the transformed deck.
    #[must_use]
    pub fn apply<R: Rng + ?Sized>(self, option: &DeckOption, rng: &mut R) -> Self {
        let cards = option.apply(self.cards, rng);
        trace!("applied {}: {} cards", option.name(), cards.len());
        Self { cards }
    }

    /// Returns the cards in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the number of cards matching a removal pattern.
    #[must_use]
    pub fn count_matching(&self, pattern: &Card) -> usize {
        self.cards.iter().filter(|card| card.matches(pattern)).count()
    }
}

impl Deref for Deck {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// Builds a deck by applying options to the standard deck in order.
///
/// Use the builder pattern to list the options:
///
/// ```
/// use deckrs::{Card, DeckBuilder, Rank, Suit};
///
/// let deck = DeckBuilder::seeded(42)
///     .without_cards([Card::new(Rank::Two, Suit::None)])
///     .with_jokers(2)
///     .with_shuffle()
///     .build();
/// assert_eq!(deck.len(), 50);
/// ```
#[derive(Debug)]
pub struct DeckBuilder {
    /// Options in application order.
    options: Vec<DeckOption>,
    /// Seed for the shuffle random source.
    seed: u64,
}

#[cfg(feature = "std")]
impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckBuilder {
    /// Creates a builder whose shuffles are seeded from the system clock.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(clock_seed())
    }

    /// Creates a builder with a fixed shuffle seed.
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self {
            options: Vec::new(),
            seed,
        }
    }

    /// Returns the shuffle seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the options in application order.
    #[must_use]
    pub fn options(&self) -> &[DeckOption] {
        &self.options
    }

    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckBuilder;
    ///
    /// let builder = DeckBuilder::seeded(1).with_seed(9);
    /// assert_eq!(builder.seed(), 9);
    /// ```
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Appends an option to the pipeline.
    #[must_use]
    pub fn with_option(mut self, option: DeckOption) -> Self {
        self.options.push(option);
        self
    }

    /// Appends a shuffle.
    #[must_use]
    pub fn with_shuffle(self) -> Self {
        self.with_option(DeckOption::Shuffle)
    }

    /// Appends a sort using a positional comparator.
    ///
    /// See [`DeckOption::custom_sort`].
    #[must_use]
    pub fn with_custom_sort<F>(self, less: F) -> Self
    where
        F: Fn(&[Card], usize, usize) -> bool + 'static,
    {
        self.with_option(DeckOption::custom_sort(less))
    }

    /// Appends a sort using a card comparator.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckBuilder, Rank, Suit};
    ///
    /// let deck = DeckBuilder::seeded(0)
    ///     .with_sort_by(|a, b| b.suit.cmp(&a.suit).then(b.rank.cmp(&a.rank)))
    ///     .build();
    /// assert_eq!(deck[0].suit, Suit::Heart);
    /// assert_eq!(deck[0].rank, Rank::King);
    /// ```
    #[must_use]
    pub fn with_sort_by<F>(self, compare: F) -> Self
    where
        F: Fn(&Card, &Card) -> Ordering + 'static,
    {
        self.with_option(DeckOption::sort_by(compare))
    }

    /// Appends the standard suit-then-rank sort.
    #[must_use]
    pub fn with_sort(self) -> Self {
        self.with_option(DeckOption::StandardSort)
    }

    /// Appends `count` jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, DeckBuilder};
    ///
    /// let deck = DeckBuilder::seeded(0).with_jokers(3).build();
    /// assert_eq!(deck.len(), 55);
    /// assert_eq!(deck.count_matching(&Card::JOKER), 3);
    /// ```
    #[must_use]
    pub fn with_jokers(self, count: usize) -> Self {
        self.with_option(DeckOption::AddJokers(count))
    }

    /// Removes every card matching one of `patterns`.
    #[must_use]
    pub fn without_cards<I>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        self.with_option(DeckOption::without_cards(patterns))
    }

    /// Repeats the deck `count` times. Counts below 2 have no effect.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckBuilder;
    ///
    /// let deck = DeckBuilder::seeded(0).with_decks(6).build();
    /// assert_eq!(deck.len(), 312);
    /// ```
    #[must_use]
    pub fn with_decks(self, count: usize) -> Self {
        self.with_option(DeckOption::DuplicateDeck(count))
    }

    /// Builds the standard deck and runs every option over it in order.
    #[must_use]
    pub fn build(self) -> Deck {
        debug!(
            "building deck with {} options (seed {})",
            self.options.len(),
            self.seed
        );

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let deck = self
            .options
            .iter()
            .fold(Deck::standard(), |deck, option| deck.apply(option, &mut rng));

        debug!("built deck of {} cards", deck.len());
        deck
    }
}

impl Extend<DeckOption> for DeckBuilder {
    fn extend<I: IntoIterator<Item = DeckOption>>(&mut self, iter: I) {
        self.options.extend(iter);
    }
}

/// Builds a deck from `options`, shuffling with a clock-derived seed.
///
/// With no options this returns the standard deck.
///
/// ```
/// use deckrs::{DECK_SIZE, DeckOption, new_deck};
///
/// let deck = new_deck([DeckOption::Shuffle]);
/// assert_eq!(deck.len(), DECK_SIZE);
/// ```
#[cfg(feature = "std")]
#[must_use]
pub fn new_deck<I>(options: I) -> Deck
where
    I: IntoIterator<Item = DeckOption>,
{
    new_deck_seeded(options, clock_seed())
}

/// Builds a deck from `options`, shuffling with the given seed.
#[must_use]
pub fn new_deck_seeded<I>(options: I, seed: u64) -> Deck
where
    I: IntoIterator<Item = DeckOption>,
{
    let mut builder = DeckBuilder::seeded(seed);
    builder.extend(options);
    builder.build()
}

#[cfg(feature = "std")]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
