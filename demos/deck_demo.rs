//! Deck builder demo.
//!
//! Removes every 2 and 3, adds four jokers, sorts the deck from the highest
//! card down and triples it. Pass a seed to also shuffle each copy the same
//! way on every run. Set `RUST_LOG=trace` to see each option being applied.

use std::env;

use deckrs::{Card, DeckBuilder, Rank, Suit};

/// Descending order by `suit * 13 + rank`.
fn highest_first(cards: &[Card], i: usize, j: usize) -> bool {
    let key = |card: &Card| card.suit as u32 * 13 + u32::from(card.rank.value());
    key(&cards[i]) > key(&cards[j])
}

fn main() {
    env_logger::init();

    let seed = env::args().nth(1).and_then(|arg| arg.parse::<u64>().ok());

    let builder = seed.map_or_else(DeckBuilder::new, DeckBuilder::seeded);
    let builder = builder
        .without_cards([
            Card::new(Rank::Two, Suit::None),
            Card::new(Rank::Three, Suit::None),
        ])
        .with_jokers(4)
        .with_custom_sort(highest_first);

    let builder = if seed.is_some() {
        builder.with_shuffle()
    } else {
        builder
    };

    let deck = builder.with_decks(3).build();

    println!("{} cards", deck.len());
    println!("{deck}");
}
