//! A configurable playing card deck builder with optional `no_std` support.
//!
//! The crate starts from the standard 52-card deck and runs an ordered list
//! of [`DeckOption`]s over it: shuffling, sorting, removing cards, adding
//! jokers and duplicating the deck.
//!
//! # Example
//!
//! ```
//! use deckrs::{Card, DeckBuilder, Rank, Suit};
//!
//! let deck = DeckBuilder::seeded(42)
//!     .without_cards([Card::new(Rank::Two, Suit::None)])
//!     .with_jokers(4)
//!     .with_decks(3)
//!     .build();
//! assert_eq!(deck.len(), 3 * (48 + 4));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use deck::new_deck;
pub use deck::{Deck, DeckBuilder, new_deck_seeded};
pub use error::CardError;
pub use options::{Comparator, DeckOption};
