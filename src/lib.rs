//! A French playing-card deck that behaves like a sequence, with optional
//! `no_std` support.
//!
//! [`Deck`] holds the 52 cards in a fixed order and exposes only a length
//! and positional or range access. That is enough to index it, slice it,
//! iterate it, draw a random card from it and sort it with a key such as
//! [`spades_high`].
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, SliceRange, spades_high};
//!
//! let deck = Deck::new();
//! assert_eq!(deck.len(), 52);
//!
//! let first_three = deck.slice(SliceRange::up_to(3));
//! assert_eq!(first_three.len(), 3);
//!
//! let sorted = deck.sorted_by_key(spades_high);
//! assert_eq!(sorted[0].to_string(), "2 of clubs");
//! assert_eq!(sorted[51].to_string(), "A of spades");
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
pub mod slice;
pub mod sort;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, Item, Position};
pub use error::{IndexError, SliceError, SymbolError};
pub use slice::{SliceIndices, SliceRange};
pub use sort::{SUIT_VALUES, spades_high, spades_high_symbols, suit_value};
