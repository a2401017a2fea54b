//! The 52-card French deck.

use alloc::vec::Vec;
use core::slice::Iter;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::IndexError;
use crate::slice::{SliceRange, resolve_index};
use crate::sort::spades_high;

/// A position accepted by [`Deck::item_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// A single card; negative values count from the end.
    Index(isize),
    /// A clamped range of cards.
    Range(SliceRange),
}

impl From<isize> for Position {
    fn from(index: isize) -> Self {
        Self::Index(index)
    }
}

impl From<SliceRange> for Position {
    fn from(range: SliceRange) -> Self {
        Self::Range(range)
    }
}

/// What [`Deck::item_at`] returns for a [`Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// The card at a scalar position.
    Card(Card),
    /// A new sequence of cards for a range.
    Cards(Vec<Card>),
}

/// A full deck of 52 cards in a fixed order.
///
/// Cards are laid out suit by suit in [`Suit::ALL`] order, each suit from
/// deuce to ace. The deck never changes after construction: slicing,
/// shuffling and sorting return new sequences.
///
/// ```
/// use deckrs::{Card, Deck, Rank, Suit};
///
/// let deck = Deck::new();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.get(0), Ok(Card::new(Rank::Two, Suit::Spades)));
/// assert_eq!(deck.get(-1), Ok(Card::new(Rank::Ace, Suit::Hearts)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck in construction order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        log::debug!("built deck with {} cards", cards.len());
        Self { cards }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card or cards at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if a scalar position is outside
    /// `[-len, len - 1]`. Ranges clamp and never fail.
    pub fn item_at(&self, position: impl Into<Position>) -> Result<Item, IndexError> {
        match position.into() {
            Position::Index(index) => self.get(index).map(Item::Card),
            Position::Range(range) => Ok(Item::Cards(self.slice(range))),
        }
    }

    /// Returns the card at `index`, counting from the end if negative.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if `index` is outside `[-len, len - 1]`.
    pub fn get(&self, index: isize) -> Result<Card, IndexError> {
        resolve_index(index, self.cards.len())
            .map(|pos| self.cards[pos])
            .ok_or(IndexError::OutOfRange {
                index,
                len: self.cards.len(),
            })
    }

    /// Returns the cards selected by `range` as a new sequence.
    #[must_use]
    pub fn slice(&self, range: impl Into<SliceRange>) -> Vec<Card> {
        range
            .into()
            .indices(self.cards.len())
            .map(|pos| self.cards[pos])
            .collect()
    }

    /// Returns the cards as a slice.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards in deck order.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns whether the deck holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Picks one card uniformly at random, leaving the deck unchanged.
    ///
    /// Returns `None` only for an empty deck.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Card> {
        self.cards.choose(rng).copied()
    }

    /// Returns the cards in a random order drawn from `rng`.
    pub fn shuffled_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        log::trace!("shuffled {} cards", cards.len());
        cards
    }

    /// Returns the cards in a random order that is reproducible for `seed`.
    #[must_use]
    pub fn shuffled(&self, seed: u64) -> Vec<Card> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffled_with(&mut rng)
    }

    /// Returns the cards sorted by `key`. The sort is stable.
    #[must_use]
    pub fn sorted_by_key<K: Ord>(&self, key: impl FnMut(&Card) -> K) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort_by_key(key);
        cards
    }

    /// Returns the cards sorted by [`spades_high`].
    #[must_use]
    pub fn sorted_spades_high(&self) -> Vec<Card> {
        self.sorted_by_key(spades_high)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[Card]> for Deck {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
