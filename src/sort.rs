//! Sort keys for ordering cards.

use crate::card::{Card, Rank, Suit};
use crate::error::SymbolError;

/// Suit preference weights used for sorting, highest first.
pub const SUIT_VALUES: [(Suit, u8); 4] = [
    (Suit::Spades, 3),
    (Suit::Hearts, 2),
    (Suit::Diamonds, 1),
    (Suit::Clubs, 0),
];

/// Returns the sorting weight of a suit (spades highest, clubs lowest).
#[must_use]
pub const fn suit_value(suit: Suit) -> u8 {
    match suit {
        Suit::Spades => 3,
        Suit::Hearts => 2,
        Suit::Diamonds => 1,
        Suit::Clubs => 0,
    }
}

/// Returns a key ordering cards by rank, then by suit with spades high.
///
/// Keys are unique per card and range over `0..52`.
///
/// ```
/// use deckrs::{Card, Rank, Suit, spades_high};
///
/// let two_of_clubs = Card::new(Rank::Two, Suit::Clubs);
/// let ace_of_spades = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(spades_high(&two_of_clubs), 0);
/// assert_eq!(spades_high(&ace_of_spades), 51);
/// ```
#[must_use]
pub const fn spades_high(card: &Card) -> u8 {
    card.rank.index() * SUIT_VALUES.len() as u8 + suit_value(card.suit)
}

/// Computes [`spades_high`] from rank and suit symbols.
///
/// # Errors
///
/// Returns [`SymbolError::UnknownRank`] or [`SymbolError::UnknownSuit`] if a
/// symbol is not recognized.
pub fn spades_high_symbols(rank: &str, suit: &str) -> Result<u8, SymbolError> {
    let rank: Rank = rank.parse()?;
    let suit: Suit = suit.parse()?;
    Ok(spades_high(&Card::new(rank, suit)))
}
