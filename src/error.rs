//! Error types for deck operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur during positional access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Index outside `[-len, len - 1]`.
    #[error("index {index} out of range for deck of {len} cards")]
    OutOfRange {
        /// The requested index.
        index: isize,
        /// The number of cards in the deck.
        len: usize,
    },
}

/// Errors that can occur when reading card symbols.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// Rank symbol not in `2`..`10`, `J`, `Q`, `K`, `A`.
    #[error("unknown rank {0:?}")]
    UnknownRank(String),
    /// Suit name not one of spades, diamonds, clubs, hearts.
    #[error("unknown suit {0:?}")]
    UnknownSuit(String),
    /// Text is not of the form `<rank> of <suit>`.
    #[error("malformed card {0:?}")]
    MalformedCard(String),
}

/// Errors that can occur when building a slice range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliceError {
    /// Step is zero.
    #[error("slice step cannot be zero")]
    ZeroStep,
}
