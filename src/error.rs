//! Error types for card and deck operations.

use alloc::string::String;
use core::convert::Infallible;

use thiserror::Error;

/// Errors that can occur while building a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The suit input is not one of the four canonical suits.
    #[error("invalid suit: {0}")]
    InvalidSuit(String),
    /// The rank input does not resolve to a canonical rank.
    #[error("invalid rank: {0}")]
    InvalidRank(String),
    /// The computed sort key is outside `0..=51`.
    #[error("invalid sort key: {0}")]
    InvalidSortKey(usize),
}

impl From<Infallible> for CardError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Errors that can occur during deck operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No more cards in the deck.
    #[error("no more cards in the deck")]
    EmptyDeck,
    /// The value pushed onto the deck is not a valid card.
    #[error("invalid card: {0}")]
    InvalidCard(CardError),
    /// Index is outside the current bounds of the deck.
    #[error("index {index} out of range for deck of {len} cards")]
    IndexOutOfRange {
        /// The requested index.
        index: isize,
        /// The deck length at the time of the request.
        len: usize,
    },
}
