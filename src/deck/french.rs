//! The standard French-suited deck.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};

use super::Deck;

/// Factory for the standard 52-card deck.
///
/// Cards come rank-major and suit-minor: all four suits of `2` first, then all
/// four suits of `3`, and so on up to the aces, so the deck starts with `2♢`
/// and ends with `A♠`.
///
/// # Example
///
/// ```
/// use deckrs::{Card, FrenchDeck};
///
/// let deck = FrenchDeck::build();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.front(), Card::new(2, "♢").ok());
/// assert_eq!(deck.back(), Card::new("A", "♠").ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchDeck;

impl FrenchDeck {
    /// Returns the 52 standard cards in ascending order.
    #[must_use]
    pub fn cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank_index in 0..RANKS.len() {
            for suit in Suit::ALL {
                cards.push(Card::from_parts(rank_index, suit));
            }
        }

        cards
    }

    /// Creates a deck with the 52 standard cards in ascending order.
    #[must_use]
    pub fn build() -> Deck {
        Deck::new(Self::cards())
    }

    /// Creates a deck holding `cards`, or the 52 standard cards if `cards` is
    /// empty.
    #[must_use]
    pub fn with_cards(cards: Vec<Card>) -> Deck {
        if cards.is_empty() {
            Self::build()
        } else {
            Deck::new(cards)
        }
    }
}
