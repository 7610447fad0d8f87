//! Deck container and state management.

use alloc::collections::{VecDeque, vec_deque};
use alloc::vec::Vec;
use core::ops::{Bound, RangeBounds};

use crate::card::Card;
use crate::error::DeckError;

mod draw;
pub mod french;
mod order;
pub mod render;

pub use french::FrenchDeck;

/// Default number of cards drawn by [`Deck::make_hand`].
pub const DEFAULT_HAND_SIZE: usize = 5;

/// An ordered, double-ended collection of cards.
///
/// The deck owns its cards. Cards can be drawn and inserted at either end,
/// and the whole sequence can be shuffled, sorted, and drawn as text with
/// [`Deck::gen_shape`].
///
/// # Example
///
/// ```
/// use deckrs::{Card, Deck};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut deck = Deck::standard();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.get(-1)?, Card::new("A", "♠")?);
///
/// deck.shuffle();
/// let hand = deck.make_hand(5);
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.len(), 47);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Deck {
    /// Cards in draw order, front first.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a deck holding `cards` in the given order.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates the standard 52-card deck in ascending order.
    #[must_use]
    pub fn standard() -> Self {
        FrenchDeck::build()
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub const fn cards(&self) -> &VecDeque<Card> {
        &self.cards
    }

    /// Returns an iterator over the cards, front first.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
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

    /// Returns whether the deck holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the front card without removing it.
    #[must_use]
    pub fn front(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Returns the back card without removing it.
    #[must_use]
    pub fn back(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// Returns the card at `index`.
    ///
    /// Negative indices count from the back, so `-1` is the last card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if `index` is outside the deck.
    pub fn get(&self, index: isize) -> Result<Card, DeckError> {
        let len = self.cards.len();
        let position = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };

        position
            .and_then(|position| self.cards.get(position))
            .copied()
            .ok_or(DeckError::IndexOutOfRange { index, len })
    }

    /// Returns the cards in `range`, clipped to the deck bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.slice(0..2).len(), 2);
    /// assert_eq!(deck.slice(50..100).len(), 2);
    /// assert!(deck.slice(60..).is_empty());
    /// ```
    #[must_use]
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Vec<Card> {
        let len = self.cards.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        }
        .min(len);

        if start >= end {
            return Vec::new();
        }
        self.cards.range(start..end).copied().collect()
    }

    /// Returns every `step`-th card in `range`, clipped to the deck bounds.
    ///
    /// A `step` of zero is treated as one.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck};
    ///
    /// let deck = Deck::standard();
    /// let diamonds = deck.slice_step(.., 4);
    /// assert_eq!(diamonds.len(), 13);
    /// assert_eq!(diamonds[12], Card::new("A", "♢").unwrap());
    /// ```
    #[must_use]
    pub fn slice_step<R: RangeBounds<usize>>(&self, range: R, step: usize) -> Vec<Card> {
        self.slice(range)
            .into_iter()
            .step_by(step.max(1))
            .collect()
    }

    /// Consumes the deck and returns its cards in draw order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Card> {
        self.cards.into()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
