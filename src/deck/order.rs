use core::cmp::Reverse;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::rng;

use super::Deck;

impl Deck {
    /// Shuffles the cards in place using the shared random source.
    ///
    /// Returns the deck so calls can be chained.
    pub fn shuffle(&mut self) -> &mut Self {
        rng::with_rng(|rng| self.cards.make_contiguous().shuffle(rng));
        debug!("shuffled {} cards", self.cards.len());
        self
    }

    /// Shuffles the cards in place using `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.make_contiguous().shuffle(rng);
        debug!("shuffled {} cards", self.cards.len());
        self
    }

    /// Sorts the cards by rank, then suit.
    ///
    /// Ascending unless `reverse` is set. Returns the deck so calls can be
    /// chained.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck};
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle().sort(true);
    /// assert_eq!(deck.front(), Card::new("A", "♠").ok());
    /// ```
    pub fn sort(&mut self, reverse: bool) -> &mut Self {
        let cards = self.cards.make_contiguous();
        if reverse {
            cards.sort_unstable_by_key(|card| Reverse(*card));
        } else {
            cards.sort_unstable();
        }
        debug!("sorted {} cards (reverse: {reverse})", cards.len());
        self
    }
}
