use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::error::{CardError, DeckError};

use super::Deck;

impl Deck {
    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if there are no cards left.
    pub fn pop_front(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::EmptyDeck)
    }

    /// Removes and returns the back card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if there are no cards left.
    pub fn pop_back(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_back().ok_or(DeckError::EmptyDeck)
    }

    /// Inserts a card at the front.
    ///
    /// Accepts a [`Card`] or anything that converts into one, such as the
    /// text form `"A♠"`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidCard`] if `card` does not convert to a
    /// card. The deck is left unchanged.
    pub fn push_front<C>(&mut self, card: C) -> Result<(), DeckError>
    where
        C: TryInto<Card>,
        C::Error: Into<CardError>,
    {
        let card = to_card(card)?;
        self.cards.push_front(card);
        Ok(())
    }

    /// Inserts a card at the back.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidCard`] if `card` does not convert to a
    /// card. The deck is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckError};
    ///
    /// let mut deck = Deck::empty();
    /// deck.push_back("10♡").unwrap();
    /// assert!(matches!(deck.push_back("11♡"), Err(DeckError::InvalidCard(_))));
    /// assert_eq!(deck.len(), 1);
    /// ```
    pub fn push_back<C>(&mut self, card: C) -> Result<(), DeckError>
    where
        C: TryInto<Card>,
        C::Error: Into<CardError>,
    {
        let card = to_card(card)?;
        self.cards.push_back(card);
        Ok(())
    }

    /// Removes up to `num_cards` cards from the front, in draw order.
    ///
    /// If fewer cards remain, all of them are returned and the deck is left
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.make_hand(50);
    /// assert_eq!(deck.make_hand(5).len(), 2);
    /// assert!(deck.is_empty());
    /// ```
    pub fn make_hand(&mut self, num_cards: usize) -> Vec<Card> {
        let count = num_cards.min(self.cards.len());
        if count < num_cards {
            debug!("short hand: requested {num_cards} cards, {count} left");
        }

        self.cards.drain(..count).collect()
    }
}

fn to_card<C>(card: C) -> Result<Card, DeckError>
where
    C: TryInto<Card>,
    C::Error: Into<CardError>,
{
    card.try_into()
        .map_err(|err| DeckError::InvalidCard(err.into()))
}
