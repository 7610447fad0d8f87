//! A standard 52-card deck with optional `no_std` support.
//!
//! The crate provides a [`Card`] type that normalizes loosely typed rank and
//! suit inputs into a totally ordered value, a [`Deck`] container that can be
//! shuffled, sorted, and drawn from at either end, and a text renderer that
//! lays card shapes out side by side.
//!
//! # Example
//!
//! ```
//! use deckrs::{Card, Deck, RenderOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut deck = Deck::standard();
//! deck.shuffle();
//!
//! let mut hand = Deck::new(deck.make_hand(5));
//! hand.sort(false);
//! let shape = hand.gen_shape(&[], RenderOptions::default().with_space_width(0));
//! assert_eq!(shape.lines().count(), 7);
//!
//! assert_eq!(Card::new(1, "♠")?, Card::new("a", "♠")?);
//! # Ok(())
//! # }
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
mod rng;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, RankInput, Suit, SuitInput};
pub use deck::{DEFAULT_HAND_SIZE, Deck, FrenchDeck};
pub use error::{CardError, DeckError};
pub use options::{MIN_SPACE_WIDTH, RenderOptions};
pub use rng::seed;
