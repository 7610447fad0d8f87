//! Card types, input normalization, and the card text shape.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use rand::Rng;

use crate::error::CardError;
use crate::rng;

/// Canonical ranks in ascending order.
pub const RANKS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// Number of cards per deck.
pub const DECK_SIZE: usize = RANKS.len() * Suit::COUNT;

/// Width in characters of a single card shape.
pub const SHAPE_WIDTH: usize = 11;

/// Number of lines in a single card shape.
pub const SHAPE_HEIGHT: usize = 7;

const ACE: usize = RANKS.len() - 1;

/// Card suit, in ascending order.
///
/// Diamonds, followed by clubs, hearts, and spades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Diamonds (`♢`).
    Diamonds,
    /// Clubs (`♣`).
    Clubs,
    /// Hearts (`♡`).
    Hearts,
    /// Spades (`♠`).
    Spades,
}

impl Suit {
    /// All suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Number of suits.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the canonical symbol of the suit.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Suit;
    ///
    /// assert_eq!(Suit::Spades.symbol(), "♠");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Diamonds => "♢",
            Self::Clubs => "♣",
            Self::Hearts => "♡",
            Self::Spades => "♠",
        }
    }

    /// Returns the position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the suit at the given position in [`Suit::ALL`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Diamonds),
            1 => Some(Self::Clubs),
            2 => Some(Self::Hearts),
            3 => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the suit with the given canonical symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.symbol() == symbol)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| CardError::InvalidSuit(s.to_string()))
    }
}

/// Raw rank input accepted by card constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RankInput {
    /// Numeric rank: 1 is an ace, 2 through 13 follow [`RANKS`].
    Number(i32),
    /// Rank text, matched case-insensitively against [`RANKS`].
    Text(String),
}

impl RankInput {
    /// Resolves the input to a position in [`RANKS`].
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the input is not a known rank.
    pub fn resolve(&self) -> Result<usize, CardError> {
        match self {
            Self::Number(1) => Ok(ACE),
            Self::Number(n @ 2..=13) => Ok(*n as usize - 2),
            Self::Number(n) => Err(CardError::InvalidRank(format!("{n}"))),
            Self::Text(text) => rank_index(text)
                .or_else(|| (text == "1").then_some(ACE))
                .or_else(|| rank_index(&text.to_uppercase()))
                .ok_or_else(|| CardError::InvalidRank(text.clone())),
        }
    }
}

fn rank_index(symbol: &str) -> Option<usize> {
    RANKS.iter().position(|rank| *rank == symbol)
}

impl From<i32> for RankInput {
    fn from(value: i32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RankInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RankInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<char> for RankInput {
    fn from(value: char) -> Self {
        Self::Text(value.into())
    }
}

/// Raw suit input accepted by card constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SuitInput {
    /// A typed suit.
    Suit(Suit),
    /// A suit symbol, one of `♢ ♣ ♡ ♠`.
    Symbol(String),
}

impl SuitInput {
    /// Resolves the input to a [`Suit`].
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if the symbol is not canonical.
    pub fn resolve(&self) -> Result<Suit, CardError> {
        match self {
            Self::Suit(suit) => Ok(*suit),
            Self::Symbol(symbol) => {
                Suit::from_symbol(symbol).ok_or_else(|| CardError::InvalidSuit(symbol.clone()))
            }
        }
    }
}

impl From<Suit> for SuitInput {
    fn from(value: Suit) -> Self {
        Self::Suit(value)
    }
}

impl From<&str> for SuitInput {
    fn from(value: &str) -> Self {
        Self::Symbol(value.to_string())
    }
}

impl From<String> for SuitInput {
    fn from(value: String) -> Self {
        Self::Symbol(value)
    }
}

impl From<char> for SuitInput {
    fn from(value: char) -> Self {
        Self::Symbol(value.into())
    }
}

/// A playing card.
///
/// Cards are ordered, compared, and hashed by their sort key, so two cards
/// built from different inputs that resolve to the same rank and suit are
/// interchangeable:
///
/// ```
/// use deckrs::{Card, Suit};
///
/// # fn main() -> Result<(), deckrs::CardError> {
/// assert_eq!(Card::new(1, "♠")?, Card::new("a", Suit::Spades)?);
/// assert!(Card::new("A", "♠")? > Card::new("A", "♡")?);
/// assert!(Card::new("A", "♡")? > Card::new("K", "♠")?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    sort_key: u8,
}

impl Card {
    /// Creates a new card from a rank and a suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] or [`CardError::InvalidRank`] if an
    /// input does not resolve. The suit is checked first.
    pub fn new(rank: impl Into<RankInput>, suit: impl Into<SuitInput>) -> Result<Self, CardError> {
        let suit = suit.into().resolve()?;
        let rank_index = rank.into().resolve()?;
        Self::from_sort_key(rank_index * Suit::COUNT + suit.index())
    }

    /// Creates a card, drawing any missing input from the shared random
    /// source.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided input does not resolve.
    pub fn resolve(rank: Option<RankInput>, suit: Option<SuitInput>) -> Result<Self, CardError> {
        rng::with_rng(|rng| Self::resolve_with(rank, suit, rng))
    }

    /// Creates a card, drawing any missing input from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided input does not resolve.
    pub fn resolve_with<R: Rng + ?Sized>(
        rank: Option<RankInput>,
        suit: Option<SuitInput>,
        rng: &mut R,
    ) -> Result<Self, CardError> {
        let suit = match suit {
            Some(suit) => suit.resolve()?,
            None => random_suit(rng),
        };
        let rank_index = match rank {
            Some(rank) => rank.resolve()?,
            None => rng.random_range(0..RANKS.len()),
        };
        Self::from_sort_key(rank_index * Suit::COUNT + suit.index())
    }

    /// Creates a random card using the shared random source.
    #[must_use]
    pub fn random() -> Self {
        rng::with_rng(|rng| Self::random_with(rng))
    }

    /// Creates a random card using `rng`.
    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suit = random_suit(rng);
        Self::from_parts(rng.random_range(0..RANKS.len()), suit)
    }

    /// Creates the card with the given sort key.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSortKey`] if `sort_key` is not in `0..=51`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Suit};
    ///
    /// let card = Card::from_sort_key(51).unwrap();
    /// assert_eq!(card.rank(), "A");
    /// assert_eq!(card.suit(), Suit::Spades);
    /// assert!(Card::from_sort_key(52).is_err());
    /// ```
    pub const fn from_sort_key(sort_key: usize) -> Result<Self, CardError> {
        if sort_key >= DECK_SIZE {
            return Err(CardError::InvalidSortKey(sort_key));
        }
        Ok(Self {
            sort_key: sort_key as u8,
        })
    }

    /// Builds a card from already resolved parts.
    pub(crate) const fn from_parts(rank_index: usize, suit: Suit) -> Self {
        Self {
            sort_key: (rank_index * Suit::COUNT + suit.index()) as u8,
        }
    }

    /// Returns the canonical rank symbol.
    #[must_use]
    pub const fn rank(self) -> &'static str {
        RANKS[self.rank_index()]
    }

    /// Returns the position of the rank in [`RANKS`].
    #[must_use]
    pub const fn rank_index(self) -> usize {
        self.sort_key as usize / Suit::COUNT
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[self.sort_key as usize % Suit::COUNT]
    }

    /// Returns the sort key, `rank_index * 4 + suit_index`.
    #[must_use]
    pub const fn sort_key(self) -> usize {
        self.sort_key as usize
    }

    /// Returns the card drawn as a 7-line text block.
    ///
    /// ```text
    /// ┌─────────┐
    /// │ A       │
    /// │ ♠       │
    /// │         │
    /// │       ♠ │
    /// │       A │
    /// └─────────┘
    /// ```
    #[must_use]
    pub fn shape(self) -> String {
        let border = "─".repeat(SHAPE_WIDTH - 2);
        let blank = " ".repeat(SHAPE_WIDTH - 2);
        let rank = self.rank();
        let suit = self.suit();
        format!(
            "┌{border}┐\n\
             │ {rank:<8}│\n\
             │ {suit:<8}│\n\
             │{blank}│\n\
             │{suit:>8} │\n\
             │{rank:>8} │\n\
             └{border}┘"
        )
    }
}

fn random_suit<R: Rng + ?Sized>(rng: &mut R) -> Suit {
    Suit::ALL[rng.random_range(0..Suit::COUNT)]
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("rank", &self.rank())
            .field("suit", &self.suit().symbol())
            .finish()
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the `Display` form of a card, such as `A♠` or `10♡`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or_else(|| CardError::InvalidSuit(String::new()))?;
        Self::new(chars.as_str(), suit)
    }
}

impl TryFrom<&str> for Card {
    type Error = CardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
