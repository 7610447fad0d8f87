//! Text rendering of card sequences.
//!
//! Every card is drawn with [`Card::shape`] and the shapes are laid out side
//! by side, row by row. With a non-positive spacing the shapes overlap, so
//! only the right edge of every card after the first stays visible:
//!
//! ```text
//! ┌─────────┐──┐──┐──┐──┐──┐──┐
//! │ K       │  │  │  │  │  │  │
//! │ ♣       │  │  │  │  │  │  │
//! │         │  │  │...  │  │  │
//! │       ♣ │♡ │♠ │  │♣ │♡ │♠ │
//! │       K │K │K │  │A │A │A │
//! └─────────┘──┘──┘──┘──┘──┘──┘
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{Card, SHAPE_HEIGHT};
use crate::options::RenderOptions;

use super::Deck;

/// Hands with more cards than this are truncated unless
/// [`RenderOptions::show_all`] is set.
pub const TRUNCATE_THRESHOLD: usize = 6;

/// Cards kept whole at each end of a truncated hand.
const KEPT_AT_EACH_END: usize = 3;

/// Marker drawn over the collapsed cards.
const ELLIPSIS: &str = "...";

/// Row holding the ellipsis.
const BLANK_ROW: usize = 3;
/// Rows blanked out over the collapsed cards.
const SUIT_RIGHT_ROW: usize = 4;
const RANK_RIGHT_ROW: usize = 5;

/// Draws `cards` side by side as a single string.
///
/// The seven rows are joined with `\n`, without a trailing newline. An empty
/// sequence draws as an empty string.
///
/// # Example
///
/// ```
/// use deckrs::{Card, RenderOptions};
/// use deckrs::deck::render::gen_shape;
///
/// # fn main() -> Result<(), deckrs::CardError> {
/// let cards = [Card::new("A", "♠")?, Card::new(2, "♠")?];
/// let shape = gen_shape(cards, RenderOptions::default().with_space_width(1));
/// assert_eq!(shape.lines().next(), Some("┌─────────┐ ┌─────────┐"));
/// # Ok(())
/// # }
/// ```
pub fn gen_shape<I>(cards: I, options: RenderOptions) -> String
where
    I: IntoIterator<Item = Card>,
{
    let shapes: Vec<String> = cards.into_iter().map(Card::shape).collect();
    if shapes.is_empty() {
        return String::new();
    }

    let space_width = options.effective_space_width();
    let overlap = if space_width < 0 {
        space_width.unsigned_abs() as usize
    } else {
        0
    };
    let separator = if space_width > 0 {
        " ".repeat(space_width as usize)
    } else {
        String::new()
    };
    let truncate = !options.show_all && shapes.len() > TRUNCATE_THRESHOLD;

    let mut columns: Vec<_> = shapes.iter().map(|shape| shape.lines()).collect();
    let mut rows = Vec::with_capacity(SHAPE_HEIGHT);

    for row in 0..SHAPE_HEIGHT {
        let mut segments: Vec<String> = columns
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, lines)| {
                let line = lines.next()?;
                Some(if idx == 0 {
                    line.to_string()
                } else {
                    skip_chars(line, overlap).to_string()
                })
            })
            .collect();

        if truncate {
            collapse_middle(&mut segments, row);
        }

        rows.push(segments.join(&separator));
    }

    rows.join("\n")
}

/// Returns `line` without its first `count` characters.
fn skip_chars(line: &str, count: usize) -> &str {
    line.char_indices()
        .nth(count)
        .map_or("", |(offset, _)| &line[offset..])
}

/// Replaces the segments between the first and last [`KEPT_AT_EACH_END`]
/// cards with a single segment as wide as the first collapsed one.
fn collapse_middle(segments: &mut Vec<String>, row: usize) {
    let Some(end) = segments.len().checked_sub(KEPT_AT_EACH_END) else {
        return;
    };
    let Some(first) = segments.get(KEPT_AT_EACH_END) else {
        return;
    };
    if end <= KEPT_AT_EACH_END {
        return;
    }

    let replacement = match row {
        BLANK_ROW => ELLIPSIS.to_string(),
        SUIT_RIGHT_ROW | RANK_RIGHT_ROW => {
            let mut blank = " ".repeat(first.chars().count().saturating_sub(1));
            blank.push('│');
            blank
        }
        _ => first.clone(),
    };

    let tail = segments.split_off(end);
    segments.truncate(KEPT_AT_EACH_END);
    segments.push(replacement);
    segments.extend(tail);
}

impl Deck {
    /// Draws `cards` side by side, or the whole deck if `cards` is empty.
    ///
    /// See [`gen_shape`] for the layout. The deck is not modified.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck, RenderOptions};
    ///
    /// let deck = Deck::standard();
    /// let shape = deck.gen_shape(&[], RenderOptions::default());
    /// assert_eq!(shape.lines().count(), 7);
    /// assert_eq!(shape.matches("...").count(), 1);
    /// ```
    #[must_use]
    pub fn gen_shape(&self, cards: &[Card], options: RenderOptions) -> String {
        if cards.is_empty() {
            gen_shape(self.cards.iter().copied(), options)
        } else {
            gen_shape(cards.iter().copied(), options)
        }
    }
}
