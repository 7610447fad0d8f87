//! Rendering configuration options.

/// Narrowest allowed spacing between card shapes.
///
/// At this width adjacent shapes overlap so that only the rightmost three
/// columns of every shape after the first stay visible.
pub const MIN_SPACE_WIDTH: i32 = -8;

/// Configuration options for [`Deck::gen_shape`](crate::Deck::gen_shape).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::RenderOptions;
///
/// let options = RenderOptions::default()
///     .with_space_width(3)
///     .with_show_all(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    /// Spacing between shapes.
    ///
    /// Positive values insert that many spaces between shapes; zero or
    /// negative values overlap shapes by that many columns. Values below
    /// [`MIN_SPACE_WIDTH`] are treated as [`MIN_SPACE_WIDTH`].
    pub space_width: i32,
    /// Whether every card is drawn in full even for hands of more than six
    /// cards.
    pub show_all: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            space_width: MIN_SPACE_WIDTH,
            show_all: false,
        }
    }
}

impl RenderOptions {
    /// Sets the spacing between shapes.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::RenderOptions;
    ///
    /// let options = RenderOptions::default().with_space_width(0);
    /// assert_eq!(options.space_width, 0);
    /// ```
    #[must_use]
    pub const fn with_space_width(mut self, space_width: i32) -> Self {
        self.space_width = space_width;
        self
    }

    /// Sets whether all cards are drawn in full.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::RenderOptions;
    ///
    /// let options = RenderOptions::default().with_show_all(true);
    /// assert_eq!(options.show_all, true);
    /// ```
    #[must_use]
    pub const fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    /// Returns the spacing floored at [`MIN_SPACE_WIDTH`].
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::RenderOptions;
    ///
    /// let options = RenderOptions::default().with_space_width(-20);
    /// assert_eq!(options.effective_space_width(), -8);
    /// ```
    #[must_use]
    pub const fn effective_space_width(&self) -> i32 {
        if self.space_width < MIN_SPACE_WIDTH {
            MIN_SPACE_WIDTH
        } else {
            self.space_width
        }
    }
}
