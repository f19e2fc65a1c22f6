//! Table configuration options.

/// Table rules for a round.
///
/// The defaults are the house rules: the dealer draws to a hard 17 and each
/// player may split once. Use the builder methods to customise:
///
/// ```
/// use bjround::TableOptions;
///
/// let options = TableOptions::default()
///     .with_dealer_stands_on(18)
///     .with_max_hands(1);
/// assert_eq!(options.dealer_stands_on, 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// The dealer draws while the hand is worth less than this.
    pub dealer_stands_on: u8,
    /// Maximum hands a player may hold; splitting needs room for one more.
    pub max_hands: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            max_hands: 2,
        }
    }
}

impl TableOptions {
    /// Sets the value the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets the maximum number of hands per player. `1` disables splitting.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_hands(1);
    /// assert_eq!(options.max_hands, 1);
    /// ```
    #[must_use]
    pub const fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = max_hands;
        self
    }
}
