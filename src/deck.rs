//! Card sources and the standard shuffled deck.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A finite supply of cards the engine draws from.
pub trait CardSource {
    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] once the source is exhausted.
    fn draw(&mut self) -> Result<Card, DeckError>;

    /// Returns the number of cards remaining.
    fn count(&self) -> usize;
}

impl<S: CardSource + ?Sized> CardSource for &mut S {
    fn draw(&mut self) -> Result<Card, DeckError> {
        (**self).draw()
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}

/// A single 52-card deck.
///
/// Cards are drawn from the front of the shuffled order. The same seed always
/// yields the same order.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a deck shuffled from an unpredictable seed.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    /// Creates a deck that deals `cards` in the given order, without shuffling.
    ///
    /// Useful for replaying a known round. The cards are not checked against
    /// the standard 52.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Card, CardSource, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::stacked([Card::new(Suit::Spades, Rank::Ace)]);
    /// assert_eq!(deck.draw().unwrap().rank, Rank::Ace);
    /// assert!(deck.draw().is_err());
    /// ```
    #[must_use]
    pub fn stacked(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        let mut deck = Self {
            cards: Self::standard_cards().into(),
            rng,
        };
        deck.shuffle();
        deck
    }

    fn standard_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Shuffles the remaining cards in place (Fisher–Yates).
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    /// Returns the remaining cards, next to be drawn first.
    pub fn remaining(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl CardSource for Deck {
    fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop_front().ok_or(DeckError::Empty)?;
        log::trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    fn count(&self) -> usize {
        self.cards.len()
    }
}
