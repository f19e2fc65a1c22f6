//! Hand representation and blackjack valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Best possible hand value; anything above is bust.
pub const BLACKJACK: u8 = 21;

/// Value of a set of cards with every ace counted as 1, plus whether one ace
/// can be promoted to 11.
#[derive(Clone, Copy)]
struct Score {
    hard: u8,
    has_ace: bool,
}

impl Score {
    fn of(cards: &[Card]) -> Self {
        cards.iter().fold(
            Self {
                hard: 0,
                has_ace: false,
            },
            |score, card| {
                let points = if card.is_ace() { 1 } else { card.value() };
                Self {
                    hard: score.hard.saturating_add(points),
                    has_ace: score.has_ace || card.is_ace(),
                }
            },
        )
    }

    /// Only one ace can ever count as 11 without busting.
    const fn promotes_ace(self) -> bool {
        self.has_ace && self.hard.saturating_add(10) <= BLACKJACK
    }

    const fn best(self) -> u8 {
        if self.promotes_ace() {
            self.hard + 10
        } else {
            self.hard
        }
    }
}

/// Cards held by one player hand or by the dealer.
///
/// The value is recomputed from the cards on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends `card`.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Cards in the order they were received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Best blackjack total of the hand.
    ///
    /// An ace counts 11 when that keeps the total at 21 or less, otherwise 1.
    /// An empty hand is worth 0.
    ///
    /// ```
    /// use bjround::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Clubs, Rank::Seven));
    /// assert_eq!(hand.value(), 18);
    /// hand.add_card(Card::new(Suit::Clubs, Rank::Nine));
    /// assert_eq!(hand.value(), 17);
    /// ```
    #[must_use]
    pub fn value(&self) -> u8 {
        Score::of(&self.cards).best()
    }

    /// Returns whether an ace is currently counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        Score::of(&self.cards).promotes_ace()
    }

    /// Returns whether the value is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is two cards of the same rank.
    ///
    /// A jack and a king are both worth 10 but are not a pair.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [first, second] if first.rank == second.rank)
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` before the first card is dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Moves the second card out of a two-card hand, for a split.
    ///
    /// Hands of any other size are left alone and yield `None`.
    pub fn take_second(&mut self) -> Option<Card> {
        (self.cards.len() == 2).then(|| self.cards.pop()).flatten()
    }

    /// Empties the hand, keeping its allocation.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
