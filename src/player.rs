//! Players and the hands they play.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::betting::{Bankroll, Bet};
use crate::card::Card;
use crate::error::{BetError, PlayerError};
use crate::hand::Hand;
use crate::result::PlayerHandKey;
use crate::strategy::{Action, DecisionContext, Strategy};

/// Player identifier, assigned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hand identifier, unique per player for the player's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandId(pub u32);

/// Per-hand flags, reset every round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerHandState {
    has_stood: bool,
    has_doubled_down: bool,
}

impl PlayerHandState {
    /// Whether the hand has stood.
    #[must_use]
    pub const fn has_stood(&self) -> bool {
        self.has_stood
    }

    /// Whether the hand has doubled down.
    #[must_use]
    pub const fn has_doubled_down(&self) -> bool {
        self.has_doubled_down
    }

    pub(crate) const fn stand(&mut self) {
        self.has_stood = true;
    }

    pub(crate) const fn mark_doubled_down(&mut self) {
        self.has_doubled_down = true;
    }

    /// Clears both flags.
    pub const fn reset(&mut self) {
        self.has_stood = false;
        self.has_doubled_down = false;
    }
}

/// One hand of cards bound to its bet. Splitting creates a second one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHand {
    id: HandId,
    hand: Hand,
    bet: Bet,
    state: PlayerHandState,
}

impl PlayerHand {
    /// Creates an empty hand carrying `bet`.
    #[must_use]
    pub const fn new(id: HandId, bet: Bet) -> Self {
        Self {
            id,
            hand: Hand::new(),
            bet,
            state: PlayerHandState {
                has_stood: false,
                has_doubled_down: false,
            },
        }
    }

    /// Returns the hand identifier.
    #[must_use]
    pub const fn id(&self) -> HandId {
        self.id
    }

    /// Returns the cards.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the base bet (before any doubling).
    #[must_use]
    pub const fn bet(&self) -> Bet {
        self.bet
    }

    /// Returns the per-hand flags.
    #[must_use]
    pub const fn state(&self) -> PlayerHandState {
        self.state
    }

    /// Prepares the hand for a new round with a new bet.
    pub fn reset(&mut self, bet: Bet) {
        self.bet = bet;
        self.hand.clear();
        self.state.reset();
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) const fn state_mut(&mut self) -> &mut PlayerHandState {
        &mut self.state
    }
}

/// A seated player: identity, bankroll, strategy, and this round's hands.
pub struct Player {
    id: PlayerId,
    name: String,
    bankroll: Bankroll,
    strategy: Box<dyn Strategy>,
    hands: Vec<PlayerHand>,
    next_hand_id: u32,
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("bankroll", &self.bankroll)
            .field("hands", &self.hands)
            .finish_non_exhaustive()
    }
}

impl Player {
    /// Creates a player with no hands.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::EmptyName`] if `name` is blank.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        bankroll: Bankroll,
        strategy: impl Strategy + 'static,
    ) -> Result<Self, PlayerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlayerError::EmptyName);
        }

        Ok(Self {
            id,
            name,
            bankroll,
            strategy: Box::new(strategy),
            hands: Vec::new(),
            next_hand_id: 0,
        })
    }

    /// Returns the player identifier.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    /// Returns the bankroll mutably (e.g. to reset it between sessions).
    pub const fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.bankroll
    }

    /// Returns this round's hands, in play order.
    #[must_use]
    pub fn hands(&self) -> &[PlayerHand] {
        &self.hands
    }

    /// Returns the key for the hand at `index`.
    #[must_use]
    pub fn hand_key(&self, index: usize) -> Option<PlayerHandKey> {
        self.hands
            .get(index)
            .map(|hand| PlayerHandKey::new(self.id, hand.id))
    }

    /// Finds a hand by identifier.
    #[must_use]
    pub fn hand_by_id(&self, id: HandId) -> Option<&PlayerHand> {
        self.hands.iter().find(|hand| hand.id == id)
    }

    /// Places a bet and leaves the player with one empty hand for the round.
    ///
    /// The first hand from the previous round is reused; any split hand is
    /// dropped. The reused hand gets a fresh [`HandId`].
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if the bankroll cannot cover
    /// the bet. The player's hands are left untouched in that case.
    pub fn start_new_round_with_bet(&mut self, bet: Bet) -> Result<(), BetError> {
        if !self.bankroll.can_place_bet(bet.amount()) {
            return Err(BetError::InsufficientFunds);
        }

        let id = self.allocate_hand_id();
        self.hands.truncate(1);
        match self.hands.first_mut() {
            Some(hand) => {
                hand.reset(bet);
                hand.id = id;
            }
            None => self.hands.push(PlayerHand::new(id, bet)),
        }
        Ok(())
    }

    /// Drops all hands, leaving the player out of the next round.
    pub fn sit_out(&mut self) {
        self.hands.clear();
    }

    const fn allocate_hand_id(&mut self) -> HandId {
        let id = HandId(self.next_hand_id);
        self.next_hand_id = self.next_hand_id.wrapping_add(1);
        id
    }

    /// Returns whether a bet has been placed since the last round: exactly one
    /// hand, no cards, no flags set.
    pub(crate) fn has_fresh_hand(&self) -> bool {
        match self.hands.as_slice() {
            [hand] => hand.hand.is_empty() && hand.state == PlayerHandState::default(),
            _ => false,
        }
    }

    pub(crate) fn hand_mut(&mut self, index: usize) -> Option<&mut PlayerHand> {
        self.hands.get_mut(index)
    }

    pub(crate) fn hand_count(&self) -> usize {
        self.hands.len()
    }

    /// Appends a split hand holding `card` and returns its index.
    pub(crate) fn push_split_hand(&mut self, card: Card, bet: Bet) -> usize {
        let id = self.allocate_hand_id();
        let mut hand = PlayerHand::new(id, bet);
        hand.hand.add_card(card);
        self.hands.push(hand);
        self.hands.len() - 1
    }

    pub(crate) fn decide(
        &mut self,
        index: usize,
        dealer_up_card: Card,
        can_double_down: bool,
        can_split: bool,
    ) -> Option<Action> {
        let hand = self.hands.get(index)?;
        let context = DecisionContext {
            hand,
            dealer_up_card,
            can_double_down,
            can_split,
        };
        Some(self.strategy.decide(&context))
    }
}
