//! Round engine and state management.

extern crate alloc;

use alloc::vec::Vec;

use crate::betting::{PayoutCalculator, StandardPayout};
use crate::card::Card;
use crate::deck::CardSource;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::observer::{GameObserver, NullObserver};
use crate::options::TableOptions;
use crate::player::{Player, PlayerHand, PlayerId};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::RoundState;

/// Runs one round of blackjack for a set of seated players.
///
/// The engine borrows the players for the round and owns the deck. Call
/// [`start_round`](Self::start_round), [`play_players`](Self::play_players),
/// [`dealer_play`](Self::dealer_play),
/// [`resolve_results`](Self::resolve_results) and
/// [`apply_payouts`](Self::apply_payouts) once each, in that order. Any
/// other order is rejected with [`RoundError::InvalidState`]; a failed phase
/// leaves the engine in [`RoundState::Aborted`].
///
/// # Example
///
/// ```
/// use bjround::{Bankroll, BasicBot, Bet, BotSettings, Deck, GameEngine, Player, PlayerId, StandardPayout};
///
/// let mut player = Player::new(
///     PlayerId(0),
///     "Ada",
///     Bankroll::new(100),
///     BasicBot::new(BotSettings::standard()),
/// )
/// .unwrap();
/// player.start_new_round_with_bet(Bet::new(10).unwrap()).unwrap();
///
/// let mut engine = GameEngine::new(Deck::new(42), StandardPayout, [&mut player]);
/// engine.start_round().unwrap();
/// engine.play_players().unwrap();
/// engine.dealer_play().unwrap();
/// let results = engine.resolve_results().unwrap();
/// engine.apply_payouts(&results).unwrap();
/// ```
pub struct GameEngine<'a, D, P = StandardPayout, O = NullObserver> {
    deck: D,
    payout: P,
    observer: O,
    options: TableOptions,
    /// Seated players, in registration order.
    players: Vec<&'a mut Player>,
    dealer: Hand,
    state: RoundState,
}

impl<'a, D, P> GameEngine<'a, D, P, NullObserver>
where
    D: CardSource,
    P: PayoutCalculator,
{
    /// Creates an engine for one round with default table options and no observer.
    pub fn new(deck: D, payout: P, players: impl IntoIterator<Item = &'a mut Player>) -> Self {
        Self {
            deck,
            payout,
            observer: NullObserver,
            options: TableOptions::default(),
            players: players.into_iter().collect(),
            dealer: Hand::new(),
            state: RoundState::NotStarted,
        }
    }
}

impl<'a, D, P, O> GameEngine<'a, D, P, O> {
    /// Replaces the observer notified of round events.
    ///
    /// Pass `&mut observer` to keep ownership of it.
    pub fn with_observer<T: GameObserver>(self, observer: T) -> GameEngine<'a, D, P, T> {
        GameEngine {
            deck: self.deck,
            payout: self.payout,
            observer,
            options: self.options,
            players: self.players,
            dealer: self.dealer,
            state: self.state,
        }
    }

    /// Sets the table options.
    #[must_use]
    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the table options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's face-up card, once dealt.
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer.cards().first().copied()
    }

    /// Returns the card source.
    pub const fn deck(&self) -> &D {
        &self.deck
    }

    /// Returns the seated players in registration order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().map(|player| &**player)
    }

    /// Returns the seated player with the given id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players().find(|player| player.id() == id)
    }
}

impl<D, P, O> GameEngine<'_, D, P, O>
where
    D: CardSource,
    P: PayoutCalculator,
    O: GameObserver,
{
    /// Runs one phase if the engine is in `from`, moving to `to` on success
    /// and to [`RoundState::Aborted`] on failure.
    fn advance<T>(
        &mut self,
        from: RoundState,
        to: RoundState,
        phase: impl FnOnce(&mut Self) -> Result<T, RoundError>,
    ) -> Result<T, RoundError> {
        if self.state != from {
            return Err(RoundError::InvalidState {
                expected: from,
                actual: self.state,
            });
        }

        match phase(self) {
            Ok(value) => {
                log::debug!("round {from:?} -> {to:?}");
                self.state = to;
                Ok(value)
            }
            Err(err) => {
                log::warn!("round aborted during {to:?}: {err}");
                self.state = RoundState::Aborted;
                Err(err)
            }
        }
    }

    /// Draws a card into the player's hand at `hand_index`.
    fn give_card(&mut self, player_index: usize, hand_index: usize) -> Result<Card, RoundError> {
        let card = self.deck.draw()?;
        if let Some(hand) = self.players[player_index].hand_mut(hand_index) {
            hand.hand_mut().add_card(card);
        }
        Ok(card)
    }

    fn notify_hand(
        &mut self,
        player_index: usize,
        hand_index: usize,
        event: impl FnOnce(&mut O, &Player, &PlayerHand),
    ) {
        let player: &Player = &*self.players[player_index];
        if let Some(hand) = player.hands().get(hand_index) {
            event(&mut self.observer, player, hand);
        }
    }
}
