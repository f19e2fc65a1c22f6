//! Multi-round play over a persistent set of players.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::betting::{Bankroll, Bet, PayoutCalculator, StandardPayout};
use crate::card::Card;
use crate::deck::Deck;
use crate::error::{PlayerError, SessionError};
use crate::game::GameEngine;
use crate::observer::GameObserver;
use crate::options::TableOptions;
use crate::player::{Player, PlayerId};
use crate::result::{PlayerHandKey, RoundResult, Settlement};
use crate::strategy::Strategy;

/// Default bet rule for automated players: a tenth of the balance, at least 1.
///
/// ```
/// assert_eq!(bjround::bot_bet(250), 25);
/// assert_eq!(bjround::bot_bet(7), 1);
/// ```
#[must_use]
pub const fn bot_bet(balance: usize) -> usize {
    let bet = balance / 10;
    if bet == 0 { 1 } else { bet }
}

/// What happened in one completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Round number within the session, starting at 1.
    pub round: u32,
    /// The dealer's final cards.
    pub dealer_cards: Vec<Card>,
    /// The dealer's final value.
    pub dealer_value: u8,
    /// One entry per hand played, in play order.
    pub settlements: Vec<Settlement>,
}

impl RoundReport {
    /// Finds the result for a specific hand.
    #[must_use]
    pub fn result_for(&self, key: PlayerHandKey) -> Option<RoundResult> {
        self.settlements
            .iter()
            .find(|settlement| settlement.key == key)
            .map(|settlement| settlement.result)
    }

    /// Sums the bankroll changes for one player.
    #[must_use]
    pub fn net_for(&self, player: PlayerId) -> isize {
        self.settlements
            .iter()
            .filter(|settlement| settlement.key.player == player)
            .map(|settlement| settlement.net)
            .sum()
    }
}

/// A table of players that keep their bankrolls from round to round.
///
/// Each round gets a fresh deck and a fresh [`GameEngine`]. Players with an
/// empty bankroll sit out.
pub struct Session<P = StandardPayout> {
    payout: P,
    options: TableOptions,
    seed: Option<u64>,
    players: Vec<Player>,
    rounds_played: u32,
}

impl<P: PayoutCalculator> Session<P> {
    /// Creates an empty session.
    pub fn new(payout: P) -> Self {
        Self {
            payout,
            options: TableOptions::default(),
            seed: None,
            players: Vec::new(),
            rounds_played: 0,
        }
    }

    /// Sets the table options used for every round.
    #[must_use]
    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    /// Makes deck order reproducible: round `n` shuffles with `seed + n`.
    ///
    /// Without a seed, decks are shuffled from entropy, which needs the `std`
    /// feature; `no_std` builds fall back to the round number as the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seats a new player and returns their id.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::EmptyName`] if `name` is blank and
    /// [`PlayerError::TableFull`] once all 256 ids are taken.
    pub fn join(
        &mut self,
        name: impl Into<String>,
        starting_balance: usize,
        strategy: impl Strategy + 'static,
    ) -> Result<PlayerId, PlayerError> {
        let id = u8::try_from(self.players.len())
            .map(PlayerId)
            .map_err(|_| PlayerError::TableFull)?;
        let player = Player::new(id, name, Bankroll::new(starting_balance), strategy)?;
        self.players.push(player);
        Ok(id)
    }

    /// Returns the seated players in registration order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    /// Returns the number of rounds completed.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns whether any player still has money to bet.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.bankroll().balance() > 0)
    }

    /// Plays one round.
    ///
    /// `bets` is asked for a wager for each player with a positive balance;
    /// [`bot_bet`] is a reasonable default.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoPlayers`] if nobody can bet,
    /// [`SessionError::Bet`] if a wager is zero or unaffordable, and
    /// [`SessionError::Round`] if the round fails.
    pub fn play_round<O: GameObserver>(
        &mut self,
        mut bets: impl FnMut(&Player) -> usize,
        observer: O,
    ) -> Result<RoundReport, SessionError> {
        if !self.can_continue() {
            return Err(SessionError::NoPlayers);
        }

        for player in &mut self.players {
            if player.bankroll().balance() == 0 {
                player.sit_out();
                continue;
            }
            let bet = Bet::new(bets(player))?;
            player.start_new_round_with_bet(bet)?;
        }

        let round = self.rounds_played + 1;
        let deck = self.deck_for(round);
        let seated = self
            .players
            .iter_mut()
            .filter(|player| !player.hands().is_empty());

        let mut engine = GameEngine::new(deck, &self.payout, seated)
            .with_options(self.options)
            .with_observer(observer);

        engine.start_round()?;
        engine.play_players()?;
        engine.dealer_play()?;
        let results = engine.resolve_results()?;
        let settlements = engine.apply_payouts(&results)?;

        let report = RoundReport {
            round,
            dealer_cards: engine.dealer_hand().cards().to_vec(),
            dealer_value: engine.dealer_hand().value(),
            settlements,
        };
        drop(engine);

        self.rounds_played = round;
        log::info!(
            "round {round} settled: dealer {} over {} hands",
            report.dealer_value,
            report.settlements.len()
        );
        Ok(report)
    }

    fn deck_for(&self, round: u32) -> Deck {
        match self.seed {
            Some(seed) => Deck::new(seed.wrapping_add(u64::from(round))),
            None => Self::unseeded_deck(round),
        }
    }

    #[cfg(feature = "std")]
    fn unseeded_deck(_round: u32) -> Deck {
        Deck::from_entropy()
    }

    #[cfg(not(feature = "std"))]
    fn unseeded_deck(round: u32) -> Deck {
        Deck::new(u64::from(round))
    }
}

impl Default for Session<StandardPayout> {
    fn default() -> Self {
        Self::new(StandardPayout)
    }
}
