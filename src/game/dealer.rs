extern crate alloc;

use alloc::vec::Vec;

use crate::betting::PayoutCalculator;
use crate::deck::CardSource;
use crate::error::RoundError;
use crate::observer::GameObserver;
use crate::result::{HandResolution, PlayerHandKey, Settlement, determine_winner};

use super::{GameEngine, RoundState};

impl<D, P, O> GameEngine<'_, D, P, O>
where
    D: CardSource,
    P: PayoutCalculator,
    O: GameObserver,
{
    /// Dealer plays their hand.
    ///
    /// The dealer draws while the hand is worth less than
    /// [`TableOptions::dealer_stands_on`](crate::TableOptions::dealer_stands_on)
    /// (17 by default). Soft totals are not treated specially.
    ///
    /// # Errors
    ///
    /// Returns an error if players have not finished acting or the deck runs
    /// out while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<(), RoundError> {
        self.advance(RoundState::PlayersActing, RoundState::DealerActing, |engine| {
            while engine.dealer.value() < engine.options.dealer_stands_on {
                let card = engine.deck.draw()?;
                engine.dealer.add_card(card);
                let value = engine.dealer.value();
                log::trace!("dealer draws {card}, now {value}");
                engine.observer.on_dealer_card_drawn(card, value);
            }
            Ok(())
        })
    }

    /// Compares every player hand against the dealer.
    ///
    /// Results are ordered by player registration, then hand index.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not played yet.
    pub fn resolve_results(&mut self) -> Result<Vec<HandResolution>, RoundError> {
        self.advance(RoundState::DealerActing, RoundState::Resolved, |engine| {
            let dealer = &engine.dealer;
            let results = engine
                .players
                .iter()
                .flat_map(|player| {
                    player.hands().iter().map(move |hand| HandResolution {
                        key: PlayerHandKey::new(player.id(), hand.id()),
                        result: determine_winner(hand.hand(), dealer),
                    })
                })
                .collect();
            Ok(results)
        })
    }

    /// Settles each resolved hand against its player's bankroll.
    ///
    /// Every key and every bankroll change is checked before any bankroll is
    /// touched, so a failed call leaves all balances as they were.
    ///
    /// # Errors
    ///
    /// Returns an error if results have not been resolved, a key does not
    /// belong to this round, or a payout would make a bankroll negative.
    pub fn apply_payouts(
        &mut self,
        results: &[HandResolution],
    ) -> Result<Vec<Settlement>, RoundError> {
        self.advance(RoundState::Resolved, RoundState::PayoutsApplied, |engine| {
            let mut settlements = Vec::with_capacity(results.len());
            let mut owners = Vec::with_capacity(results.len());
            for resolution in results {
                let (player_index, hand_index) = engine
                    .locate(resolution.key)
                    .ok_or(RoundError::UnknownHand(resolution.key))?;
                let hand = &engine.players[player_index].hands()[hand_index];
                let bet = hand.bet();
                let doubled_down = hand.state().has_doubled_down();

                settlements.push(Settlement {
                    key: resolution.key,
                    result: resolution.result,
                    bet: bet.amount(),
                    doubled_down,
                    net: engine.payout.calculate(bet, resolution.result, doubled_down),
                    player_value: hand.hand().value(),
                });
                owners.push(player_index);
            }

            // Dry run on copies so an underflow anywhere aborts before any change.
            let mut projected: Vec<_> = engine
                .players
                .iter()
                .map(|player| *player.bankroll())
                .collect();
            for (settlement, &owner) in settlements.iter().zip(&owners) {
                projected[owner].apply_net_change(settlement.net)?;
            }

            for (settlement, &owner) in settlements.iter().zip(&owners) {
                let player = &mut *engine.players[owner];
                player.bankroll_mut().apply_net_change(settlement.net)?;
                log::debug!(
                    "player {} {}: {:+}, balance {}",
                    player.id(),
                    settlement.result,
                    settlement.net,
                    player.bankroll().balance()
                );
            }
            Ok(settlements)
        })
    }

    fn locate(&self, key: PlayerHandKey) -> Option<(usize, usize)> {
        let player_index = self.players.iter().position(|p| p.id() == key.player)?;
        let hand_index = self.players[player_index]
            .hands()
            .iter()
            .position(|hand| hand.id() == key.hand)?;
        Some((player_index, hand_index))
    }
}
