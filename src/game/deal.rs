use crate::betting::PayoutCalculator;
use crate::deck::CardSource;
use crate::error::RoundError;
use crate::observer::GameObserver;

use super::{GameEngine, RoundState};

impl<D, P, O> GameEngine<'_, D, P, O>
where
    D: CardSource,
    P: PayoutCalculator,
    O: GameObserver,
{
    /// Deals the initial cards.
    ///
    /// The dealer receives the up card and then the hole card; each player in
    /// turn then receives two cards to their first hand. Every player must
    /// have placed a bet for this round (see
    /// [`Player::start_new_round_with_bet`](crate::Player::start_new_round_with_bet))
    /// beforehand; hands left over from an earlier round are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already started, no players are
    /// seated, a player has no hand, or the deck runs out.
    pub fn start_round(&mut self) -> Result<(), RoundError> {
        self.advance(RoundState::NotStarted, RoundState::InitialDeal, |engine| {
            engine.dealer.clear();
            engine.observer.on_round_started();

            if engine.players.is_empty() {
                return Err(RoundError::NoPlayers);
            }
            if let Some(player) = engine.players.iter().find(|p| !p.has_fresh_hand()) {
                return Err(RoundError::NoHand(player.id()));
            }

            let up_card = engine.deck.draw()?;
            engine.dealer.add_card(up_card);
            let hole_card = engine.deck.draw()?;
            engine.dealer.add_card(hole_card);
            log::trace!("dealer shows {up_card}");
            engine.observer.on_dealer_dealt(up_card, hole_card);

            for player_index in 0..engine.players.len() {
                for _ in 0..2 {
                    let card = engine.give_card(player_index, 0)?;
                    log::trace!("player {} dealt {card}", engine.players[player_index].id());
                    engine.notify_hand(player_index, 0, |observer, player, hand| {
                        observer.on_player_dealt(player, hand, card);
                    });
                }
            }

            Ok(())
        })
    }
}
