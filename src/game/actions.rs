use crate::betting::PayoutCalculator;
use crate::card::Card;
use crate::deck::CardSource;
use crate::error::RoundError;
use crate::observer::GameObserver;
use crate::player::{Player, PlayerHand};
use crate::strategy::Action;

use super::{GameEngine, RoundState};

/// Double down needs a fresh two-card hand and a bankroll covering twice the bet.
fn can_double_down(player: &Player, hand: &PlayerHand) -> bool {
    hand.hand().len() == 2
        && !hand.state().has_doubled_down()
        && player.bankroll().can_cover_double(hand.bet())
}

impl<D, P, O> GameEngine<'_, D, P, O>
where
    D: CardSource,
    P: PayoutCalculator,
    O: GameObserver,
{
    /// Plays every player's hands to completion.
    ///
    /// Players act in registration order and hands in index order. A hand
    /// created by a split is played later in the same pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial deal has not happened or the deck
    /// runs out.
    pub fn play_players(&mut self) -> Result<(), RoundError> {
        self.advance(RoundState::InitialDeal, RoundState::PlayersActing, |engine| {
            let up_card = engine.dealer_up_card().ok_or(RoundError::InvalidState {
                expected: RoundState::InitialDeal,
                actual: engine.state,
            })?;

            for player_index in 0..engine.players.len() {
                let mut hand_index = 0;
                // Re-read the count every pass so split hands are picked up.
                while hand_index < engine.players[player_index].hand_count() {
                    engine.play_hand(player_index, hand_index, up_card)?;
                    hand_index += 1;
                }
            }

            Ok(())
        })
    }

    /// Returns whether the hand may be split: a pair, room for one more hand,
    /// and a bankroll covering twice the bet.
    fn can_split(&self, player: &Player, hand: &PlayerHand) -> bool {
        hand.hand().is_pair()
            && player.hands().len() < self.options.max_hands
            && player.bankroll().can_cover_double(hand.bet())
    }

    fn play_hand(
        &mut self,
        player_index: usize,
        hand_index: usize,
        up_card: Card,
    ) -> Result<(), RoundError> {
        loop {
            let player: &Player = &*self.players[player_index];
            let Some(hand) = player.hands().get(hand_index) else {
                return Ok(());
            };
            if hand.hand().is_bust() {
                return Ok(());
            }
            let can_double = can_double_down(player, hand);
            let can_split = self.can_split(player, hand);

            let Some(action) = self.players[player_index].decide(
                hand_index,
                up_card,
                can_double,
                can_split,
            ) else {
                return Ok(());
            };

            log::debug!(
                "player {} hand {hand_index}: {action}",
                self.players[player_index].id()
            );
            self.notify_hand(player_index, hand_index, |observer, player, hand| {
                observer.on_player_decision(player, hand, action.label());
            });

            match action {
                Action::Hit => {
                    self.draw_for_player(player_index, hand_index)?;
                }
                Action::Stand => {
                    self.mark_stood(player_index, hand_index);
                    return Ok(());
                }
                Action::DoubleDown if can_double => {
                    self.draw_for_player(player_index, hand_index)?;
                    if let Some(hand) = self.players[player_index].hand_mut(hand_index) {
                        hand.state_mut().mark_doubled_down();
                    }
                    return Ok(());
                }
                Action::Split if can_split => {
                    if !self.split(player_index, hand_index)? {
                        self.mark_stood(player_index, hand_index);
                        return Ok(());
                    }
                }
                Action::DoubleDown | Action::Split => {
                    log::warn!(
                        "player {} asked to {action} when not allowed; standing",
                        self.players[player_index].id()
                    );
                    self.mark_stood(player_index, hand_index);
                    return Ok(());
                }
            }
        }
    }

    fn mark_stood(&mut self, player_index: usize, hand_index: usize) {
        if let Some(hand) = self.players[player_index].hand_mut(hand_index) {
            hand.state_mut().stand();
        }
    }

    fn draw_for_player(
        &mut self,
        player_index: usize,
        hand_index: usize,
    ) -> Result<Card, RoundError> {
        let card = self.give_card(player_index, hand_index)?;
        self.notify_hand(player_index, hand_index, |observer, player, hand| {
            observer.on_player_card_drawn(player, hand, card);
        });
        Ok(card)
    }

    /// Splits the pair at `hand_index` into two hands, each refilled with one
    /// fresh card. The new hand carries the same bet and goes to the end of
    /// the player's hands.
    ///
    /// Returns `false` without changing anything if the bankroll no longer
    /// covers the split or the hand is not a two-card hand.
    fn split(&mut self, player_index: usize, hand_index: usize) -> Result<bool, RoundError> {
        let player = &mut *self.players[player_index];
        let Some(bet) = player.hands().get(hand_index).map(PlayerHand::bet) else {
            return Ok(false);
        };
        if !player.bankroll().can_cover_double(bet) {
            log::warn!("player {} can no longer cover a split; ignoring", player.id());
            return Ok(false);
        }
        let Some(second) = player
            .hand_mut(hand_index)
            .and_then(|hand| hand.hand_mut().take_second())
        else {
            return Ok(false);
        };
        let new_index = player.push_split_hand(second, bet);

        self.draw_for_player(player_index, hand_index)?;
        self.draw_for_player(player_index, new_index)?;
        Ok(true)
    }
}
