//! Round event notifications.

use crate::card::Card;
use crate::player::{Player, PlayerHand};

/// Receives events as a round unfolds.
///
/// Every method defaults to doing nothing, so implementors only override the
/// events they care about. Events are fire-and-forget.
pub trait GameObserver {
    /// A round has started.
    fn on_round_started(&mut self) {}

    /// The dealer received both initial cards.
    fn on_dealer_dealt(&mut self, _up_card: Card, _hole_card: Card) {}

    /// A player received an initial card.
    fn on_player_dealt(&mut self, _player: &Player, _hand: &PlayerHand, _card: Card) {}

    /// A player's strategy chose an action.
    fn on_player_decision(&mut self, _player: &Player, _hand: &PlayerHand, _decision: &str) {}

    /// A player drew a card (hit, double down, or split refill).
    fn on_player_card_drawn(&mut self, _player: &Player, _hand: &PlayerHand, _card: Card) {}

    /// The dealer drew a card, leaving the hand at `dealer_value`.
    fn on_dealer_card_drawn(&mut self, _card: Card, _dealer_value: u8) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_round_started(&mut self) {
        (**self).on_round_started();
    }

    fn on_dealer_dealt(&mut self, up_card: Card, hole_card: Card) {
        (**self).on_dealer_dealt(up_card, hole_card);
    }

    fn on_player_dealt(&mut self, player: &Player, hand: &PlayerHand, card: Card) {
        (**self).on_player_dealt(player, hand, card);
    }

    fn on_player_decision(&mut self, player: &Player, hand: &PlayerHand, decision: &str) {
        (**self).on_player_decision(player, hand, decision);
    }

    fn on_player_card_drawn(&mut self, player: &Player, hand: &PlayerHand, card: Card) {
        (**self).on_player_card_drawn(player, hand, card);
    }

    fn on_dealer_card_drawn(&mut self, card: Card, dealer_value: u8) {
        (**self).on_dealer_card_drawn(card, dealer_value);
    }
}
