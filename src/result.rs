//! Round outcomes and settlement records.

use core::fmt;

use crate::hand::Hand;
use crate::player::{HandId, PlayerId};

/// Outcome of one player hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundResult {
    /// The player's hand beat the dealer.
    PlayerWin,
    /// The dealer beat the player's hand.
    DealerWin,
    /// Tie; no money changes hands.
    Push,
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerWin => "PlayerWin",
            Self::DealerWin => "DealerWin",
            Self::Push => "Push",
        })
    }
}

/// Identifies one hand of one player within a round.
///
/// Split hands share a bet amount but never a [`HandId`], so results for
/// siblings cannot be confused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerHandKey {
    /// The owning player.
    pub player: PlayerId,
    /// The hand within that player's hands.
    pub hand: HandId,
}

impl PlayerHandKey {
    /// Creates a key.
    #[must_use]
    pub const fn new(player: PlayerId, hand: HandId) -> Self {
        Self { player, hand }
    }
}

/// A resolved hand, produced by [`GameEngine::resolve_results`](crate::GameEngine::resolve_results).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResolution {
    /// The hand this result applies to.
    pub key: PlayerHandKey,
    /// The outcome against the dealer.
    pub result: RoundResult,
}

/// A paid-out hand, produced by [`GameEngine::apply_payouts`](crate::GameEngine::apply_payouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The hand that was settled.
    pub key: PlayerHandKey,
    /// The outcome against the dealer.
    pub result: RoundResult,
    /// Base bet on the hand.
    pub bet: usize,
    /// Whether the stake was doubled.
    pub doubled_down: bool,
    /// Signed change applied to the bankroll.
    pub net: isize,
    /// Final value of the player's hand.
    pub player_value: u8,
}

/// Compares a finished player hand against the dealer's hand.
///
/// A player bust loses even when the dealer also busts.
#[must_use]
pub fn determine_winner(player: &Hand, dealer: &Hand) -> RoundResult {
    if player.is_bust() {
        return RoundResult::DealerWin;
    }
    if dealer.is_bust() {
        return RoundResult::PlayerWin;
    }

    match player.value().cmp(&dealer.value()) {
        core::cmp::Ordering::Greater => RoundResult::PlayerWin,
        core::cmp::Ordering::Less => RoundResult::DealerWin,
        core::cmp::Ordering::Equal => RoundResult::Push,
    }
}
