//! Error types for round operations.

use thiserror::Error;

use crate::game::RoundState;
use crate::player::PlayerId;
use crate::result::PlayerHandKey;

/// Errors raised by a card source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("cannot draw from an empty deck")]
    Empty,
}

/// Errors that can occur when constructing or placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The bankroll cannot cover the bet.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors raised when a bankroll change would break its invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BankrollError {
    /// Applying the change would make the balance negative.
    #[error("net change {change} would take balance {balance} below zero")]
    Underflow {
        /// Balance before the change.
        balance: usize,
        /// The rejected signed change.
        change: isize,
    },
}

/// Errors that can occur when creating players or bot settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Player name is empty or whitespace.
    #[error("a player name is required")]
    EmptyName,
    /// Bot hit threshold outside 0..=21.
    #[error("hit threshold {0} is outside 0..=21")]
    InvalidBotThreshold(u8),
    /// Every player id is taken.
    #[error("the table has no free seat")]
    TableFull,
}

/// Errors that abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A round operation was called out of sequence.
    #[error("invalid round state: expected {expected:?}, found {actual:?}")]
    InvalidState {
        /// The state the operation requires.
        expected: RoundState,
        /// The state the engine was in.
        actual: RoundState,
    },
    /// A player entered the round without a fresh hand (no bet placed for it).
    #[error("player {0} has no hand for this round")]
    NoHand(PlayerId),
    /// A payout referenced a hand that is not part of this round.
    #[error("no hand matches {0:?} in this round")]
    UnknownHand(PlayerHandKey),
    /// The engine was built without players.
    #[error("no players are seated")]
    NoPlayers,
    /// The card source ran out.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A payout would have driven a bankroll negative.
    #[error(transparent)]
    Bankroll(#[from] BankrollError),
}

/// Errors that can occur while running a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No player can place a bet.
    #[error("no players have money left")]
    NoPlayers,
    /// A bet returned by the betting rule was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The round itself failed.
    #[error(transparent)]
    Round(#[from] RoundError),
}
