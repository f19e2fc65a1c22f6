//! A multi-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`GameEngine`] that runs one round against a single
//! dealer: it deals, asks each player's [`Strategy`] what to do (hit, stand,
//! double down, or split), plays the dealer's hand, and settles bets through
//! a [`PayoutCalculator`]. Players and their [`Bankroll`]s outlive the engine,
//! so a [`Session`] can run many rounds over the same table.
//!
//! # Example
//!
//! ```
//! use bjround::{BasicBot, BotSettings, NullObserver, Session, bot_bet};
//!
//! let mut session = Session::default().with_seed(7);
//! session
//!     .join("Ada", 100, BasicBot::new(BotSettings::standard()))
//!     .unwrap();
//!
//! let report = session
//!     .play_round(|player| bot_bet(player.bankroll().balance()), NullObserver)
//!     .unwrap();
//! assert_eq!(report.round, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod betting;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod observer;
pub mod options;
pub mod player;
pub mod result;
pub mod session;
pub mod strategy;

// Re-export main types
pub use betting::{Bankroll, Bet, PayoutCalculator, StandardPayout};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{CardSource, Deck};
pub use error::{BankrollError, BetError, DeckError, PlayerError, RoundError, SessionError};
pub use game::{GameEngine, RoundState};
pub use hand::Hand;
pub use observer::{GameObserver, NullObserver};
pub use options::TableOptions;
pub use player::{HandId, Player, PlayerHand, PlayerHandState, PlayerId};
pub use result::{HandResolution, PlayerHandKey, RoundResult, Settlement, determine_winner};
pub use session::{RoundReport, Session, bot_bet};
pub use strategy::{Action, BasicBot, BotSettings, DecisionContext, Strategy};
