//! Bets, bankrolls, and payout rules.

use crate::error::{BankrollError, BetError};
use crate::result::RoundResult;

/// A wager on a single hand. The amount is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bet {
    amount: usize,
}

impl Bet {
    /// Creates a bet.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::ZeroBet`] if `amount` is zero.
    pub const fn new(amount: usize) -> Result<Self, BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        Ok(Self { amount })
    }

    /// Returns the bet amount.
    #[must_use]
    pub const fn amount(self) -> usize {
        self.amount
    }
}

/// A player's balance, carried across rounds. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    balance: usize,
}

impl Bankroll {
    /// Creates a bankroll with the given starting balance.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self { balance }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns whether `amount` is a positive bet within the balance.
    #[must_use]
    pub const fn can_place_bet(&self, amount: usize) -> bool {
        amount > 0 && amount <= self.balance
    }

    /// Returns whether the balance covers a doubled stake on `bet`.
    ///
    /// This is the affordability gate for both doubling down and splitting.
    #[must_use]
    pub const fn can_cover_double(&self, bet: Bet) -> bool {
        match bet.amount.checked_mul(2) {
            Some(stake) => self.balance >= stake,
            None => false,
        }
    }

    /// Applies a signed win/loss to the balance.
    ///
    /// # Errors
    ///
    /// Returns [`BankrollError::Underflow`] and leaves the balance untouched if
    /// the change would take it below zero.
    pub const fn apply_net_change(&mut self, change: isize) -> Result<(), BankrollError> {
        match self.balance.checked_add_signed(change) {
            Some(balance) => {
                self.balance = balance;
                Ok(())
            }
            None => Err(BankrollError::Underflow {
                balance: self.balance,
                change,
            }),
        }
    }

    /// Replaces the balance, e.g. when starting a new session.
    pub const fn reset(&mut self, balance: usize) {
        self.balance = balance;
    }
}

/// Settlement rule turning a resolved hand into a bankroll change.
pub trait PayoutCalculator {
    /// Returns the signed bankroll change for one hand.
    ///
    /// Positive credits the player, negative debits them, zero is a push.
    fn calculate(&self, base_bet: Bet, result: RoundResult, doubled_down: bool) -> isize;
}

impl<P: PayoutCalculator + ?Sized> PayoutCalculator for &P {
    fn calculate(&self, base_bet: Bet, result: RoundResult, doubled_down: bool) -> isize {
        (**self).calculate(base_bet, result, doubled_down)
    }
}

/// Even-money payouts with a doubled stake after double-down.
///
/// A two-card 21 pays the same as any other win.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardPayout;

impl StandardPayout {
    /// Calculates the net change for a hand.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Bet, RoundResult, StandardPayout};
    ///
    /// let bet = Bet::new(10).unwrap();
    /// assert_eq!(StandardPayout::net_change(bet, RoundResult::PlayerWin, true), 20);
    /// assert_eq!(StandardPayout::net_change(bet, RoundResult::Push, true), 0);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "bet amounts fit in isize")]
    pub const fn net_change(base_bet: Bet, result: RoundResult, doubled_down: bool) -> isize {
        let stake = if doubled_down {
            base_bet.amount().saturating_mul(2)
        } else {
            base_bet.amount()
        } as isize;

        match result {
            RoundResult::PlayerWin => stake,
            RoundResult::DealerWin => -stake,
            RoundResult::Push => 0,
        }
    }
}

impl PayoutCalculator for StandardPayout {
    fn calculate(&self, base_bet: Bet, result: RoundResult, doubled_down: bool) -> isize {
        Self::net_change(base_bet, result, doubled_down)
    }
}
