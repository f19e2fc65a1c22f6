//! Player decision strategies.

use core::fmt;

use crate::card::Card;
use crate::error::PlayerError;
use crate::hand::BLACKJACK;
use crate::player::PlayerHand;

/// An action a strategy can ask the engine to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Finish the hand.
    Stand,
    /// Double the stake, take exactly one card, then stand.
    DoubleDown,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    /// Human-readable label passed to observers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::DoubleDown => "DoubleDown",
            Self::Split => "Split",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a strategy sees when asked for a decision.
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    /// The hand being played.
    pub hand: &'a PlayerHand,
    /// The dealer's face-up card.
    pub dealer_up_card: Card,
    /// Whether [`Action::DoubleDown`] would be honoured right now.
    pub can_double_down: bool,
    /// Whether [`Action::Split`] would be honoured right now.
    pub can_split: bool,
}

/// Decision oracle consulted once per step of a hand.
///
/// Implementations must return promptly. The engine re-checks legality, so a
/// strategy asking for an illegal double or split simply stands.
pub trait Strategy {
    /// Chooses the next action for the hand in `context`.
    fn decide(&mut self, context: &DecisionContext<'_>) -> Action;
}

impl<F> Strategy for F
where
    F: FnMut(&DecisionContext<'_>) -> Action,
{
    fn decide(&mut self, context: &DecisionContext<'_>) -> Action {
        self(context)
    }
}

/// Tuning knobs for [`BasicBot`].
///
/// ```
/// use bjround::BotSettings;
///
/// let settings = BotSettings::new(14, false).unwrap();
/// assert_eq!(settings.hit_until(), 14);
/// assert!(BotSettings::new(22, true).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotSettings {
    hit_until: u8,
    allow_double: bool,
}

impl BotSettings {
    /// Creates settings that hit while the hand is worth `hit_until` or less.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidBotThreshold`] if `hit_until` exceeds 21.
    pub const fn new(hit_until: u8, allow_double: bool) -> Result<Self, PlayerError> {
        if hit_until > BLACKJACK {
            return Err(PlayerError::InvalidBotThreshold(hit_until));
        }
        Ok(Self {
            hit_until,
            allow_double,
        })
    }

    /// Hits through 15, never doubles.
    #[must_use]
    pub const fn conservative() -> Self {
        Self {
            hit_until: 15,
            allow_double: false,
        }
    }

    /// Hits through 16, doubles on 10 or 11.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            hit_until: 16,
            allow_double: true,
        }
    }

    /// Hits through 17, doubles on 10 or 11.
    #[must_use]
    pub const fn aggressive() -> Self {
        Self {
            hit_until: 17,
            allow_double: true,
        }
    }

    /// Inclusive hit threshold.
    #[must_use]
    pub const fn hit_until(&self) -> u8 {
        self.hit_until
    }

    /// Whether the bot may double down.
    #[must_use]
    pub const fn allow_double(&self) -> bool {
        self.allow_double
    }
}

impl Default for BotSettings {
    fn default() -> Self {
        Self::standard()
    }
}

/// Deterministic threshold bot.
///
/// Doubles on 10 or 11 when allowed, otherwise hits up to the threshold and
/// stands. It never splits and ignores the dealer's card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicBot {
    settings: BotSettings,
}

impl BasicBot {
    /// Creates a bot with the given settings.
    #[must_use]
    pub const fn new(settings: BotSettings) -> Self {
        Self { settings }
    }

    /// Returns the bot's settings.
    #[must_use]
    pub const fn settings(&self) -> BotSettings {
        self.settings
    }
}

impl Strategy for BasicBot {
    fn decide(&mut self, context: &DecisionContext<'_>) -> Action {
        let value = context.hand.hand().value();

        if self.settings.allow_double && context.can_double_down && matches!(value, 10 | 11) {
            return Action::DoubleDown;
        }

        if value <= self.settings.hit_until {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}
