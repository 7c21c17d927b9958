//! Round configuration options.

use crate::card::Card;
use crate::hand::{is_blackjack, is_natural};

/// Which hands are flagged as blackjack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum BlackjackRule {
    /// Any hand worth exactly 21, whatever its card count.
    #[default]
    AnyTwentyOne,
    /// Only a two-card 21 (a natural).
    Natural,
}

impl BlackjackRule {
    /// Returns whether `cards` count as blackjack under this rule.
    #[must_use]
    pub fn matches(self, cards: &[Card]) -> bool {
        match self {
            Self::AnyTwentyOne => is_blackjack(cards),
            Self::Natural => is_natural(cards),
        }
    }
}

/// Configuration options for a round.
///
/// ```
/// use bjtable::{BlackjackRule, RoundOptions};
///
/// let options = RoundOptions::default().with_blackjack(BlackjackRule::Natural);
/// assert_eq!(options.blackjack, BlackjackRule::Natural);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundOptions {
    /// Rule used for the blackjack flags.
    pub blackjack: BlackjackRule,
}

impl RoundOptions {
    /// Sets the blackjack rule.
    #[must_use]
    pub const fn with_blackjack(mut self, blackjack: BlackjackRule) -> Self {
        self.blackjack = blackjack;
        self
    }
}
