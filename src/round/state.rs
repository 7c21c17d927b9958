//! Round state types.

use core::fmt;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// No cards dealt; the deck is full and unshuffled.
    #[default]
    Idle,
    /// Cards are dealt and hits are accepted.
    Active,
}

/// A participant at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("player"),
            Self::Dealer => f.write_str("dealer"),
        }
    }
}
