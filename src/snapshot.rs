//! Derived round state for rendering.

use crate::round::RoundState;

/// Values a view displays after every action.
///
/// A snapshot is computed from the round's cards at the moment it is taken;
/// take a new one after each action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// Current round state.
    pub state: RoundState,
    /// The player's hand value.
    pub player_value: u16,
    /// The dealer's hand value.
    pub dealer_value: u16,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the player has blackjack.
    pub player_blackjack: bool,
    /// Whether the dealer has blackjack.
    pub dealer_blackjack: bool,
    /// Cards left in the deck.
    pub remaining_cards: usize,
    /// Whether a player hit would draw a card.
    pub can_hit_player: bool,
    /// Whether a dealer hit would draw a card.
    pub can_hit_dealer: bool,
}
