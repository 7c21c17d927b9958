//! Error types for engine operations.

use thiserror::Error;

use crate::card::Card;
use crate::session::SessionId;

/// Errors raised by deck construction and drawing.
///
/// These indicate a broken engine invariant rather than an illegal user
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards were requested than the deck holds.
    #[error("cannot draw {requested} cards from a deck of {remaining}")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
    /// A card appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// A card of the 52-card set is absent.
    #[error("card {0} is missing")]
    MissingCard(Card),
}

/// Reasons a hit is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HitError {
    /// The round has not been dealt.
    #[error("round has not been dealt")]
    InvalidState,
    /// The hand is already bust.
    #[error("hand is bust")]
    Bust,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors from the session registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No session with this id is open.
    #[error("session {0} not found")]
    NotFound(SessionId),
}
