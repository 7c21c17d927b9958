//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that owns a deck, a player hand and a
//! dealer hand, and exposes the three actions that drive play: deal, hit and
//! reset. Hand values and the bust/blackjack flags are always derived from
//! the cards currently held.
//!
//! # Example
//!
//! ```
//! use bjtable::{Round, RoundOptions, RoundState};
//!
//! let mut round = Round::new(RoundOptions::default(), 42);
//! round.deal().unwrap();
//! assert_eq!(round.state(), RoundState::Active);
//! assert_eq!(round.player_hand().len(), 2);
//! assert_eq!(round.remaining_cards(), 48);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod round;
pub mod session;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, build_deck};
pub use error::{DeckError, HitError, SessionError};
pub use hand::{Hand, evaluate, is_blackjack, is_bust, is_natural, is_soft};
pub use options::{BlackjackRule, RoundOptions};
pub use round::{Round, RoundState, Seat};
pub use session::{SessionId, Sessions};
pub use snapshot::RoundSnapshot;
