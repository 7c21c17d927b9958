//! Round state machine.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::deck::{self, Deck, build_deck};
use crate::error::DeckError;
use crate::hand::Hand;
use crate::options::RoundOptions;
use crate::snapshot::RoundSnapshot;

mod actions;
pub mod state;

pub use state::{RoundState, Seat};

/// A single blackjack round between one player and the dealer.
///
/// The round exclusively owns the deck and both hands; they change only
/// through [`deal`](Self::deal), [`hit_player`](Self::hit_player),
/// [`hit_dealer`](Self::hit_dealer) and [`reset`](Self::reset). Every
/// derived value is recomputed from the current cards on each call.
///
/// The random source used for shuffling is injected. [`Round::new`] seeds a
/// [`ChaCha8Rng`]; [`Round::with_rng`] accepts any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct Round<R = ChaCha8Rng> {
    /// Undealt cards.
    deck: Deck,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
    /// Round options.
    options: RoundOptions,
    /// Random number generator.
    rng: R,
}

impl Round {
    /// Creates an idle round with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Round, RoundOptions, RoundState};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// assert_eq!(round.state(), RoundState::Idle);
    /// assert_eq!(round.remaining_cards(), 52);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R> Round<R> {
    /// Creates an idle round that shuffles with `rng`.
    #[must_use]
    pub fn with_rng(options: RoundOptions, rng: R) -> Self {
        Self {
            deck: build_deck(),
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Idle,
            options,
            rng,
        }
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the round options.
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the undealt cards.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the hand held by `seat`.
    pub const fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Player => &self.player,
            Seat::Dealer => &self.dealer,
        }
    }

    const fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        }
    }

    /// Returns the number of cards left in the deck.
    pub fn remaining_cards(&self) -> usize {
        self.deck.len()
    }

    /// Returns the value of the player's hand.
    pub fn player_value(&self) -> u16 {
        self.player.value()
    }

    /// Returns the value of the dealer's hand.
    pub fn dealer_value(&self) -> u16 {
        self.dealer.value()
    }

    /// Returns whether the player's hand is bust.
    pub fn is_player_bust(&self) -> bool {
        self.player.is_bust()
    }

    /// Returns whether the dealer's hand is bust.
    pub fn is_dealer_bust(&self) -> bool {
        self.dealer.is_bust()
    }

    /// Returns whether the player's hand is blackjack under the configured rule.
    pub fn is_player_blackjack(&self) -> bool {
        self.options.blackjack.matches(self.player.cards())
    }

    /// Returns whether the dealer's hand is blackjack under the configured rule.
    pub fn is_dealer_blackjack(&self) -> bool {
        self.options.blackjack.matches(self.dealer.cards())
    }

    /// Returns whether a hit for `seat` would draw a card.
    ///
    /// A view uses this to enable or disable its hit controls.
    pub fn can_hit(&self, seat: Seat) -> bool {
        self.state == RoundState::Active && !self.hand(seat).is_bust() && !self.deck.is_empty()
    }

    /// Returns the derived values a view renders.
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            state: self.state,
            player_value: self.player_value(),
            dealer_value: self.dealer_value(),
            player_bust: self.is_player_bust(),
            dealer_bust: self.is_dealer_bust(),
            player_blackjack: self.is_player_blackjack(),
            dealer_blackjack: self.is_dealer_blackjack(),
            remaining_cards: self.remaining_cards(),
            can_hit_player: self.can_hit(Seat::Player),
            can_hit_dealer: self.can_hit(Seat::Dealer),
        }
    }

    /// Checks that the deck and both hands together hold each of the 52
    /// cards exactly once.
    ///
    /// This holds for every round dealt by [`deal`](Self::deal) and for idle
    /// rounds; a round dealt from a partial stacked deck reports the cards
    /// it never held as missing.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate or missing card found.
    pub fn verify_accounting(&self) -> Result<(), DeckError> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend_from_slice(self.deck.cards());
        cards.extend_from_slice(self.player.cards());
        cards.extend_from_slice(self.dealer.cards());
        deck::verify_complete(&cards)
    }
}
