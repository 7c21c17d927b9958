use rand::Rng;
use tracing::{debug, trace};

use crate::card::Card;
use crate::deck::{Deck, build_deck};
use crate::error::{DeckError, HitError};
use crate::hand::Hand;

use super::{Round, RoundState, Seat};

/// Cards dealt to each participant at the start of a round.
const INITIAL_CARDS: usize = 2;

impl<R: Rng> Round<R> {
    /// Starts a new round.
    ///
    /// Builds a fresh deck, shuffles it, then deals two cards to the player
    /// followed by two cards to the dealer. Any round in progress is
    /// discarded first, so this is valid from every state.
    ///
    /// # Errors
    ///
    /// Returns an error if the freshly built deck is not the complete
    /// 52-card set. The round is left unchanged in that case.
    pub fn deal(&mut self) -> Result<(), DeckError> {
        let deck = Deck::standard()?.shuffle(&mut self.rng);
        self.deal_from(deck)
    }
}

impl<R> Round<R> {
    /// Starts a new round from a stacked deck, without shuffling.
    ///
    /// The first two cards go to the player and the next two to the dealer.
    /// Useful for replaying a recorded shuffle or scripting a scenario.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if the deck holds fewer than
    /// four cards. The round is left unchanged in that case.
    pub fn deal_from(&mut self, deck: Deck) -> Result<(), DeckError> {
        let (player, rest) = deck.draw(INITIAL_CARDS)?;
        let (dealer, rest) = rest.draw(INITIAL_CARDS)?;

        self.player = Hand::from_cards(player);
        self.dealer = Hand::from_cards(dealer);
        self.deck = rest;
        self.state = RoundState::Active;

        debug!(
            player = %self.player,
            dealer = %self.dealer,
            remaining = self.deck.len(),
            "dealt round"
        );

        Ok(())
    }

    /// Draws one card into the hand of `seat`.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been dealt, the hand is bust,
    /// or the deck is empty. Nothing changes on error.
    pub fn try_hit(&mut self, seat: Seat) -> Result<Card, HitError> {
        if self.state != RoundState::Active {
            return Err(HitError::InvalidState);
        }

        if self.hand(seat).is_bust() {
            return Err(HitError::Bust);
        }

        let card = self.deck.take_top().ok_or(HitError::NoCards)?;
        let hand = self.hand_mut(seat);
        hand.add_card(card);

        trace!(%seat, %card, value = hand.value(), "hit");

        Ok(card)
    }

    /// Draws one card into the player's hand.
    ///
    /// # Errors
    ///
    /// See [`try_hit`](Self::try_hit).
    pub fn try_hit_player(&mut self) -> Result<Card, HitError> {
        self.try_hit(Seat::Player)
    }

    /// Draws one card into the dealer's hand.
    ///
    /// # Errors
    ///
    /// See [`try_hit`](Self::try_hit).
    pub fn try_hit_dealer(&mut self) -> Result<Card, HitError> {
        self.try_hit(Seat::Dealer)
    }

    /// Player action: Hit.
    ///
    /// Returns the drawn card, or `None` without changing anything when the
    /// round is idle, the player is bust, or the deck is empty.
    pub fn hit_player(&mut self) -> Option<Card> {
        self.hit_or_ignore(Seat::Player)
    }

    /// Dealer hit, triggered by the user. Same contract as
    /// [`hit_player`](Self::hit_player), gated on the dealer's hand.
    pub fn hit_dealer(&mut self) -> Option<Card> {
        self.hit_or_ignore(Seat::Dealer)
    }

    fn hit_or_ignore(&mut self, seat: Seat) -> Option<Card> {
        match self.try_hit(seat) {
            Ok(card) => Some(card),
            Err(err) => {
                debug!(%seat, %err, "hit ignored");
                None
            }
        }
    }

    /// Clears both hands and restores the full, unshuffled deck.
    ///
    /// Shuffling is deferred to the next [`deal`](Self::deal).
    pub fn reset(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.deck = build_deck();
        self.state = RoundState::Idle;

        debug!("round reset");
    }
}
