//! Deck construction, shuffling and drawing.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

const FULL_SET: u64 = (1 << DECK_SIZE) - 1;

/// Builds the canonical 52-card deck.
///
/// Cards are ordered suit-major: all clubs from 2 to ace, then diamonds,
/// hearts and spades. No randomness is involved.
///
/// ```
/// use bjtable::{Card, Rank, Suit, build_deck};
///
/// let deck = build_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.cards()[0], Card::new(Suit::Clubs, Rank::Two));
/// assert_eq!(deck.cards()[51], Card::new(Suit::Spades, Rank::Ace));
/// ```
#[must_use]
pub fn build_deck() -> Deck {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    Deck { cards }
}

/// Returns the bitmask of `cards`, failing on the first repeated card.
fn card_mask(cards: &[Card]) -> Result<u64, DeckError> {
    let mut seen: u64 = 0;

    for card in cards {
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            return Err(DeckError::DuplicateCard(*card));
        }
        seen |= bit;
    }

    Ok(seen)
}

/// Checks that `cards` is exactly the 52-card set, in any order.
pub(crate) fn verify_complete(cards: &[Card]) -> Result<(), DeckError> {
    let seen = card_mask(cards)?;
    if seen == FULL_SET {
        return Ok(());
    }

    let missing = build_deck()
        .cards
        .into_iter()
        .find(|card| seen & (1u64 << card.index()) == 0);

    match missing {
        Some(card) => Err(DeckError::MissingCard(card)),
        None => Ok(()),
    }
}

/// The undealt remainder of a deck, top card first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the canonical deck and checks that it holds every card once.
    ///
    /// # Errors
    ///
    /// Returns an error if the generated deck has a duplicate or missing card.
    pub fn standard() -> Result<Self, DeckError> {
        let deck = build_deck();
        deck.verify_complete()?;
        Ok(deck)
    }

    /// Creates a stacked deck from cards in draw order.
    ///
    /// The deck may hold any subset of the 52 cards.
    ///
    /// # Errors
    ///
    /// Returns an error if a card appears more than once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        card_mask(&cards)?;
        Ok(Self { cards })
    }

    /// Checks that the deck is exactly the 52-card set.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate or missing card found.
    pub fn verify_complete(&self) -> Result<(), DeckError> {
        verify_complete(&self.cards)
    }

    /// Returns a shuffled copy of the deck.
    ///
    /// Uses a Fisher-Yates pass from the last position down to 1, swapping
    /// each position with one drawn uniformly from `0..=i`. The deck itself
    /// is left untouched.
    #[must_use]
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();

        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }

        Self { cards }
    }

    /// Splits off the top `n` cards.
    ///
    /// Returns the drawn cards in order together with the remaining deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if `n` exceeds the deck size.
    pub fn draw(&self, n: usize) -> Result<(Vec<Card>, Self), DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        let (drawn, rest) = self.cards.split_at(n);
        Ok((drawn.to_vec(), Self { cards: rest.to_vec() }))
    }

    /// Removes the top card.
    pub(crate) fn take_top(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the deck holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        build_deck()
    }
}
