//! Hand representation and blackjack scoring.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.is_ace() {
            aces = aces.saturating_add(1);
        }
        value = value.saturating_add(u16::from(card.rank.value()));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Calculates the blackjack value of a set of cards.
///
/// Aces start at 11 and drop to 1, one at a time, while the total is over 21.
///
/// ```
/// use bjtable::{Card, Rank, Suit, evaluate};
///
/// let hand = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Nine),
/// ];
/// assert_eq!(evaluate(&hand), 21);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// Returns whether the cards are worth more than 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    evaluate(cards) > 21
}

/// Returns whether the cards are worth exactly 21, with any number of cards.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    evaluate(cards) == 21
}

/// Returns whether the cards are a two-card 21.
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && evaluate(cards) == 21
}

/// Returns whether an ace is still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// A participant's hand, in the order the cards were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        evaluate(&self.cards)
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns whether the hand is worth exactly 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("-");
        }

        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
