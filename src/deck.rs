//! Deck generation and dealing.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, SUITS};

/// A single 52-card deck, dealt from the front.
///
/// A fresh deck holds each (rank, suit) combination exactly once in a
/// uniformly random order. Decks are built once per round and discarded when
/// the round ends; there is no discard pile.
#[derive(Debug, Clone)]
pub struct Deck {
    // The next card to deal sits at the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full deck shuffled with the given generator.
    #[must_use]
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck that deals the given cards in order.
    ///
    /// Intended for tests and replays; nothing requires the list to be 52
    /// cards or duplicate-free.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the front card.
    ///
    /// # Panics
    ///
    /// Panics if the deck is empty. A round deals from a fresh 52-card deck
    /// and can never exhaust it, so an empty draw is a caller bug rather
    /// than a recoverable condition.
    #[must_use]
    pub fn draw(&mut self) -> Card {
        self.cards.pop().expect("drew from an empty deck")
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
