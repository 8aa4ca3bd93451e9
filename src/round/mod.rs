//! The round engine: state machine for a single hand of blackjack.

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::result::Outcome;

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use state::RoundState;

/// Minimum bet, and the increment bets must land on.
pub const MIN_BET: usize = 10;

/// A single round of blackjack.
///
/// The round owns its deck and both hands for its whole lifetime. It is
/// created by [`Round::deal`], driven by the player action methods while in
/// [`RoundState::PlayerTurn`], played out with [`Round::dealer_play`], and
/// settled with [`Round::resolve`]. The caller owns the token balance; the
/// round only reads it to gate double-down and insurance, and reports the
/// final signed delta at resolution.
#[derive(Debug)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: DealerHand,
    /// Token balance at the start of the round, read-only.
    balance: usize,
    /// Payout magnitude. Starts at the wager and is rewritten by insurance;
    /// the sign (and double-down doubling) is applied at resolution.
    bet: usize,
    state: RoundState,
    outcome: Outcome,
    hit_taken: bool,
    doubled: bool,
    insurance_taken: bool,
}

impl Round {
    /// Returns the current phase of the round.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome so far ([`Outcome::Continues`] until terminal).
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the current bet magnitude.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the number of cards left in the round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Deals the next card from the round's deck.
    pub(crate) fn draw(&mut self) -> Card {
        self.deck.draw()
    }

    /// Ends the round with a terminal outcome, revealing the hole card so
    /// the final table can be rendered.
    pub(crate) const fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.dealer.reveal_hole();
        self.state = RoundState::Resolved;
    }
}
