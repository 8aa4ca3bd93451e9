use crate::deck::Deck;
use crate::error::BetError;
use crate::hand::{DealerHand, Hand};
use crate::result::Outcome;

use super::{MIN_BET, Round, RoundState};

impl Round {
    /// Validates a bet against the balance: a multiple of 10, at least 10,
    /// and no more than the balance.
    ///
    /// # Errors
    ///
    /// Returns the first rule the bet breaks, in the order above.
    pub const fn validate_bet(balance: usize, bet: usize) -> Result<(), BetError> {
        if bet % MIN_BET != 0 {
            return Err(BetError::NotMultipleOfTen);
        }
        if bet < MIN_BET {
            return Err(BetError::BelowMinimum);
        }
        if bet > balance {
            return Err(BetError::ExceedsBalance);
        }
        Ok(())
    }

    /// Starts a round: validates the bet, then deals two cards each to the
    /// player and dealer, alternating (player, dealer, player, dealer).
    ///
    /// If the player's two cards total 21 the round resolves on the spot:
    /// a push when the dealer's two cards (as dealt, without drawing) also
    /// total 21, otherwise a player win that pays 3:2 at resolution.
    /// Any other deal enters the player's turn.
    ///
    /// # Errors
    ///
    /// Returns a [`BetError`] if the bet is invalid; the deck is dropped and
    /// no cards are dealt.
    pub fn deal(deck: Deck, balance: usize, bet: usize) -> Result<Self, BetError> {
        Self::validate_bet(balance, bet)?;

        let mut round = Self {
            deck,
            player: Hand::new(),
            dealer: DealerHand::new(),
            balance,
            bet,
            state: RoundState::PlayerTurn,
            outcome: Outcome::Continues,
            hit_taken: false,
            doubled: false,
            insurance_taken: false,
        };

        for _ in 0..2 {
            let card = round.draw();
            round.player.add_card(card);
            let card = round.draw();
            round.dealer.add_card(card);
        }

        round.check_early_win();

        Ok(round)
    }

    /// Resolves a dealt natural immediately, before any player decision.
    fn check_early_win(&mut self) {
        if self.player.value() != 21 {
            return;
        }

        if self.dealer.is_natural() {
            self.finish(Outcome::Push);
        } else {
            self.finish(Outcome::PlayerWin);
        }
    }
}
