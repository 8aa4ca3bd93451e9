use crate::card::Card;
use crate::error::InsuranceError;
use crate::result::Outcome;

use super::{Round, RoundState};

impl Round {
    /// Returns whether insurance is on offer: the dealer's up-card is an
    /// ace, the player can cover a half-bet premium beyond the bet already
    /// staked, and it has not been purchased yet.
    #[must_use]
    pub fn insurance_available(&self) -> bool {
        self.state == RoundState::PlayerTurn
            && !self.insurance_taken
            && self.dealer.up_card().is_some_and(Card::is_ace)
            && self.balance - self.bet >= self.bet / 2
    }

    /// Purchases insurance, immediately before standing.
    ///
    /// The bet is rewritten from the dealer's two dealt cards at this
    /// moment, not from a played-out hand:
    ///
    /// - dealer's two cards total 21 while the round is still open → bet
    ///   drops to 0, so the coming loss (or push) costs nothing;
    /// - the round is already a dealer win → bet becomes `bet * 3 / 2`;
    /// - otherwise → the premium is forfeit and the bet shrinks by half.
    ///
    /// The table is asymmetric and favors the house; it settles a rewritten
    /// main bet rather than paying a 2:1 side pot.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting on a player decision,
    /// the up-card is not an ace, insurance was already purchased, or the
    /// balance cannot cover the premium.
    pub fn take_insurance(&mut self) -> Result<(), InsuranceError> {
        if self.state != RoundState::PlayerTurn {
            return Err(InsuranceError::InvalidState);
        }
        if self.insurance_taken {
            return Err(InsuranceError::AlreadyTaken);
        }
        if !self.dealer.up_card().is_some_and(Card::is_ace) {
            return Err(InsuranceError::NotOffered);
        }
        if self.balance - self.bet < self.bet / 2 {
            return Err(InsuranceError::InsufficientTokens);
        }

        let dealer_total = self.dealer.value();
        self.bet = if self.outcome == Outcome::Continues && dealer_total == 21 {
            0
        } else if self.outcome == Outcome::DealerWin {
            self.bet * 3 / 2
        } else {
            self.bet - self.bet / 2
        };
        self.insurance_taken = true;

        Ok(())
    }
}
