use crate::card::Card;
use crate::error::ResolveError;
use crate::result::{Outcome, RoundResult};

use super::{Round, RoundState};

/// The dealer stands at this total or above.
const DEALER_STAND: u8 = 17;

impl Round {
    /// Plays out the dealer's hand.
    ///
    /// Reveals the hole card, then draws while the dealer's total is below
    /// 17 (soft totals included); the dealer stops at 17 or more, or on a
    /// bust. The dealer acts only here, never during the player's hit
    /// sequence, and not at all when the player already busted.
    ///
    /// Returns the cards the dealer drew, and leaves the round resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's turn is still open or the round is
    /// already resolved.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ResolveError> {
        if self.state != RoundState::DealerTurn {
            return Err(ResolveError::InvalidState);
        }

        self.dealer.reveal_hole();

        let mut drawn = Vec::new();
        while self.dealer.value() < DEALER_STAND {
            let card = self.draw();
            self.dealer.add_card(card);
            drawn.push(card);
        }

        let outcome = self.compare_totals();
        self.finish(outcome);

        Ok(drawn)
    }

    /// Compares final totals once the dealer is done drawing.
    ///
    /// Equal totals push, with one exception: when both sides hold exactly
    /// 21, the side with fewer cards wins: a two-card 21 beats a
    /// multi-card 21, so a player who hit their way there loses to a dealer
    /// natural.
    fn compare_totals(&self) -> Outcome {
        let player = self.player.value();
        let dealer = self.dealer.value();

        if self.dealer.is_bust() || player > dealer {
            Outcome::PlayerWin
        } else if player == dealer {
            if player == 21 && self.player.len() > self.dealer.len() {
                Outcome::DealerWin
            } else {
                Outcome::Push
            }
        } else {
            Outcome::DealerWin
        }
    }

    /// Settles a resolved round into a [`RoundResult`].
    ///
    /// Applies double-down doubling (wins and losses only), then the 3:2
    /// natural bonus (`bet * 3 / 2`, integer division) when the player won
    /// with a two-card 21, then the sign: positive for a player win, zero
    /// for a push, negative for a dealer win. The caller applies the delta
    /// to its token balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has no terminal outcome yet.
    pub fn resolve(&self) -> Result<RoundResult, ResolveError> {
        let mut bet = self.bet;
        if self.doubled && self.outcome != Outcome::Push {
            bet *= 2;
        }

        let delta = match self.outcome {
            Outcome::Continues => return Err(ResolveError::InvalidState),
            Outcome::PlayerWin => {
                let payout = if self.player.is_natural() { bet * 3 / 2 } else { bet };
                payout as isize
            }
            Outcome::Push => 0,
            Outcome::DealerWin => -(bet as isize),
        };

        Ok(RoundResult {
            outcome: self.outcome,
            delta,
            player_hand: self.player.clone(),
            dealer_hand: self.dealer.clone(),
        })
    }
}
