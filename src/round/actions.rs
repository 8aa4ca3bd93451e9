use crate::card::Card;
use crate::error::ActionError;
use crate::result::Outcome;

use super::{Round, RoundState};

impl Round {
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.state {
            RoundState::PlayerTurn => Ok(()),
            RoundState::DealerTurn | RoundState::Resolved => Err(ActionError::InvalidState),
        }
    }

    /// Player action: hit (draw a card).
    ///
    /// A total over 21 busts the hand and ends the round as a dealer win
    /// without the dealer playing. A total of exactly 21 is an automatic
    /// stand: the round moves straight to the dealer's turn. Hitting
    /// forfeits double down for the rest of the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting on a player decision.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw();
        self.player.add_card(card);
        self.hit_taken = true;

        let total = self.player.value();
        if total > 21 {
            self.finish(Outcome::DealerWin);
        } else if total == 21 {
            self.state = RoundState::DealerTurn;
        }

        Ok(card)
    }

    /// Returns whether double down is currently allowed: no hit taken yet
    /// and enough tokens to cover the doubled bet.
    #[must_use]
    pub const fn can_double_down(&self) -> bool {
        matches!(self.state, RoundState::PlayerTurn)
            && !self.hit_taken
            && self.bet * 2 <= self.balance
    }

    /// Player action: double down (one card, then stand, for double stakes).
    ///
    /// Draws exactly one card and moves to the dealer's turn, or, on a
    /// bust, ends the round as a dealer win on the spot. If the round later
    /// resolves as a win or a loss the bet counts double; a push leaves it
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting on a player decision,
    /// if a hit already forfeited the option, or if the balance cannot
    /// cover the doubled bet. The turn continues unchanged in every error
    /// case.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        if self.hit_taken {
            return Err(ActionError::DoubleUnavailable);
        }
        if self.bet * 2 > self.balance {
            return Err(ActionError::InsufficientTokens);
        }

        let card = self.draw();
        self.player.add_card(card);
        self.doubled = true;

        if self.player.value() > 21 {
            self.finish(Outcome::DealerWin);
        } else {
            self.state = RoundState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: stand (keep the current hand).
    ///
    /// When insurance is on offer, settle it with
    /// [`Round::take_insurance`](super::Round::take_insurance) before
    /// standing; this method itself only hands the round to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting on a player decision.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.state = RoundState::DealerTurn;
        Ok(())
    }
}
