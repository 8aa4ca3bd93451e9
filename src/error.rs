//! Error types for round operations.

use thiserror::Error;

/// Errors that can reject a bet before a round starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet is not a multiple of ten.
    #[error("bet must be a multiple of 10")]
    NotMultipleOfTen,
    /// Bet is below the table minimum.
    #[error("bet must be at least 10")]
    BelowMinimum,
    /// Bet exceeds the player's token balance.
    #[error("bet exceeds your token balance")]
    ExceedsBalance,
}

/// Errors that can reject a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is not waiting on a player decision.
    #[error("the round is not in the player's turn")]
    InvalidState,
    /// Double down was already forfeited by hitting.
    #[error("you can't double down anymore")]
    DoubleUnavailable,
    /// Not enough tokens to cover the doubled bet.
    #[error("not enough tokens to double down")]
    InsufficientTokens,
}

/// Errors that can reject an insurance purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// The round is not waiting on a player decision.
    #[error("the round is not in the player's turn")]
    InvalidState,
    /// The dealer's up-card is not an ace.
    #[error("insurance is only offered against an ace up-card")]
    NotOffered,
    /// Insurance was already purchased this round.
    #[error("insurance was already purchased")]
    AlreadyTaken,
    /// Not enough tokens beyond the bet to cover the premium.
    #[error("not enough tokens to purchase insurance")]
    InsufficientTokens,
}

/// Errors from driving the dealer or settling the round out of phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The round is not in the right phase for this step.
    #[error("the round is not ready for this step")]
    InvalidState,
}
