//! Round phase tracking.

/// Phase of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting on a player decision (hit, double down, or stand).
    PlayerTurn,
    /// The player is done; the dealer's hand must be played out.
    DealerTurn,
    /// The round has a terminal outcome and can be settled.
    Resolved,
}
