//! A blackjack round engine for a single player against a scripted dealer.
//!
//! The crate provides a [`Round`] type that runs one hand: the initial deal
//! with its natural-21 early check, the player's hit / double down / stand
//! decisions, the ace-up insurance side rule, the dealer's draw-to-17
//! automation, and settlement into a signed token delta. The caller owns the
//! token balance across rounds and feeds each round a fresh [`Deck`].
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use twentyone::{Deck, Round, RoundState};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let deck = Deck::shuffled(&mut rng);
//! let round = Round::deal(deck, 500, 10).expect("valid bet");
//!
//! // Either the deal was a natural and the round is already settled, or
//! // it is the player's turn.
//! assert!(matches!(
//!     round.state(),
//!     RoundState::PlayerTurn | RoundState::Resolved
//! ));
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, SUITS, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, InsuranceError, ResolveError};
pub use hand::{DealerHand, Hand};
pub use result::{Outcome, RoundResult};
pub use round::{MIN_BET, Round, RoundState};
