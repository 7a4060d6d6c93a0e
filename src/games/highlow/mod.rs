//! High-Low.
//!
//! - Start: the left card is dealt face up
//! - Guess whether the right card will be higher or lower
//! - The right card is dealt and the round is decided (ties lose)
//! - Play again: a new left card is dealt and the next guess is awaited
//!
//! There is no end state and no score across rounds.

mod game;

pub use game::{Dispatch, HighLowGame, HighLowGameBuilder};
