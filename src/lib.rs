//! # high-low
//!
//! A High-Low card game driven by a small, explicit state machine.
//!
//! Two cards are dealt from `1..=10`. The player sees the first and guesses
//! whether the second will be higher or lower. Ties always lose.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: `rules::transition` is a total `(state, event) -> state`
//!    function. Events that do not apply to the current phase leave the
//!    state untouched.
//!
//! 2. **Injected Randomness**: Draws go through the `ValueSource` trait.
//!    `GameRng` is seeded and replayable; `ScriptedSource` forces exact cards.
//!
//! 3. **State by Construction**: `GameState` is a tagged union, so a right
//!    card, a guess or an outcome cannot exist before the round is resolved.
//!
//! ## Modules
//!
//! - `core`: Card values, events, state, snapshots, RNG, configuration
//! - `rules`: Outcome rule and transition table
//! - `games`: The `HighLowGame` machine that owns state and randomness
//! - `view`: Plain-text rendering of snapshots for front ends
//!
//! ## Example
//!
//! ```
//! use high_low::{Event, HighLowGame, Phase};
//!
//! let mut game = HighLowGame::with_seed(42);
//! assert_eq!(game.snapshot().phase, Phase::Idle);
//!
//! game.dispatch(Event::Start);
//! game.dispatch(Event::ChooseHigher);
//! assert!(game.snapshot().outcome.is_some());
//!
//! game.dispatch(Event::PlayAgain);
//! assert_eq!(game.snapshot().phase, Phase::AwaitingChoice);
//! ```

pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    AppConfig, CardFace, CardValue, DisplayConfig, Event, EventRecord, GameConfig, GameRng,
    GameRngState, GameState, Guess, Outcome, Phase, ScriptedSource, Snapshot, ValueSource,
};

pub use crate::error::{Error, Result};

pub use crate::games::highlow::{Dispatch, HighLowGame, HighLowGameBuilder};
