//! Core types: card values, events, state, randomness, configuration.
//!
//! Nothing in this module decides game rules; `rules` does that on top of
//! these types.

pub mod card;
pub mod rng;
pub mod config;
pub mod event;
pub mod state;

pub use card::{CardValue, MAX_CARD_VALUE, MIN_CARD_VALUE};
pub use rng::{GameRng, GameRngState, ScriptedSource, ValueSource};
pub use config::{AppConfig, DisplayConfig, GameConfig};
pub use event::{Event, EventRecord};
pub use state::{CardFace, GameState, Guess, Outcome, Phase, Snapshot};
