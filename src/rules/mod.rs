//! Game rules as pure functions.
//!
//! - `decide`: the win/lose rule for a round
//! - `transition`: the `(state, event) -> state` step, total over all pairs
//! - `legal_events` / `accepts`: which events the current phase reacts to
//!
//! Randomness comes in through a `ValueSource`, so every rule here is
//! deterministic for a given source.

pub mod engine;

pub use engine::{accepts, decide, is_terminal, legal_events, transition};
