//! Inbound events and the record kept for each applied one.
//!
//! Events carry no payload: the renderer only says *what* the player did,
//! and the state machine decides what that means for the current phase.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::state::Phase;
use crate::error::Error;

/// A user intent forwarded by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Begin the first round.
    Start,
    /// Predict that the next card is higher.
    ChooseHigher,
    /// Predict that the next card is lower.
    ChooseLower,
    /// Deal a fresh left card after a resolved round.
    PlayAgain,
}

impl Event {
    /// Every event, in table order.
    pub const ALL: [Event; 4] = [
        Event::Start,
        Event::ChooseHigher,
        Event::ChooseLower,
        Event::PlayAgain,
    ];

    /// Short textual name, accepted back by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Event::Start => "start",
            Event::ChooseHigher => "higher",
            Event::ChooseLower => "lower",
            Event::PlayAgain => "again",
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Event {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Event::Start),
            "higher" | "high" | "h" => Ok(Event::ChooseHigher),
            "lower" | "low" | "l" => Ok(Event::ChooseLower),
            "again" | "play-again" | "play_again" => Ok(Event::PlayAgain),
            _ => Err(Error::UnknownEvent(s.to_string())),
        }
    }
}

/// An applied event with metadata for the in-memory log.
///
/// Ignored events are never recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Round number after the event was applied.
    pub round: u32,

    /// Position of this record in the log (starts at 0).
    pub sequence: u32,

    /// The event that was applied.
    pub event: Event,

    /// Phase before the event.
    pub from: Phase,

    /// Phase after the event.
    pub to: Phase,
}

impl EventRecord {
    /// Create a new event record.
    #[must_use]
    pub fn new(round: u32, sequence: u32, event: Event, from: Phase, to: Phase) -> Self {
        Self {
            round,
            sequence,
            event,
            from,
            to,
        }
    }
}
