//! Game state and the outbound snapshot.
//!
//! ## GameState
//!
//! A tagged union with one variant per phase. Each variant carries exactly
//! the values that exist in that phase, so the usual invariants hold by
//! construction:
//! - exactly one phase at a time
//! - the right card and the outcome exist only once resolved
//! - a guess is recorded only once resolved
//!
//! ## Snapshot
//!
//! What a renderer gets to see: the phase, both card faces (hidden or shown)
//! and the outcome.

use serde::{Deserialize, Serialize};

use super::card::CardValue;

/// Phase of the turn sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing dealt yet.
    Idle,
    /// Left card dealt, waiting for a guess.
    AwaitingChoice,
    /// Right card dealt and the round decided.
    Resolved,
}

impl Phase {
    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::AwaitingChoice => "AwaitingChoice",
            Phase::Resolved => "Resolved",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// The player's prediction for the right card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guess {
    Higher,
    Lower,
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guess::Higher => f.write_str("Higher"),
            Guess::Lower => f.write_str("Lower"),
        }
    }
}

/// Result of a resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => f.write_str("WIN!"),
            Outcome::Lose => f.write_str("LOSE!"),
        }
    }
}

/// Authoritative game state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase")]
pub enum GameState {
    /// Initial state, before the first `Start`.
    #[default]
    Idle,

    /// Left card is known, the player has not guessed yet.
    AwaitingChoice { value_a: CardValue },

    /// Both cards are known and the round is decided.
    Resolved {
        value_a: CardValue,
        value_b: CardValue,
        guess: Guess,
        outcome: Outcome,
    },
}

impl GameState {
    /// Create the initial state.
    #[must_use]
    pub const fn new() -> Self {
        GameState::Idle
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            GameState::Idle => Phase::Idle,
            GameState::AwaitingChoice { .. } => Phase::AwaitingChoice,
            GameState::Resolved { .. } => Phase::Resolved,
        }
    }

    /// Left card, present once a round has started.
    #[must_use]
    pub const fn value_a(&self) -> Option<CardValue> {
        match *self {
            GameState::Idle => None,
            GameState::AwaitingChoice { value_a } | GameState::Resolved { value_a, .. } => {
                Some(value_a)
            }
        }
    }

    /// Right card, present only once resolved.
    #[must_use]
    pub const fn value_b(&self) -> Option<CardValue> {
        match *self {
            GameState::Resolved { value_b, .. } => Some(value_b),
            _ => None,
        }
    }

    /// The player's guess; `None` means unset.
    #[must_use]
    pub const fn choice(&self) -> Option<Guess> {
        match *self {
            GameState::Resolved { guess, .. } => Some(guess),
            _ => None,
        }
    }

    /// Outcome of the round; `None` unless resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match *self {
            GameState::Resolved { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// Build the outbound snapshot for a renderer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let left = match self.phase() {
            Phase::Idle => CardFace::Hidden,
            _ => CardFace::from(self.value_a()),
        };
        Snapshot {
            phase: self.phase(),
            left,
            right: CardFace::from(self.value_b()),
            outcome: self.outcome(),
        }
    }
}

/// A card as the renderer may show it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    /// Face down; drawn as a placeholder.
    Hidden,
    /// Face up.
    Shown(CardValue),
}

impl CardFace {
    #[must_use]
    pub const fn value(self) -> Option<CardValue> {
        match self {
            CardFace::Hidden => None,
            CardFace::Shown(v) => Some(v),
        }
    }

    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, CardFace::Hidden)
    }
}

impl From<Option<CardValue>> for CardFace {
    fn from(value: Option<CardValue>) -> Self {
        value.map_or(CardFace::Hidden, CardFace::Shown)
    }
}

/// Read-only view of the game handed to the renderer after every event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    /// Left card: hidden while idle.
    pub left: CardFace,
    /// Right card: hidden until resolved.
    pub right: CardFace,
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    /// "Start Game" is offered only before the first round.
    #[must_use]
    pub fn shows_start_control(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Higher/Lower are offered only while waiting for a guess.
    #[must_use]
    pub fn shows_choice_controls(&self) -> bool {
        self.phase == Phase::AwaitingChoice
    }

    /// The result and "Play Again" appear only once resolved.
    #[must_use]
    pub fn shows_result(&self) -> bool {
        self.phase == Phase::Resolved
    }
}
