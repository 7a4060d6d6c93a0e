//! Transition table and outcome rule.
//!
//! | From           | Event        | To             |
//! |----------------|--------------|----------------|
//! | Idle           | Start        | AwaitingChoice |
//! | AwaitingChoice | ChooseHigher | Resolved       |
//! | AwaitingChoice | ChooseLower  | Resolved       |
//! | Resolved       | PlayAgain    | AwaitingChoice |
//!
//! Any other pair is ignored: the state comes back unchanged and nothing is
//! drawn.

use crate::core::card::CardValue;
use crate::core::event::Event;
use crate::core::rng::ValueSource;
use crate::core::state::{GameState, Guess, Outcome};

/// Decide a round from the two cards and the player's guess.
///
/// A tie always loses, whatever the guess.
///
/// ```
/// use high_low::core::{CardValue, Guess, Outcome};
/// use high_low::rules::decide;
///
/// let three = CardValue::new(3).unwrap();
/// let seven = CardValue::new(7).unwrap();
///
/// assert_eq!(decide(three, seven, Guess::Higher), Outcome::Win);
/// assert_eq!(decide(seven, seven, Guess::Higher), Outcome::Lose);
/// ```
#[must_use]
pub fn decide(value_a: CardValue, value_b: CardValue, guess: Guess) -> Outcome {
    let delta = value_a.delta_to(value_b);
    match (delta.signum(), guess) {
        (1, Guess::Higher) | (-1, Guess::Lower) => Outcome::Win,
        _ => Outcome::Lose,
    }
}

/// Events that have a transition from `state`.
#[must_use]
pub fn legal_events(state: &GameState) -> &'static [Event] {
    match state {
        GameState::Idle => &[Event::Start],
        GameState::AwaitingChoice { .. } => &[Event::ChooseHigher, Event::ChooseLower],
        GameState::Resolved { .. } => &[Event::PlayAgain],
    }
}

/// Does `state` declare a transition for `event`?
#[must_use]
pub fn accepts(state: &GameState, event: Event) -> bool {
    legal_events(state).contains(&event)
}

/// The game never ends; rounds cycle until the caller stops sending events.
#[must_use]
pub fn is_terminal(_state: &GameState) -> bool {
    false
}

/// Apply one event.
///
/// Total over every `(state, event)` pair. Draws from `source` only when a
/// transition actually fires: one draw for `Start`, `ChooseHigher`,
/// `ChooseLower` and `PlayAgain` each.
pub fn transition<S: ValueSource + ?Sized>(state: &GameState, event: Event, source: &mut S) -> GameState {
    match (*state, event) {
        (GameState::Idle, Event::Start) | (GameState::Resolved { .. }, Event::PlayAgain) => {
            GameState::AwaitingChoice {
                value_a: source.draw(),
            }
        }
        (GameState::AwaitingChoice { value_a }, Event::ChooseHigher) => {
            resolve(value_a, Guess::Higher, source)
        }
        (GameState::AwaitingChoice { value_a }, Event::ChooseLower) => {
            resolve(value_a, Guess::Lower, source)
        }
        (unchanged, _) => unchanged,
    }
}

fn resolve<S: ValueSource + ?Sized>(value_a: CardValue, guess: Guess, source: &mut S) -> GameState {
    let value_b = source.draw();
    GameState::Resolved {
        value_a,
        value_b,
        guess,
        outcome: decide(value_a, value_b, guess),
    }
}
