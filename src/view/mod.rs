//! Plain-text rendering of snapshots.
//!
//! Follows the display convention: the left card is a placeholder while
//! idle, the right card is a placeholder until resolved, Higher/Lower are
//! offered only while awaiting a guess, and the result with "Play Again"
//! only once resolved. Colors and prompts are the front end's business.

use crate::core::config::{DisplayConfig, MAX_PLACEHOLDER_WIDTH};
use crate::core::{CardFace, Event, Snapshot};

/// A control the renderer should offer, and the event it sends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub event: Event,
}

impl Control {
    const fn new(label: &'static str, event: Event) -> Self {
        Self { label, event }
    }
}

/// Controls visible for this snapshot, in display order.
#[must_use]
pub fn controls(snapshot: &Snapshot) -> Vec<Control> {
    let mut out = Vec::new();
    if snapshot.shows_start_control() {
        out.push(Control::new("Start Game", Event::Start));
    }
    if snapshot.shows_choice_controls() {
        out.push(Control::new("Higher", Event::ChooseHigher));
        out.push(Control::new("Lower", Event::ChooseLower));
    }
    if snapshot.shows_result() {
        out.push(Control::new("Play Again", Event::PlayAgain));
    }
    out
}

/// Text for one card face.
#[must_use]
pub fn face_text(face: CardFace, display: &DisplayConfig) -> String {
    match face {
        CardFace::Hidden => display.placeholder.clone(),
        CardFace::Shown(value) => value.to_string(),
    }
}

/// Render the table: heading, both cards and (once resolved) the result.
#[must_use]
pub fn render(snapshot: &Snapshot, display: &DisplayConfig) -> String {
    let width = MAX_PLACEHOLDER_WIDTH;
    let left = face_text(snapshot.left, display);
    let right = face_text(snapshot.right, display);

    let mut out = String::new();
    out.push_str("High  Low\n\n");
    out.push_str(&format!("[ {left:^width$} ]   [ {right:^width$} ]\n"));

    if snapshot.shows_result() {
        if let Some(outcome) = snapshot.outcome {
            out.push('\n');
            out.push_str(&outcome.to_string());
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardValue, GameState, Guess, Outcome};
    use crate::rules;

    fn card(v: u8) -> CardValue {
        CardValue::new(v).unwrap()
    }

    fn resolved() -> GameState {
        GameState::Resolved {
            value_a: card(10),
            value_b: card(4),
            guess: Guess::Higher,
            outcome: Outcome::Lose,
        }
    }

    #[test]
    fn test_render_idle() {
        let text = render(&GameState::Idle.snapshot(), &DisplayConfig::default());
        assert_eq!(text, "High  Low\n\n[  ?  ]   [  ?  ]\n");
    }

    #[test]
    fn test_render_awaiting() {
        let state = GameState::AwaitingChoice { value_a: card(7) };
        let text = render(&state.snapshot(), &DisplayConfig::default());
        assert_eq!(text, "High  Low\n\n[  7  ]   [  ?  ]\n");
    }

    #[test]
    fn test_render_resolved() {
        let text = render(&resolved().snapshot(), &DisplayConfig::default());
        assert_eq!(text, "High  Low\n\n[ 10  ]   [  4  ]\n\nLOSE!\n");
    }

    #[test]
    fn test_custom_placeholder() {
        let display = DisplayConfig {
            placeholder: "**".to_string(),
            color: false,
        };
        assert_eq!(face_text(CardFace::Hidden, &display), "**");
        assert_eq!(face_text(CardFace::Shown(card(3)), &display), "3");
    }

    #[test]
    fn test_controls_match_legal_events() {
        let states = [
            GameState::Idle,
            GameState::AwaitingChoice { value_a: card(1) },
            resolved(),
        ];

        for state in states {
            let events: Vec<Event> = controls(&state.snapshot()).iter().map(|c| c.event).collect();
            assert_eq!(events, rules::legal_events(&state));
        }
    }

    #[test]
    fn test_control_labels() {
        let labels: Vec<_> = controls(&GameState::AwaitingChoice { value_a: card(2) }.snapshot())
            .iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, vec!["Higher", "Lower"]);
    }
}
