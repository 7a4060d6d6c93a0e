//! Turn sequence integration tests.
//!
//! These tests drive `HighLowGame` through its public API with scripted
//! cards, checking each row of the transition table and the outcome rule.

use high_low::core::{CardFace, CardValue, Event, GameState, Guess, Outcome, Phase, ScriptedSource};
use high_low::games::highlow::{Dispatch, HighLowGame, HighLowGameBuilder};
use high_low::{rules, view, DisplayConfig};

fn card(v: u8) -> CardValue {
    CardValue::new(v).unwrap()
}

fn scripted(values: &[u8]) -> HighLowGame<ScriptedSource> {
    HighLowGameBuilder::new().build_with_source(ScriptedSource::from_raw(values).unwrap())
}

/// Play a single round with fixed cards and return the outcome.
fn play_round(value_a: u8, value_b: u8, guess: Guess) -> Outcome {
    let mut game = scripted(&[value_a, value_b]);
    game.start();
    match guess {
        Guess::Higher => game.choose_higher(),
        Guess::Lower => game.choose_lower(),
    };
    game.state().outcome().expect("resolved round has an outcome")
}

// =============================================================================
// Start
// =============================================================================

/// Test that Start from Idle deals only the left card.
#[test]
fn test_start_from_idle() {
    let mut game = HighLowGame::with_seed(42);

    let result = game.start();

    assert_eq!(
        result,
        Dispatch::Applied {
            from: Phase::Idle,
            to: Phase::AwaitingChoice
        }
    );
    assert!(game.state().value_a().is_some());
    assert!(game.state().value_b().is_none());
    assert!(game.state().choice().is_none());
    assert!(game.state().outcome().is_none());
}

// =============================================================================
// Outcome rule
// =============================================================================

/// Test the four non-tie rows of the outcome table.
#[test]
fn test_outcome_table() {
    assert_eq!(play_round(3, 7, Guess::Higher), Outcome::Win);
    assert_eq!(play_round(7, 3, Guess::Higher), Outcome::Lose);
    assert_eq!(play_round(3, 7, Guess::Lower), Outcome::Lose);
    assert_eq!(play_round(7, 3, Guess::Lower), Outcome::Win);
}

/// Test that a tie loses whichever way the player guessed.
#[test]
fn test_tie_always_loses() {
    assert_eq!(play_round(5, 5, Guess::Higher), Outcome::Lose);
    assert_eq!(play_round(5, 5, Guess::Lower), Outcome::Lose);
}

/// Test that the resolved state records the guess and both cards.
#[test]
fn test_resolved_state_contents() {
    let mut game = scripted(&[3, 7]);
    game.start();
    game.choose_higher();

    assert_eq!(
        game.state(),
        &GameState::Resolved {
            value_a: card(3),
            value_b: card(7),
            guess: Guess::Higher,
            outcome: Outcome::Win,
        }
    );
}

// =============================================================================
// Play again
// =============================================================================

/// Test that PlayAgain clears the round and lands in AwaitingChoice, not Idle.
#[test]
fn test_play_again_returns_to_awaiting_choice() {
    let mut game = scripted(&[3, 7, 9]);
    game.start();
    game.choose_higher();

    let result = game.play_again();

    assert_eq!(
        result,
        Dispatch::Applied {
            from: Phase::Resolved,
            to: Phase::AwaitingChoice
        }
    );
    assert_eq!(game.state(), &GameState::AwaitingChoice { value_a: card(9) });
    assert_eq!(game.state().value_b(), None);
    assert_eq!(game.state().choice(), None);
    assert_eq!(game.state().outcome(), None);
    assert_eq!(game.round(), 2);
}

// =============================================================================
// Ignored events
// =============================================================================

/// Test that choices are ignored while Idle.
#[test]
fn test_choice_ignored_while_idle() {
    let mut game = scripted(&[4]);

    assert_eq!(game.choose_higher(), Dispatch::Ignored { phase: Phase::Idle });
    assert_eq!(game.choose_lower(), Dispatch::Ignored { phase: Phase::Idle });

    assert_eq!(game.state(), &GameState::Idle);
    assert_eq!(game.source().draws(), 0);
}

/// Test that choices are ignored once Resolved.
#[test]
fn test_choice_ignored_while_resolved() {
    let mut game = scripted(&[8, 2]);
    game.start();
    game.choose_lower();
    let before = *game.state();

    assert!(!game.choose_higher().is_applied());
    assert!(!game.choose_lower().is_applied());
    assert!(!game.start().is_applied());

    assert_eq!(game.state(), &before);
    assert_eq!(game.source().draws(), 2);
    assert_eq!(game.history().len(), 2);
}

/// Test that PlayAgain before any round and Start mid-round are ignored.
#[test]
fn test_out_of_sequence_events_ignored() {
    let mut game = scripted(&[6]);

    assert!(!game.play_again().is_applied());
    game.start();
    assert!(!game.start().is_applied());
    assert!(!game.play_again().is_applied());

    assert_eq!(game.state(), &GameState::AwaitingChoice { value_a: card(6) });
    assert_eq!(game.round(), 1);
}

// =============================================================================
// Cycling
// =============================================================================

/// Test that many rounds keep cycling without reaching a stuck state.
#[test]
fn test_rounds_cycle_indefinitely() {
    let mut game = HighLowGame::with_seed(7);
    game.start();

    for round in 0..500 {
        assert!(!rules::is_terminal(game.state()));
        assert!(!game.legal_events().is_empty());

        let choice = if round % 2 == 0 {
            Event::ChooseHigher
        } else {
            Event::ChooseLower
        };
        assert!(game.dispatch(choice).is_applied());
        assert_eq!(game.state().phase(), Phase::Resolved);

        assert!(game.play_again().is_applied());
        assert_eq!(game.state().phase(), Phase::AwaitingChoice);
    }

    assert_eq!(game.round(), 501);
}

/// Test that the same seed replays the same session.
#[test]
fn test_same_seed_same_session() {
    let script = [
        Event::Start,
        Event::ChooseLower,
        Event::PlayAgain,
        Event::ChooseHigher,
        Event::PlayAgain,
        Event::ChooseLower,
    ];

    let run = |seed: u64| {
        let mut game = HighLowGame::with_seed(seed);
        script
            .iter()
            .map(|&event| {
                game.dispatch(event);
                *game.state()
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(99), run(99));
}

// =============================================================================
// Snapshot / renderer contract
// =============================================================================

/// Test the display convention across a whole round.
#[test]
fn test_snapshot_display_convention() {
    let mut game = scripted(&[2, 2]);

    let idle = game.snapshot();
    assert_eq!(idle.left, CardFace::Hidden);
    assert_eq!(idle.right, CardFace::Hidden);
    assert_eq!(idle.outcome, None);

    game.start();
    let awaiting = game.snapshot();
    assert_eq!(awaiting.left, CardFace::Shown(card(2)));
    assert_eq!(awaiting.right, CardFace::Hidden);
    assert!(awaiting.shows_choice_controls());

    game.choose_higher();
    let resolved = game.snapshot();
    assert_eq!(resolved.right, CardFace::Shown(card(2)));
    assert_eq!(resolved.outcome, Some(Outcome::Lose));
    assert!(resolved.shows_result());

    let text = view::render(&resolved, &DisplayConfig::default());
    assert!(text.ends_with("LOSE!\n"));
}

/// Test that a renderer driving the game only through visible controls
/// never sends an ignored event.
#[test]
fn test_controls_always_apply() {
    let mut game = HighLowGame::with_seed(3);

    for step in 0..50 {
        let controls = view::controls(&game.snapshot());
        let control = controls[step % controls.len()];
        assert!(game.dispatch(control.event).is_applied());
    }
}
