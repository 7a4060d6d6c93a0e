//! High-Low state machine.

use im::Vector;

use crate::core::{
    Event, EventRecord, GameConfig, GameRng, GameRngState, GameState, Phase, Snapshot,
    ValueSource,
};
use crate::rules;

/// What happened to a dispatched event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The event fired a transition.
    Applied { from: Phase, to: Phase },
    /// The current phase has no transition for the event; nothing changed.
    Ignored { phase: Phase },
}

impl Dispatch {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Dispatch::Applied { .. })
    }
}

/// The game: authoritative state, its randomness and the event log.
///
/// Events are processed one at a time to completion. `dispatch` takes
/// `&mut self`, so only one producer can ever feed the machine.
///
/// ```
/// use high_low::core::{Phase, ScriptedSource};
/// use high_low::games::highlow::HighLowGameBuilder;
///
/// let source = ScriptedSource::from_raw(&[3, 7]).unwrap();
/// let mut game = HighLowGameBuilder::new().build_with_source(source);
///
/// game.start();
/// game.choose_higher();
///
/// assert_eq!(game.state().phase(), Phase::Resolved);
/// assert!(game.state().outcome().unwrap().is_win());
/// ```
#[derive(Clone, Debug)]
pub struct HighLowGame<R: ValueSource = GameRng> {
    state: GameState,
    source: R,
    round: u32,
    record_history: bool,
    history: Vector<EventRecord>,
    next_sequence: u32,
}

/// Builder for creating a `HighLowGame`.
#[derive(Clone, Debug, Default)]
pub struct HighLowGameBuilder {
    config: GameConfig,
}

impl HighLowGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn record_history(mut self, record: bool) -> Self {
        self.config.record_history = record;
        self
    }

    /// Build with the configured seed, or an OS-chosen one if none is set.
    pub fn build(self) -> HighLowGame<GameRng> {
        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        log::info!("new high-low game (seed {})", rng.seed());
        self.build_with_source(rng)
    }

    /// Build around any value source (e.g. a scripted one in tests).
    pub fn build_with_source<R: ValueSource>(self, source: R) -> HighLowGame<R> {
        HighLowGame {
            state: GameState::new(),
            source,
            round: 0,
            record_history: self.config.record_history,
            history: Vector::new(),
            next_sequence: 0,
        }
    }
}

impl HighLowGame<GameRng> {
    /// Unseeded game with default settings.
    pub fn new() -> Self {
        HighLowGameBuilder::new().build()
    }

    /// Reproducible game with default settings.
    pub fn with_seed(seed: u64) -> Self {
        HighLowGameBuilder::new().seed(seed).build()
    }

    /// Seed of the underlying RNG.
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    /// RNG stream position, for replaying the rest of a session.
    pub fn rng_state(&self) -> GameRngState {
        self.source.state()
    }
}

impl Default for HighLowGame<GameRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ValueSource> HighLowGame<R> {
    /// Feed one event into the machine.
    pub fn dispatch(&mut self, event: Event) -> Dispatch {
        let from = self.state.phase();
        if !rules::accepts(&self.state, event) {
            log::trace!("ignoring {} in {}", event, from);
            return Dispatch::Ignored { phase: from };
        }

        self.state = rules::transition(&self.state, event, &mut self.source);
        let to = self.state.phase();

        if matches!(event, Event::Start | Event::PlayAgain) {
            self.round += 1;
        }

        log::debug!(
            "round {:<4} {:<8} {} -> {} (a={:?} b={:?} outcome={:?})",
            self.round,
            event,
            from,
            to,
            self.state.value_a().map(|v| v.get()),
            self.state.value_b().map(|v| v.get()),
            self.state.outcome(),
        );

        if self.record_history {
            let record = EventRecord::new(self.round, self.next_sequence, event, from, to);
            self.next_sequence += 1;
            self.history.push_back(record);
        }

        Dispatch::Applied { from, to }
    }

    pub fn start(&mut self) -> Dispatch {
        self.dispatch(Event::Start)
    }

    pub fn choose_higher(&mut self) -> Dispatch {
        self.dispatch(Event::ChooseHigher)
    }

    pub fn choose_lower(&mut self) -> Dispatch {
        self.dispatch(Event::ChooseLower)
    }

    pub fn play_again(&mut self) -> Dispatch {
        self.dispatch(Event::PlayAgain)
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Snapshot for the renderer.
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Events the current phase reacts to.
    pub fn legal_events(&self) -> &'static [Event] {
        rules::legal_events(&self.state)
    }

    /// Rounds started so far (0 while idle).
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Applied events, oldest first. Empty when history is disabled.
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    /// The randomness source.
    pub fn source(&self) -> &R {
        &self.source
    }
}
