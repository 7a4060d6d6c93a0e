//! Randomness for card draws.
//!
//! ## Key Features
//!
//! - **Injectable**: The state machine draws through the `ValueSource` trait,
//!   never from a global generator
//! - **Deterministic**: Same seed produces identical draws
//! - **Serializable**: O(1) stream position capture and restore
//! - **Scriptable**: `ScriptedSource` forces exact values in tests
//!
//! ```
//! use high_low::core::{GameRng, ValueSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same cards
//! assert_eq!(a.draw(), b.draw());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::card::{CardValue, MAX_CARD_VALUE, MIN_CARD_VALUE};
use crate::error::{Error, Result};

/// Capability to draw a card value.
///
/// Every draw must be an independent pick from `1..=10`. The state machine
/// takes this as a parameter so tests can substitute fixed sequences.
pub trait ValueSource {
    /// Draw the next card value.
    fn draw(&mut self) -> CardValue;
}

impl<S: ValueSource + ?Sized> ValueSource for &mut S {
    fn draw(&mut self) -> CardValue {
        (**self).draw()
    }
}

/// Deterministic RNG for uniform card draws.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed taken from the operating system.
    ///
    /// The chosen seed is kept and reported by [`GameRng::seed`], so an
    /// unseeded session can still be replayed later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl ValueSource for GameRng {
    fn draw(&mut self) -> CardValue {
        let raw = self.inner.gen_range(MIN_CARD_VALUE..=MAX_CARD_VALUE);
        CardValue::new(raw).unwrap_or_else(|_| unreachable!("gen_range stays inside 1..=10"))
    }
}

/// Serializable RNG state.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many cards have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// ```
/// use high_low::core::{ScriptedSource, ValueSource};
///
/// let mut source = ScriptedSource::from_raw(&[3, 7]).unwrap();
/// assert_eq!(source.draw().get(), 3);
/// assert_eq!(source.draw().get(), 7);
/// assert_eq!(source.draw().get(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    values: Vec<CardValue>,
    next: usize,
    draws: usize,
}

impl ScriptedSource {
    /// Build from already validated values.
    pub fn new(values: Vec<CardValue>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyScript);
        }
        Ok(Self {
            values,
            next: 0,
            draws: 0,
        })
    }

    /// Build from raw numbers, validating each one.
    pub fn from_raw(values: &[u8]) -> Result<Self> {
        let values = values
            .iter()
            .map(|&v| CardValue::new(v))
            .collect::<Result<Vec<_>>>()?;
        Self::new(values)
    }

    /// Total number of values handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl ValueSource for ScriptedSource {
    fn draw(&mut self) -> CardValue {
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        self.draws += 1;
        value
    }
}
