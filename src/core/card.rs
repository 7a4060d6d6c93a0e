//! Card values.
//!
//! Every card in the game shows a single number between 1 and 10 inclusive.
//! `CardValue` can only be built inside that range, so any value held by
//! the state machine already satisfies the range invariant.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowest value a card can show.
pub const MIN_CARD_VALUE: u8 = 1;

/// Highest value a card can show.
pub const MAX_CARD_VALUE: u8 = 10;

/// A number shown on a card, always in `1..=10`.
///
/// ```
/// use high_low::core::CardValue;
///
/// let seven = CardValue::new(7).unwrap();
/// assert_eq!(seven.get(), 7);
///
/// assert!(CardValue::new(0).is_err());
/// assert!(CardValue::new(11).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardValue(u8);

impl CardValue {
    /// Build a card value, rejecting anything outside `1..=10`.
    pub fn new(value: u8) -> Result<Self> {
        if (MIN_CARD_VALUE..=MAX_CARD_VALUE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidCardValue(value))
        }
    }

    /// Get the raw number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Signed difference `other - self`.
    ///
    /// Positive when `other` is higher, negative when lower, zero on a tie.
    #[must_use]
    pub fn delta_to(self, other: CardValue) -> i8 {
        other.0 as i8 - self.0 as i8
    }

    /// Iterate over every legal card value in ascending order.
    pub fn all() -> impl Iterator<Item = CardValue> {
        (MIN_CARD_VALUE..=MAX_CARD_VALUE).map(CardValue)
    }
}

impl TryFrom<u8> for CardValue {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CardValue> for u8 {
    fn from(value: CardValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
