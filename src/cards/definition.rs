//! Card identity: suits, values, colors and the `value-suit` identifier.
//!
//! Identity never changes once a deck is built. Face state lives on
//! [`Card`](super::Card), not here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four French suits.
///
/// The declaration order is the canonical order used for deck building,
/// foundation iteration and auto-move scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Position of this suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color of cards in this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Lowercase name used in card identifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| ParseCardIdError::UnknownSuit(s.to_string()))
    }
}

/// Card color, used by the alternating-color tableau rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card value from Ace (low) to King.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Value {
    /// All values in rank order, Ace first.
    pub const ALL: [Value; 13] = [
        Value::Ace,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
    ];

    /// Rank index: Ace = 0 ... King = 12.
    #[must_use]
    pub const fn rank_index(self) -> u8 {
        self as u8
    }

    /// Short label used in card identifiers ("A", "2".."10", "J", "Q", "K").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Value::Ace => "A",
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Value {
    type Err = ParseCardIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::ALL
            .into_iter()
            .find(|value| value.label() == s)
            .ok_or_else(|| ParseCardIdError::UnknownValue(s.to_string()))
    }
}

/// Unique identifier of one of the 52 cards.
///
/// Renders as `value-suit`, e.g. `A-hearts` or `10-spades`.
///
/// ```
/// use klondike_core::cards::{CardId, Suit, Value};
///
/// let id: CardId = "10-spades".parse().unwrap();
/// assert_eq!(id, CardId::new(Value::Ten, Suit::Spades));
/// assert_eq!(id.to_string(), "10-spades");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId {
    pub value: Value,
    pub suit: Suit,
}

impl CardId {
    /// Create an identifier.
    #[must_use]
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.value, self.suit)
    }
}

impl FromStr for CardId {
    type Err = ParseCardIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, suit) = s
            .split_once('-')
            .ok_or_else(|| ParseCardIdError::Malformed(s.to_string()))?;
        Ok(Self::new(value.parse()?, suit.parse()?))
    }
}

/// Failure to parse a `value-suit` identifier.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCardIdError {
    #[error("card id `{0}` is not of the form value-suit")]
    Malformed(String),
    #[error("unknown card value `{0}`")]
    UnknownValue(String),
    #[error("unknown suit `{0}`")]
    UnknownSuit(String),
}
