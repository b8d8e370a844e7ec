//! Cards as they sit in piles: identity plus face state.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::definition::{CardId, Color, Suit, Value};

/// A card in play.
///
/// `Card` is a small `Copy` value. Piles own their cards outright, so
/// changing face state means changing the copy stored in the pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub value: Value,
    /// Is this card showing its face?
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self {
            suit,
            value,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(value: Value, suit: Suit) -> Self {
        Self {
            suit,
            value,
            face_up: true,
        }
    }

    /// The card's unique identifier.
    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId::new(self.value, self.suit)
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn rank_index(&self) -> u8 {
        self.value.rank_index()
    }

    /// Copy of this card with the given face state.
    #[must_use]
    pub const fn with_face_up(mut self, face_up: bool) -> Self {
        self.face_up = face_up;
        self
    }
}

impl From<CardId> for Card {
    fn from(id: CardId) -> Self {
        Self::new(id.value, id.suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}", self.id())
        } else {
            write!(f, "[{}]", self.id())
        }
    }
}
