//! Move legality predicates.
//!
//! Pure functions over a card and a destination pile. They never mutate
//! and never fail: any well-formed input yields a boolean.

use crate::cards::{Card, Value};
use crate::core::state::Pile;

/// Can `card` be placed on top of `foundation`?
///
/// - Face-down cards never move.
/// - An empty foundation accepts only an Ace.
/// - Otherwise the card must match the top card's suit and be exactly
///   one rank higher.
#[must_use]
pub fn can_move_to_foundation(card: &Card, foundation: &Pile) -> bool {
    if !card.face_up {
        return false;
    }

    match foundation.last() {
        None => card.value == Value::Ace,
        Some(top) => card.suit == top.suit && card.rank_index() == top.rank_index() + 1,
    }
}

/// Can `card` (with anything stacked on it) be placed on top of `pile`?
///
/// - Face-down cards never move.
/// - An empty pile accepts only a King.
/// - A face-down top card blocks every placement.
/// - Otherwise the card must be the opposite color of the top card and
///   exactly one rank lower.
#[must_use]
pub fn can_move_to_tableau(card: &Card, pile: &Pile) -> bool {
    if !card.face_up {
        return false;
    }

    match pile.last() {
        None => card.value == Value::King,
        Some(top) if !top.face_up => false,
        Some(top) => card.color() != top.color() && card.rank_index() + 1 == top.rank_index(),
    }
}
