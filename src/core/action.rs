//! Player actions and their outcomes.
//!
//! An `Action` names a transition and its arguments: the card (by id)
//! and the target pile. The rules engine interprets it; an `Outcome`
//! reports what actually happened.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Suit};

/// A transition request.
///
/// ## Example
///
/// ```
/// use klondike_core::cards::{CardId, Suit, Value};
/// use klondike_core::core::Action;
///
/// let draw = Action::Draw;
/// let to_foundation = Action::ToFoundation {
///     card: CardId::new(Value::Ace, Suit::Hearts),
///     suit: Suit::Hearts,
/// };
/// assert_ne!(draw, to_foundation);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Turn the top stock card onto the waste, or recycle an empty stock.
    Draw,
    /// Turn the exposed face-down card of a tableau pile face-up.
    Flip { pile: usize },
    /// Move a single card onto the given foundation.
    ToFoundation { card: CardId, suit: Suit },
    /// Move a card, and any cards stacked on it, onto a tableau pile.
    ToTableau { card: CardId, pile: usize },
    /// Move a card onto the first foundation that accepts it.
    AutoFoundation { card: CardId },
}

impl Action {
    /// Does this action move a card between piles?
    #[must_use]
    pub fn is_card_move(&self) -> bool {
        matches!(
            self,
            Action::ToFoundation { .. } | Action::ToTableau { .. } | Action::AutoFoundation { .. }
        )
    }
}

/// What a successful transition did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A card moved from stock to waste (now face-up).
    Drew(Card),
    /// The waste was turned over into the stock.
    Recycled { cards: usize },
    /// Both stock and waste were empty; nothing happened.
    StockEmpty,
    /// A tableau card was turned face-up.
    Flipped(Card),
    /// A card landed on a foundation.
    ToFoundation { card: Card, suit: Suit },
    /// A block of `cards` cards landed on tableau pile `pile`.
    ToTableau { card: Card, cards: usize, pile: usize },
}

impl Outcome {
    /// Did this outcome change any pile?
    #[must_use]
    pub fn changed_state(&self) -> bool {
        !matches!(self, Outcome::StockEmpty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Value;

    #[test]
    fn test_is_card_move() {
        let card = CardId::new(Value::Five, Suit::Clubs);
        assert!(!Action::Draw.is_card_move());
        assert!(!Action::Flip { pile: 0 }.is_card_move());
        assert!(Action::ToTableau { card, pile: 1 }.is_card_move());
        assert!(Action::AutoFoundation { card }.is_card_move());
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::ToTableau {
            card: CardId::new(Value::Queen, Suit::Hearts),
            pile: 4,
        };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_changed_state() {
        assert!(!Outcome::StockEmpty.changed_state());
        assert!(Outcome::Recycled { cards: 3 }.changed_state());
    }
}
