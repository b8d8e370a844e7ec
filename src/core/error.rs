//! Error types for rejected moves and rejected layouts.
//!
//! A `MoveError` is an expected, frequent outcome (the player tried
//! something the rules forbid), never a fault. Every transition that
//! returns one has left the game state untouched.

use thiserror::Error;

use crate::cards::{CardId, Suit};

/// Why a transition was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("card {0} is not on the waste, tableau or foundations")]
    CardNotFound(CardId),

    #[error("tableau pile {0} does not exist")]
    NoSuchPile(usize),

    #[error("card {0} is face down")]
    FaceDown(CardId),

    /// The card is buried under others in a pile that only releases
    /// its top card for this kind of move.
    #[error("card {0} is not the exposed card of its pile")]
    NotExposed(CardId),

    #[error("card {card} cannot be placed on the {suit} foundation")]
    IllegalFoundation { card: CardId, suit: Suit },

    #[error("card {card} cannot be placed on tableau pile {pile}")]
    IllegalTableau { card: CardId, pile: usize },

    #[error("card {0} is on a foundation and cannot leave it")]
    FromFoundation(CardId),

    #[error("card {card} is already on tableau pile {pile}")]
    SamePile { card: CardId, pile: usize },

    #[error("tableau pile {0} has no face-down card to flip")]
    NothingToFlip(usize),
}

/// Why an explicit layout was refused by `GameState::from_parts`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("expected 7 tableau piles, got {0}")]
    TableauPileCount(usize),

    #[error("expected 52 cards across all piles, got {0}")]
    CardCount(usize),

    #[error("card {0} appears more than once")]
    DuplicateCard(CardId),

    #[error("the {0} foundation is not an ascending same-suit run from Ace")]
    FoundationOrder(Suit),

    #[error("card {0} is face down on the waste")]
    FaceDownOnWaste(CardId),

    #[error("card {0} is face down on a foundation")]
    FaceDownOnFoundation(CardId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Value;

    #[test]
    fn test_messages() {
        let card = CardId::new(Value::Two, Suit::Hearts);
        assert_eq!(
            MoveError::IllegalFoundation { card, suit: Suit::Spades }.to_string(),
            "card 2-hearts cannot be placed on the spades foundation"
        );
        assert_eq!(
            MoveError::IllegalTableau { card, pile: 3 }.to_string(),
            "card 2-hearts cannot be placed on tableau pile 3"
        );
        assert_eq!(StateError::CardCount(51).to_string(), "expected 52 cards across all piles, got 51");
    }
}
