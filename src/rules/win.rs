//! Win detection.

use crate::core::state::GameState;

/// True iff all four foundations hold exactly 13 cards.
#[must_use]
pub fn check_win_condition(state: &GameState) -> bool {
    state.foundations().is_complete()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{build_ordered_deck, Card, Suit, Value};
    use crate::core::state::TABLEAU_PILES;

    /// Every card face-up on its foundation, except those matching `hold_back`,
    /// which go to the waste.
    fn layout(hold_back: impl Fn(&Card) -> bool) -> GameState {
        let (waste, foundation): (Vec<Card>, Vec<Card>) = build_ordered_deck()
            .into_iter()
            .map(|c| c.with_face_up(true))
            .partition(|c| hold_back(c));
        GameState::from_parts(vec![], waste, foundation, vec![Vec::new(); TABLEAU_PILES]).unwrap()
    }

    #[test]
    fn test_all_complete_wins() {
        assert!(check_win_condition(&layout(|_| false)));
    }

    #[test]
    fn test_one_king_short_does_not_win() {
        let state = layout(|c| c.value == Value::King && c.suit == Suit::Spades);
        assert_eq!(state.foundation(Suit::Spades).len(), 12);
        assert!(!check_win_condition(&state));
    }

    #[test]
    fn test_all_kings_short_does_not_win() {
        let state = layout(|c| c.value == Value::King);
        assert!(!check_win_condition(&state));
    }

    #[test]
    fn test_empty_foundations_do_not_win() {
        let state = layout(|_| true);
        assert_eq!(state.foundations().card_count(), 0);
        assert!(!check_win_condition(&state));
    }
}
