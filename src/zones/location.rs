//! Card lookup: where is a card, and is it showing?
//!
//! Only the piles a player can pick from are searched: waste, tableau and
//! foundations. Stock cards are never locatable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, CardId, Suit};
use crate::core::state::{GameState, Pile};

/// A pile a card can be picked up from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Waste,
    /// Tableau pile by index (0..7).
    Tableau(usize),
    Foundation(Suit),
}

impl Location {
    /// The pile this location names, if it exists.
    #[must_use]
    pub fn pile<'a>(&self, state: &'a GameState) -> Option<&'a Pile> {
        match *self {
            Location::Waste => Some(state.waste()),
            Location::Tableau(index) => state.tableau_pile(index),
            Location::Foundation(suit) => Some(state.foundation(suit)),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Waste => write!(f, "waste"),
            Location::Tableau(index) => write!(f, "tableau pile {index}"),
            Location::Foundation(suit) => write!(f, "{suit} foundation"),
        }
    }
}

/// Result of a successful lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLocation {
    /// The card as currently stored, including face state.
    pub card: Card,
    pub location: Location,
    /// Position within the pile (0 = bottom).
    pub card_index: usize,
}

impl CardLocation {
    /// Is this the last card of its pile?
    #[must_use]
    pub fn is_top(&self, state: &GameState) -> bool {
        self.location
            .pile(state)
            .is_some_and(|pile| pile.len() == self.card_index + 1)
    }
}

/// Find a card by identifier.
///
/// Searches the waste, then tableau piles left to right, then foundations
/// in suit order. Returns `None` if the card is in the stock or absent;
/// callers treat that as a no-op.
#[must_use]
pub fn find_card_by_id(state: &GameState, id: &CardId) -> Option<CardLocation> {
    let hit = |location: Location, pile: &Pile| {
        pile.iter().position(|c| c.id() == *id).map(|card_index| CardLocation {
            card: pile[card_index],
            location,
            card_index,
        })
    };

    hit(Location::Waste, state.waste())
        .or_else(|| {
            state
                .tableau()
                .iter()
                .enumerate()
                .find_map(|(i, pile)| hit(Location::Tableau(i), pile))
        })
        .or_else(|| {
            state
                .foundations()
                .iter()
                .find_map(|(suit, pile)| hit(Location::Foundation(suit), pile))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{build_ordered_deck, Value};
    use crate::core::state::TABLEAU_PILES;

    fn take(deck: &mut Vec<Card>, value: Value, suit: Suit) -> Card {
        let idx = deck
            .iter()
            .position(|c| c.value == value && c.suit == suit)
            .unwrap();
        deck.remove(idx)
    }

    fn sample_state() -> GameState {
        let mut deck = build_ordered_deck();
        let ace_clubs = take(&mut deck, Value::Ace, Suit::Clubs).with_face_up(true);
        let nine_hearts = take(&mut deck, Value::Nine, Suit::Hearts).with_face_up(true);
        let four_spades = take(&mut deck, Value::Four, Suit::Spades);
        let jack_diamonds = take(&mut deck, Value::Jack, Suit::Diamonds).with_face_up(true);

        let mut tableau = vec![Vec::new(); TABLEAU_PILES];
        tableau[3] = vec![four_spades, jack_diamonds];

        GameState::from_parts(deck, vec![nine_hearts], vec![ace_clubs], tableau).unwrap()
    }

    #[test]
    fn test_find_in_waste() {
        let state = sample_state();
        let found = find_card_by_id(&state, &CardId::new(Value::Nine, Suit::Hearts)).unwrap();

        assert_eq!(found.location, Location::Waste);
        assert_eq!(found.card_index, 0);
        assert!(found.card.face_up);
        assert!(found.is_top(&state));
    }

    #[test]
    fn test_find_in_tableau() {
        let state = sample_state();

        let buried = find_card_by_id(&state, &CardId::new(Value::Four, Suit::Spades)).unwrap();
        assert_eq!(buried.location, Location::Tableau(3));
        assert_eq!(buried.card_index, 0);
        assert!(!buried.card.face_up);
        assert!(!buried.is_top(&state));

        let top = find_card_by_id(&state, &CardId::new(Value::Jack, Suit::Diamonds)).unwrap();
        assert_eq!(top.location, Location::Tableau(3));
        assert_eq!(top.card_index, 1);
        assert!(top.is_top(&state));
    }

    #[test]
    fn test_find_in_foundation() {
        let state = sample_state();
        let found = find_card_by_id(&state, &CardId::new(Value::Ace, Suit::Clubs)).unwrap();
        assert_eq!(found.location, Location::Foundation(Suit::Clubs));
        assert_eq!(found.card_index, 0);
    }

    #[test]
    fn test_stock_cards_are_not_found() {
        let state = sample_state();
        assert!(find_card_by_id(&state, &CardId::new(Value::King, Suit::Spades)).is_none());
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::Waste.to_string(), "waste");
        assert_eq!(Location::Tableau(2).to_string(), "tableau pile 2");
        assert_eq!(Location::Foundation(Suit::Hearts).to_string(), "hearts foundation");
    }
}
