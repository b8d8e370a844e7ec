//! Deck construction and shuffling.

use super::definition::{Suit, Value};
use super::instance::Card;
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Build the 52 canonical cards, face-down, suit-major and value-minor.
///
/// ```
/// use klondike_core::cards::{build_ordered_deck, Suit, Value};
///
/// let deck = build_ordered_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0].id().to_string(), "A-hearts");
/// assert_eq!(deck[51].id().to_string(), "K-spades");
/// ```
#[must_use]
pub fn build_ordered_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Value::ALL.into_iter().map(move |value| Card::new(value, suit)))
        .collect()
}

/// Return a uniformly random permutation of `cards`.
///
/// The input is left untouched.
#[must_use]
pub fn shuffle(cards: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled
}
