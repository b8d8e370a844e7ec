//! Card system: identities, in-play cards and the deck builder.
//!
//! ## Key Types
//!
//! - `Suit`, `Value`, `Color`: card identity components
//! - `CardId`: the `value-suit` identifier, unique across a deck
//! - `Card`: identity plus face state, stored by value in piles
//!
//! The deck builder produces the canonical 52-card order and shuffled
//! permutations of it.

pub mod deck;
pub mod definition;
pub mod instance;

pub use deck::{build_ordered_deck, shuffle, DECK_SIZE};
pub use definition::{CardId, Color, ParseCardIdError, Suit, Value};
pub use instance::Card;
