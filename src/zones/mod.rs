//! Card locations.
//!
//! ## Key Types
//!
//! - `Location`: tagged pile selector (waste, tableau index, foundation suit)
//! - `CardLocation`: a located card with its pile and position
//!
//! `find_card_by_id` resolves an identifier against a `GameState`.

pub mod location;

pub use location::{find_card_by_id, CardLocation, Location};
