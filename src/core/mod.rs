//! Core engine types: state, actions, errors, RNG, configuration.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Action, Outcome};
pub use config::KlondikeConfig;
pub use error::{MoveError, StateError};
pub use rng::{GameRng, GameRngState};
pub use state::{Foundations, GameState, Pile, FOUNDATION_SIZE, TABLEAU_PILES};
