//! # klondike-core
//!
//! A single-player Klondike Solitaire engine: dealing, move legality,
//! card movement, scoring and win detection.
//!
//! ## Design Principles
//!
//! 1. **Value cards, indexed piles**: Cards are small `Copy` values owned
//!    by the pile that holds them. A move removes from one pile and
//!    appends to another; nothing is shared.
//!
//! 2. **Tagged locations**: A pile is named by `Location::Waste`,
//!    `Location::Tableau(i)` or `Location::Foundation(suit)`, matched
//!    exhaustively.
//!
//! 3. **Explicit randomness**: Every shuffle takes a `GameRng`, so a seed
//!    reproduces a deal exactly.
//!
//! 4. **Atomic transitions**: A rejected move returns a `MoveError` and
//!    changes nothing. Rejections are ordinary outcomes, not faults.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles are `im` vectors, so a
//!   `GameState` clone is O(1) and functional transitions are cheap.
//!
//! - **Logging**: Transitions emit `tracing` events. The crate installs no
//!   subscriber.
//!
//! ## Modules
//!
//! - `cards`: Suits, values, identifiers, the deck builder
//! - `core`: Game state, actions, errors, RNG, configuration
//! - `zones`: Card lookup by identifier
//! - `rules`: Move validation, the rules engine, win detection
//! - `session`: Click-driven controller for one interactive game
//!
//! ## Example
//!
//! ```
//! use klondike_core::{Action, GameRng, Klondike, Outcome};
//!
//! let rules = Klondike::default();
//! let mut state = rules.initialize_game(&mut GameRng::new(7));
//!
//! let outcome = rules.apply(&mut state, &Action::Draw).unwrap();
//! assert!(matches!(outcome, Outcome::Drew(_)));
//! assert_eq!(state.moves(), 1);
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{build_ordered_deck, shuffle, Card, CardId, Color, Suit, Value};

pub use crate::core::{
    Action, Foundations, GameRng, GameRngState, GameState, KlondikeConfig, MoveError, Outcome,
    Pile, StateError, TABLEAU_PILES,
};

pub use crate::zones::{find_card_by_id, CardLocation, Location};

pub use crate::rules::{can_move_to_foundation, can_move_to_tableau, check_win_condition, Klondike};

pub use crate::session::{Selection, Session, SessionEvent, Target};
