//! Klondike rules.
//!
//! - `validator`: pure legality predicates for foundation and tableau moves
//! - `engine`: dealing, transitions and legal-move enumeration
//! - `win`: the win predicate
//!
//! The engine consults the validator before every card move and the win
//! predicate after every successful transition.

pub mod engine;
pub mod validator;
pub mod win;

pub use engine::Klondike;
pub use validator::{can_move_to_foundation, can_move_to_tableau};
pub use win::check_win_condition;
