//! The controlling session for one interactive game.
//!
//! ## Key Types
//!
//! - `Session`: owns the only `GameState`, the RNG and the selection
//! - `Target`: what a click landed on
//! - `Selection`: the card picked up by the first click
//! - `SessionEvent`: what a piece of input did
//!
//! Every mutating method takes `&mut self`, so one session is driven by
//! one thread of control. A server hosting many sessions wraps each one
//! in its own lock.

pub mod controller;

pub use controller::{Selection, Session, SessionEvent, Target};
