//! Interactive session: one game, one player, click-driven.
//!
//! The session turns discrete user input (click, double-click, draw,
//! restart) into engine actions. A click either selects a card or, when
//! a card is already selected, tries to move the selection onto whatever
//! was clicked. The selection is single-shot: every move attempt clears
//! it, successful or not.
//!
//! Once the game is won the session ignores all further input except
//! `restart`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{Card, CardId, Suit};
use crate::core::action::{Action, Outcome};
use crate::core::config::KlondikeConfig;
use crate::core::error::MoveError;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::rules::Klondike;
use crate::zones::{find_card_by_id, Location};

/// The card picked up by a first click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub card: CardId,
    /// Where the card was when it was selected.
    pub location: Location,
}

/// What the user clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// A visible card.
    Card(CardId),
    /// A foundation slot, typically an empty one.
    Foundation(Suit),
    /// A tableau pile, typically an empty one.
    Tableau(usize),
}

/// Result of one piece of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A card became the selection.
    Selected(Selection),
    /// The selection was cleared without changing the game.
    Deselected,
    /// A face-down tableau card was turned up.
    Flipped(Card),
    /// A transition was applied.
    Moved(Outcome),
    /// The attempted move broke a rule; the game is unchanged.
    Rejected(MoveError),
    /// The input had no effect.
    Ignored,
}

/// A single player's game.
#[derive(Clone, Debug)]
pub struct Session {
    rules: Klondike,
    rng: GameRng,
    state: GameState,
    selection: Option<Selection>,
}

impl Session {
    /// Start a session and deal the first game.
    ///
    /// Deals are reproducible when `config.seed` is set.
    #[must_use]
    pub fn new(config: KlondikeConfig) -> Self {
        let mut rng = config.rng();
        let rules = Klondike::new(config);
        let state = rules.initialize_game(&mut rng);
        Self {
            rules,
            rng,
            state,
            selection: None,
        }
    }

    /// Start a session from an existing position.
    ///
    /// Later restarts deal from `config`'s RNG.
    #[must_use]
    pub fn with_state(config: KlondikeConfig, state: GameState) -> Self {
        Self {
            rng: config.rng(),
            rules: Klondike::new(config),
            state,
            selection: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &Klondike {
        &self.rules
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.game_won()
    }

    /// Discard the current game and deal a new one.
    pub fn restart(&mut self) {
        self.selection = None;
        self.state = self.rules.initialize_game(&mut self.rng);
    }

    /// Click on the stock.
    pub fn draw(&mut self) -> SessionEvent {
        if self.is_won() {
            return SessionEvent::Ignored;
        }
        self.selection = None;
        self.perform(Action::Draw)
    }

    /// Click on a card or pile.
    pub fn select(&mut self, target: Target) -> SessionEvent {
        if self.is_won() {
            trace!(?target, "game over, ignoring click");
            return SessionEvent::Ignored;
        }

        match target {
            Target::Card(id) => self.select_card(id),
            Target::Foundation(suit) => match self.selection.take() {
                Some(sel) => self.perform(Action::ToFoundation { card: sel.card, suit }),
                None => SessionEvent::Ignored,
            },
            Target::Tableau(pile) => match self.selection.take() {
                Some(sel) => self.perform(Action::ToTableau { card: sel.card, pile }),
                None => SessionEvent::Ignored,
            },
        }
    }

    /// Double-click on a card: send it to a foundation if one accepts it.
    ///
    /// Returns whether the card moved.
    pub fn double_click(&mut self, id: &CardId) -> bool {
        if self.is_won() {
            return false;
        }

        let moved = self.rules.auto_move_to_foundation(&mut self.state, id).is_some();
        if moved && self.selection.is_some_and(|sel| sel.card == *id) {
            self.selection = None;
        }
        moved
    }

    fn select_card(&mut self, id: CardId) -> SessionEvent {
        let Some(found) = find_card_by_id(&self.state, &id) else {
            trace!(card = %id, "click on unlocatable card");
            return SessionEvent::Ignored;
        };

        if !found.card.face_up {
            return match found.location {
                Location::Tableau(pile) if found.is_top(&self.state) => self.perform(Action::Flip { pile }),
                _ => SessionEvent::Ignored,
            };
        }

        match self.selection.take() {
            None => {
                let sel = Selection {
                    card: id,
                    location: found.location,
                };
                debug!(card = %id, location = %found.location, "selected card");
                self.selection = Some(sel);
                SessionEvent::Selected(sel)
            }
            Some(sel) if sel.card == id => SessionEvent::Deselected,
            Some(sel) => match found.location {
                Location::Foundation(suit) => self.perform(Action::ToFoundation { card: sel.card, suit }),
                Location::Tableau(pile) => self.perform(Action::ToTableau { card: sel.card, pile }),
                Location::Waste => SessionEvent::Deselected,
            },
        }
    }

    fn perform(&mut self, action: Action) -> SessionEvent {
        match self.rules.apply(&mut self.state, &action) {
            Ok(Outcome::Flipped(card)) => SessionEvent::Flipped(card),
            Ok(outcome) => SessionEvent::Moved(outcome),
            Err(err) => SessionEvent::Rejected(err),
        }
    }
}
