//! The Klondike rules engine: dealing and every state transition.
//!
//! Transitions mutate a `GameState` through `&mut`, so the caller's
//! exclusive ownership is the only synchronization. Each transition runs
//! all of its checks before touching the state: a rejected move returns a
//! `MoveError` and leaves piles and counters exactly as they were.
//!
//! ## Implementation Notes
//!
//! - Foundation moves are single-card: the source must be the waste top or
//!   the last card of a tableau pile.
//! - Tableau moves carry the clicked card and everything stacked on it.
//! - Cards never leave a foundation.
//! - The win flag is re-evaluated after every successful transition.

use tracing::{debug, info, trace};

use super::validator::{can_move_to_foundation, can_move_to_tableau};
use super::win::check_win_condition;
use crate::cards::{build_ordered_deck, shuffle, Card, CardId, Suit};
use crate::core::action::{Action, Outcome};
use crate::core::config::KlondikeConfig;
use crate::core::error::MoveError;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Pile, TABLEAU_PILES};
use crate::zones::{find_card_by_id, CardLocation, Location};

/// Where a moving block of cards is lifted from.
#[derive(Clone, Copy, Debug)]
enum Source {
    WasteTop,
    /// Tableau pile `pile`, from `index` to the end.
    Tableau { pile: usize, index: usize },
}

/// Klondike rules with a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Klondike {
    config: KlondikeConfig,
}

impl Klondike {
    #[must_use]
    pub fn new(config: KlondikeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &KlondikeConfig {
        &self.config
    }

    // === Dealing ===

    /// Shuffle a fresh deck and deal the Klondike layout.
    ///
    /// Tableau pile `i` receives `i + 1` cards from the draw end of the
    /// shuffled deck, only the last of them face-up. The remaining 24
    /// cards stay face-down in the stock.
    pub fn initialize_game(&self, rng: &mut GameRng) -> GameState {
        let mut deck = shuffle(&build_ordered_deck(), rng);
        let mut state = GameState::empty();

        for (i, pile) in state.tableau.iter_mut().enumerate() {
            for j in 0..=i {
                if let Some(card) = deck.pop() {
                    pile.push_back(card.with_face_up(j == i));
                }
            }
        }
        state.deck = deck.into_iter().collect();

        info!(seed = rng.seed(), stock = state.deck.len(), "dealt new game");
        state
    }

    // === Transitions ===

    /// Apply an action, returning what happened.
    pub fn apply(&self, state: &mut GameState, action: &Action) -> Result<Outcome, MoveError> {
        let result = match *action {
            Action::Draw => Ok(self.draw_card(state)),
            Action::Flip { pile } => self.flip(state, pile).map(Outcome::Flipped),
            Action::ToFoundation { card, suit } => self
                .move_to_foundation(state, &card, suit)
                .map(|card| Outcome::ToFoundation { card, suit }),
            Action::ToTableau { card, pile } => self
                .move_to_tableau(state, &card, pile)
                .map(|(card, cards)| Outcome::ToTableau { card, cards, pile }),
            Action::AutoFoundation { card } => self
                .try_auto_foundation(state, &card)
                .map(|(card, suit)| Outcome::ToFoundation { card, suit }),
        };

        match &result {
            Ok(_) => Self::refresh_win(state),
            Err(err) => trace!(?action, %err, "action rejected"),
        }
        result
    }

    /// Functional form of [`apply`](Self::apply): the state after `action`.
    ///
    /// A rejected action yields an unchanged copy. Cloning is O(1) because
    /// piles are persistent vectors.
    #[must_use]
    pub fn step(&self, state: &GameState, action: &Action) -> GameState {
        let mut next = state.clone();
        // A rejection leaves `next` untouched.
        let _ = self.apply(&mut next, action);
        next
    }

    /// Draw from the stock, or recycle the waste when the stock is empty.
    ///
    /// A draw counts as a move. A recycle does not, unless
    /// `recycle_counts_as_move` is set.
    pub fn draw_card(&self, state: &mut GameState) -> Outcome {
        if let Some(card) = state.deck.pop_back() {
            let card = card.with_face_up(true);
            state.waste.push_back(card);
            state.moves = state.moves.saturating_add(1);
            debug!(%card, stock = state.deck.len(), "drew card");
            return Outcome::Drew(card);
        }

        if state.waste.is_empty() {
            return Outcome::StockEmpty;
        }

        let cards = state.waste.len();
        state.deck = state.waste.iter().rev().map(|c| c.with_face_up(false)).collect();
        state.waste.clear();
        if self.config.recycle_counts_as_move {
            state.moves = state.moves.saturating_add(1);
        }
        debug!(cards, "recycled waste into stock");
        Outcome::Recycled { cards }
    }

    /// Turn the exposed face-down card of tableau pile `pile` face-up.
    ///
    /// Not counted as a move.
    pub fn flip(&self, state: &mut GameState, pile: usize) -> Result<Card, MoveError> {
        let target = state.tableau.get_mut(pile).ok_or(MoveError::NoSuchPile(pile))?;
        let Some(card) = target.last().copied().filter(|c| !c.face_up) else {
            return Err(MoveError::NothingToFlip(pile));
        };

        let flipped = card.with_face_up(true);
        let last = target.len() - 1;
        target.set(last, flipped);

        debug!(card = %flipped, pile, "flipped card");
        Ok(flipped)
    }

    /// Move a single card onto the foundation for `suit`.
    ///
    /// Scores `foundation_points` and counts one move.
    pub fn move_to_foundation(
        &self,
        state: &mut GameState,
        id: &CardId,
        suit: Suit,
    ) -> Result<Card, MoveError> {
        let found = Self::locate_face_up(state, id)?;
        let source = Self::source_of(state, &found, true)?;

        let legal = found.card.suit == suit && can_move_to_foundation(&found.card, state.foundation(suit));
        if !legal {
            return Err(MoveError::IllegalFoundation { card: *id, suit });
        }

        let block = Self::lift(state, source);
        state.foundation[suit].append(block);
        state.score = state.score.saturating_add(self.config.foundation_points);
        state.moves = state.moves.saturating_add(1);

        debug!(card = %found.card, %suit, score = state.score, "moved card to foundation");
        Self::refresh_win(state);
        Ok(found.card)
    }

    /// Move a card, with every card after it in its pile, onto tableau pile
    /// `pile`.
    ///
    /// Waste cards move alone. Returns the moved card and the block size.
    pub fn move_to_tableau(
        &self,
        state: &mut GameState,
        id: &CardId,
        pile: usize,
    ) -> Result<(Card, usize), MoveError> {
        if pile >= TABLEAU_PILES {
            return Err(MoveError::NoSuchPile(pile));
        }

        let found = Self::locate_face_up(state, id)?;
        if found.location == Location::Tableau(pile) {
            return Err(MoveError::SamePile { card: *id, pile });
        }
        let source = Self::source_of(state, &found, false)?;

        if !can_move_to_tableau(&found.card, &state.tableau[pile]) {
            return Err(MoveError::IllegalTableau { card: *id, pile });
        }

        let block = Self::lift(state, source);
        let cards = block.len();
        state.tableau[pile].append(block);
        state.moves = state.moves.saturating_add(1);

        debug!(card = %found.card, cards, pile, "moved cards to tableau");
        Ok((found.card, cards))
    }

    /// Move a card onto the first foundation that accepts it, scanning in
    /// suit order. Returns the foundation used, or `None` if none accepts.
    pub fn auto_move_to_foundation(&self, state: &mut GameState, id: &CardId) -> Option<Suit> {
        self.try_auto_foundation(state, id).ok().map(|(_, suit)| suit)
    }

    // === Enumeration ===

    /// Every action `apply` would currently accept.
    ///
    /// Draw is listed only when it would change something. Auto-moves are
    /// omitted: each one is also listed as an explicit foundation move.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let mut actions = Vec::new();

        if !state.deck.is_empty() || !state.waste.is_empty() {
            actions.push(Action::Draw);
        }

        for (pile, cards) in state.tableau.iter().enumerate() {
            if cards.last().is_some_and(|c| !c.face_up) {
                actions.push(Action::Flip { pile });
            }
        }

        if let Some(card) = state.waste.last() {
            self.push_card_moves(state, card, true, None, &mut actions);
        }

        for (src, cards) in state.tableau.iter().enumerate() {
            let run = cards.iter().rev().take_while(|c| c.face_up).count();
            let run_start = cards.len() - run;
            for (index, card) in cards.iter().enumerate().skip(run_start) {
                let is_top = index + 1 == cards.len();
                self.push_card_moves(state, card, is_top, Some(src), &mut actions);
            }
        }

        actions
    }

    fn push_card_moves(
        &self,
        state: &GameState,
        card: &Card,
        is_top: bool,
        from_pile: Option<usize>,
        out: &mut Vec<Action>,
    ) {
        let id = card.id();
        if is_top && can_move_to_foundation(card, state.foundation(card.suit)) {
            out.push(Action::ToFoundation { card: id, suit: card.suit });
        }
        for (pile, dest) in state.tableau.iter().enumerate() {
            if Some(pile) != from_pile && can_move_to_tableau(card, dest) {
                out.push(Action::ToTableau { card: id, pile });
            }
        }
    }

    // === Helpers ===

    fn try_auto_foundation(&self, state: &mut GameState, id: &CardId) -> Result<(Card, Suit), MoveError> {
        let mut own_suit_err = None;
        for suit in Suit::ALL {
            match self.move_to_foundation(state, id, suit) {
                Ok(card) => return Ok((card, suit)),
                Err(err) if suit == id.suit => own_suit_err = Some(err),
                Err(_) => {}
            }
        }
        Err(own_suit_err.unwrap_or(MoveError::CardNotFound(*id)))
    }

    fn locate_face_up(state: &GameState, id: &CardId) -> Result<CardLocation, MoveError> {
        let found = find_card_by_id(state, id).ok_or(MoveError::CardNotFound(*id))?;
        if !found.card.face_up {
            return Err(MoveError::FaceDown(*id));
        }
        Ok(found)
    }

    /// Resolve the block to lift for a located card.
    ///
    /// `single` restricts tableau sources to their last card. The block
    /// must be entirely face-up.
    fn source_of(state: &GameState, found: &CardLocation, single: bool) -> Result<Source, MoveError> {
        let id = found.card.id();
        match found.location {
            Location::Foundation(_) => Err(MoveError::FromFoundation(id)),
            Location::Waste if !found.is_top(state) => Err(MoveError::NotExposed(id)),
            Location::Waste => Ok(Source::WasteTop),
            Location::Tableau(pile) => {
                if single && !found.is_top(state) {
                    return Err(MoveError::NotExposed(id));
                }
                let cards = &state.tableau[pile];
                if let Some(hidden) = cards.iter().skip(found.card_index).find(|c| !c.face_up) {
                    return Err(MoveError::FaceDown(hidden.id()));
                }
                Ok(Source::Tableau { pile, index: found.card_index })
            }
        }
    }

    /// Remove and return the block named by `source`.
    fn lift(state: &mut GameState, source: Source) -> Pile {
        match source {
            Source::WasteTop => state.waste.pop_back().into_iter().collect(),
            Source::Tableau { pile, index } => state.tableau[pile].split_off(index),
        }
    }

    fn refresh_win(state: &mut GameState) {
        if !state.game_won && check_win_condition(state) {
            state.game_won = true;
            info!(moves = state.moves, score = state.score, "game won");
        }
    }
}
