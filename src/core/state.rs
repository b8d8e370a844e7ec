//! Game state: the stock, waste, foundations, tableau and counters.
//!
//! ## GameState
//!
//! The single root aggregate of a game:
//! - Stock (`deck`), draw end = last element
//! - Waste, top = last element, always face-up
//! - Four foundations, one per suit, ascending from Ace
//! - Seven tableau piles
//! - Move count, score and the terminal won flag
//!
//! Piles are `im` persistent vectors, so cloning a state for a functional
//! transition is O(1) and the clone shares structure with the original.
//!
//! Fields are only writable inside the crate. External callers read through
//! accessors and change state through the rules engine.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::StateError;
use crate::cards::{Card, Suit, DECK_SIZE};

/// An ordered pile of cards; the last element is the top.
pub type Pile = Vector<Card>;

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 7;

/// Cards in a complete foundation (Ace through King).
pub const FOUNDATION_SIZE: usize = 13;

/// The four foundation piles, indexed by suit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Foundations([Pile; 4]);

impl Foundations {
    /// Four empty foundations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over `(suit, pile)` in canonical suit order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, &Pile)> {
        Suit::ALL.into_iter().zip(self.0.iter())
    }

    /// Total cards across all foundations.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.0.iter().map(Vector::len).sum()
    }

    /// Does every foundation hold a full suit?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|pile| pile.len() == FOUNDATION_SIZE)
    }
}

impl Index<Suit> for Foundations {
    type Output = Pile;

    fn index(&self, suit: Suit) -> &Pile {
        &self.0[suit.index()]
    }
}

impl IndexMut<Suit> for Foundations {
    fn index_mut(&mut self, suit: Suit) -> &mut Pile {
        &mut self.0[suit.index()]
    }
}

/// Complete Klondike game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) deck: Pile,
    pub(crate) waste: Pile,
    pub(crate) foundation: Foundations,
    pub(crate) tableau: [Pile; TABLEAU_PILES],
    pub(crate) moves: u32,
    pub(crate) score: u32,
    pub(crate) game_won: bool,
}

impl GameState {
    /// State with all piles empty and counters at zero.
    ///
    /// Only meaningful as a starting point for dealing.
    pub(crate) fn empty() -> Self {
        Self {
            deck: Vector::new(),
            waste: Vector::new(),
            foundation: Foundations::new(),
            tableau: Default::default(),
            moves: 0,
            score: 0,
            game_won: false,
        }
    }

    /// Build a state from explicit piles, with counters at zero.
    ///
    /// Foundation cards are sorted into their suit's pile in the order
    /// given. The layout must hold each of the 52 cards exactly once,
    /// have 7 tableau piles, keep waste and foundation cards face-up and
    /// keep every foundation an ascending run from Ace.
    pub fn from_parts(
        deck: Vec<Card>,
        waste: Vec<Card>,
        foundation: Vec<Card>,
        tableau: Vec<Vec<Card>>,
    ) -> Result<Self, StateError> {
        let piles: [Pile; TABLEAU_PILES] = tableau
            .into_iter()
            .map(Pile::from)
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|piles: Vec<Pile>| StateError::TableauPileCount(piles.len()))?;

        let mut foundations = Foundations::new();
        for card in foundation {
            foundations[card.suit].push_back(card);
        }

        let mut state = Self {
            deck: Pile::from(deck),
            waste: Pile::from(waste),
            foundation: foundations,
            tableau: piles,
            ..Self::empty()
        };
        state.validate()?;
        state.game_won = state.foundation.is_complete();
        Ok(state)
    }

    /// Check the structural invariants: a 52-card partition, face-up waste
    /// and foundations, and foundations that run upward from Ace in one suit.
    pub fn validate(&self) -> Result<(), StateError> {
        if let Some(card) = self.waste.iter().find(|c| !c.face_up) {
            return Err(StateError::FaceDownOnWaste(card.id()));
        }

        for (suit, pile) in self.foundation.iter() {
            for (i, card) in pile.iter().enumerate() {
                if !card.face_up {
                    return Err(StateError::FaceDownOnFoundation(card.id()));
                }
                if card.suit != suit || usize::from(card.rank_index()) != i {
                    return Err(StateError::FoundationOrder(suit));
                }
            }
        }

        let mut seen = FxHashSet::default();
        for card in self.all_cards() {
            if !seen.insert(card.id()) {
                return Err(StateError::DuplicateCard(card.id()));
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(StateError::CardCount(seen.len()));
        }

        Ok(())
    }

    /// Every card in every pile: stock, waste, tableau, then foundations.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .iter()
            .chain(self.waste.iter())
            .chain(self.tableau.iter().flat_map(|pile| pile.iter()))
            .chain(self.foundation.0.iter().flat_map(|pile| pile.iter()))
    }

    // === Piles ===

    /// The stock. The last card is drawn next.
    #[must_use]
    pub fn deck(&self) -> &Pile {
        &self.deck
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    #[must_use]
    pub fn foundations(&self) -> &Foundations {
        &self.foundation
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Pile {
        &self.foundation[suit]
    }

    #[must_use]
    pub fn tableau(&self) -> &[Pile; TABLEAU_PILES] {
        &self.tableau
    }

    /// A single tableau pile, or `None` past the seventh.
    #[must_use]
    pub fn tableau_pile(&self, index: usize) -> Option<&Pile> {
        self.tableau.get(index)
    }

    // === Counters ===

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn game_won(&self) -> bool {
        self.game_won
    }
}
