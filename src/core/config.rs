//! Rule and session configuration.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Klondike configuration parameters.
///
/// Deserializes with any missing field set to its default, so an empty
/// JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KlondikeConfig {
    /// Score awarded per card moved onto a foundation (default: 10).
    pub foundation_points: u32,

    /// Does recycling the waste into the stock count as a move?
    /// Off by default: a recycle is a free reset.
    pub recycle_counts_as_move: bool,

    /// Seed for dealing. `None` seeds from process entropy.
    pub seed: Option<u64>,
}

impl Default for KlondikeConfig {
    fn default() -> Self {
        Self {
            foundation_points: 10,
            recycle_counts_as_move: false,
            seed: None,
        }
    }
}

impl KlondikeConfig {
    /// Use a fixed seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the score per foundation card.
    #[must_use]
    pub fn with_foundation_points(mut self, points: u32) -> Self {
        self.foundation_points = points;
        self
    }

    /// Count stock recycles as moves.
    #[must_use]
    pub fn with_recycle_counted(mut self, counted: bool) -> Self {
        self.recycle_counts_as_move = counted;
        self
    }

    /// Build the RNG this configuration describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
