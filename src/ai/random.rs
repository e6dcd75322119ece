use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that selects uniformly at random from placeable columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for seeded matches and tests.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &Board, _player: Player, _depth: usize) -> Option<usize> {
        let columns = board.placeable_columns();
        if columns.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..columns.len());
        Some(columns[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
