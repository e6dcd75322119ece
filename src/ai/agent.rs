use crate::game::{Board, Player};

use super::random::RandomAgent;
use super::search::{AlphaBetaAgent, ExpectimaxAgent, MinimaxAgent};

/// Universal interface for all move-selecting agents.
pub trait Agent: Send {
    /// Choose a column for `player` on `board`, looking `depth` plies ahead
    /// where the strategy searches at all.
    ///
    /// Returns `None` when no column can take a token. Agents explore
    /// hypothetical moves on clones and never touch the board they are given.
    fn select_column(&mut self, board: &Board, player: Player, depth: usize) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// The strategies an agent can be built from, selectable by name from the
/// command line and from configuration files.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    Random,
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl AgentKind {
    /// Build a fresh agent. `seed` only affects strategies that use randomness.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
            AgentKind::Minimax => Box::new(MinimaxAgent::new()),
            AgentKind::AlphaBeta => Box::new(AlphaBetaAgent::new()),
            AgentKind::Expectimax => Box::new(ExpectimaxAgent::new()),
        }
    }

    /// Whether the strategy looks ahead and therefore needs a search depth.
    pub fn is_search(self) -> bool {
        !matches!(self, AgentKind::Random)
    }
}
