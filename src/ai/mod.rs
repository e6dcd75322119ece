mod agent;
mod heuristic;
mod random;
mod search;

pub use agent::{Agent, AgentKind};
pub use heuristic::{Heuristic, WindowHeuristic};
pub use random::RandomAgent;
pub use search::{child_boards, AlphaBetaAgent, ExpectimaxAgent, MinimaxAgent};
