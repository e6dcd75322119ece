//! Depth-limited adversarial search agents.
//!
//! All three agents score leaves with a [`Heuristic`] from the point of view
//! of the player who asked for a move, expand children in ascending column
//! order, and keep the leftmost column among equally scored moves.

use tracing::debug;

use crate::game::{Board, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Every board reachable by one move of `player`, paired with the column
/// that was played. Columns are in ascending order.
pub fn child_boards(board: &Board, player: Player) -> Vec<(usize, Board)> {
    board
        .placeable_columns()
        .into_iter()
        .filter_map(|col| {
            let mut child = board.clone();
            child.place(player, col).ok().map(|_| (col, child))
        })
        .collect()
}

/// Pick the best-scoring root move. `value` scores a child board.
fn best_root_move(
    board: &Board,
    player: Player,
    mut value: impl FnMut(&Board) -> f64,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (col, child) in child_boards(board, player) {
        let score = value(&child);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((col, score));
        }
    }
    best
}

/// Plain minimax with a depth limit.
pub struct MinimaxAgent {
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent { heuristic }
    }

    fn value(&self, board: &Board, to_move: Player, me: Player, depth: usize) -> f64 {
        if depth == 0 || board.is_terminal() {
            return self.heuristic.evaluate(board, me);
        }

        let scores = child_boards(board, to_move)
            .into_iter()
            .map(|(_, child)| self.value(&child, to_move.other(), me, depth - 1));

        if to_move == me {
            scores.fold(f64::NEG_INFINITY, f64::max)
        } else {
            scores.fold(f64::INFINITY, f64::min)
        }
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, board: &Board, player: Player, depth: usize) -> Option<usize> {
        let depth = depth.max(1);
        let (col, score) = best_root_move(board, player, |child| {
            self.value(child, player.other(), player, depth - 1)
        })?;
        debug!(agent = self.name(), %player, depth, col, score, "search finished");
        Some(col)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Minimax with alpha-beta pruning. Chooses the same columns as
/// [`MinimaxAgent`] while visiting fewer nodes.
pub struct AlphaBetaAgent {
    heuristic: Box<dyn Heuristic>,
}

impl AlphaBetaAgent {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        AlphaBetaAgent { heuristic }
    }

    fn value(
        &self,
        board: &Board,
        to_move: Player,
        me: Player,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        if depth == 0 || board.is_terminal() {
            return self.heuristic.evaluate(board, me);
        }

        let maximizing = to_move == me;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for (_, child) in child_boards(board, to_move) {
            let score = self.value(&child, to_move.other(), me, depth - 1, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

impl Default for AlphaBetaAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for AlphaBetaAgent {
    fn select_column(&mut self, board: &Board, player: Player, depth: usize) -> Option<usize> {
        let depth = depth.max(1);
        let mut alpha = f64::NEG_INFINITY;
        let (col, score) = best_root_move(board, player, |child| {
            let score = self.value(
                child,
                player.other(),
                player,
                depth - 1,
                alpha,
                f64::INFINITY,
            );
            alpha = alpha.max(score);
            score
        })?;
        debug!(agent = self.name(), %player, depth, col, score, "search finished");
        Some(col)
    }

    fn name(&self) -> &str {
        "Alpha-beta pruning"
    }
}

/// Expectimax: the opponent is modelled as choosing uniformly at random
/// among its placeable columns.
pub struct ExpectimaxAgent {
    heuristic: Box<dyn Heuristic>,
}

impl ExpectimaxAgent {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        ExpectimaxAgent { heuristic }
    }

    fn value(&self, board: &Board, to_move: Player, me: Player, depth: usize) -> f64 {
        if depth == 0 || board.is_terminal() {
            return self.heuristic.evaluate(board, me);
        }

        let children = child_boards(board, to_move);
        let scores = children
            .iter()
            .map(|(_, child)| self.value(child, to_move.other(), me, depth - 1));

        if to_move == me {
            scores.fold(f64::NEG_INFINITY, f64::max)
        } else {
            scores.sum::<f64>() / children.len() as f64
        }
    }
}

impl Default for ExpectimaxAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for ExpectimaxAgent {
    fn select_column(&mut self, board: &Board, player: Player, depth: usize) -> Option<usize> {
        let depth = depth.max(1);
        let (col, score) = best_root_move(board, player, |child| {
            self.value(child, player.other(), player, depth - 1)
        })?;
        debug!(agent = self.name(), %player, depth, col, score, "search finished");
        Some(col)
    }

    fn name(&self) -> &str {
        "Expectimax"
    }
}
