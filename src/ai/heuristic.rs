use crate::game::{Board, LineFamily, Player, Slot};

/// Score awarded for a window holding a complete run.
const RUN_WEIGHT: f64 = 1000.0;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

/// Scores every window of `win_length` consecutive cells along rows,
/// columns and both diagonal directions.
///
/// A window the opponent has not touched is worth `weight(own)` to the
/// player; a window the player has not touched costs `weight(opp)`. Windows
/// reaching off the board are ignored. The result is antisymmetric:
/// `evaluate(b, p) == -evaluate(b, p.other())`.
pub struct WindowHeuristic;

impl WindowHeuristic {
    /// 0 for an empty window, 4^(k-1) for k tokens, a fixed bonus for a full run.
    /// With a run length of four this is `[0, 1, 4, 16, 1000]`.
    pub fn weight(count: usize, win_length: usize) -> f64 {
        if count == 0 {
            0.0
        } else if count >= win_length {
            RUN_WEIGHT
        } else {
            4f64.powi(count as i32 - 1)
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        let own_slot = Slot::Cell(player.to_cell());
        let opp_slot = Slot::Cell(player.other().to_cell());
        let len = board.win_length();
        let mut reward = 0.0;
        let mut penalty = 0.0;

        for family in LineFamily::ALL {
            let slots = board.line_slots(family);
            for window in slots.windows(len) {
                if window.contains(&Slot::Sentinel) {
                    continue;
                }
                let own = window.iter().filter(|&&s| s == own_slot).count();
                let opp = window.iter().filter(|&&s| s == opp_slot).count();
                if opp == 0 {
                    reward += Self::weight(own, len);
                }
                if own == 0 {
                    penalty += Self::weight(opp, len);
                }
            }
        }

        reward - penalty
    }
}
