use std::fmt;

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// Both players in evaluation order.
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Player1 => Cell::Player1,
            Player::Player2 => Cell::Player2,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Player1 => "Player 1",
            Player::Player2 => "Player 2",
        }
    }

    /// Slot index (0 for Player1, 1 for Player2).
    pub fn index(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
