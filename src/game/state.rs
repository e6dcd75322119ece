use crate::error::MoveError;

use super::{Board, GameOutcome, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Start a game on `board` with Player 1 to move.
    pub fn new(board: Board) -> Self {
        let outcome = board.outcome();
        GameState {
            board,
            current_player: Player::Player1,
            outcome,
        }
    }

    /// Create initial game state on the standard board
    pub fn initial() -> Self {
        Self::new(Board::standard())
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of tokens dropped so far.
    pub fn moves_played(&self) -> usize {
        self.board.token_count()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.placeable_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place. On error the state is unchanged.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= self.board.cols() {
            return Err(MoveError::InvalidColumn {
                column,
                cols: self.board.cols(),
            });
        }

        self.board.place(self.current_player, column)?;
        self.outcome = self.board.outcome();
        self.current_player = self.current_player.other();

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Player1);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
        assert_eq!(state.moves_played(), 0);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Player2);
        assert_eq!(new_state.board().get(5, 3), Cell::Player1);
        // The original state is untouched
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_invalid_column() {
        let state = GameState::initial();
        assert_eq!(
            state.apply_move(7),
            Err(MoveError::InvalidColumn { column: 7, cols: 7 })
        );
    }

    #[test]
    fn test_full_column_keeps_turn() {
        let mut state = GameState::initial();
        // Alternate tokens so the column fills without a vertical run
        for _ in 0..6 {
            state.apply_move_mut(0).unwrap();
        }
        let player = state.current_player();
        assert_eq!(
            state.apply_move_mut(0),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(state.current_player(), player);
        assert!(!state.legal_actions().contains(&0));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Player 1 builds the bottom row, Player 2 stacks on top
        for col in 0..4 {
            state = state.apply_move(col).unwrap();
            if col < 3 {
                state = state.apply_move(col).unwrap();
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Player1)));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(6), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        let board = Board::new(2, 2).unwrap();
        let mut state = GameState::new(board);
        for col in [0, 0, 1, 1] {
            state.apply_move_mut(col).unwrap();
        }
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }
}
