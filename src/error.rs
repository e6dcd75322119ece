use std::path::PathBuf;

use crate::game::Player;

/// Errors raised while building or addressing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("win length must be positive")]
    InvalidWinLength,

    #[error("invalid position ({row}, {col}) on a {rows}x{cols} board")]
    InvalidPosition {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Errors raised when a move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur while a match is being played.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("{agent} ({player}) selected illegal column {column} (legal: {legal:?})")]
    IllegalMove {
        agent: String,
        player: Player,
        column: usize,
        legal: Vec<usize>,
    },

    #[error("{agent} ({player}) gave up on a board that still has legal moves")]
    NoMove { agent: String, player: Player },

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid board configuration: {0}")]
    Board(#[from] BoardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidPosition {
            row: 6,
            col: 0,
            rows: 6,
            cols: 7,
        };
        assert_eq!(err.to_string(), "invalid position (6, 0) on a 6x7 board");
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::ColumnFull { column: 3 };
        assert_eq!(err.to_string(), "column 3 is full");
    }

    #[test]
    fn test_match_error_display() {
        let err = MatchError::IllegalMove {
            agent: "Random".to_string(),
            player: Player::Player2,
            column: 5,
            legal: vec![0, 1, 2],
        };
        assert_eq!(
            err.to_string(),
            "Random (Player 2) selected illegal column 5 (legal: [0, 1, 2])"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.games must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.games must be > 0"
        );
    }

    #[test]
    fn test_config_error_from_board_error() {
        let err: ConfigError = BoardError::InvalidWinLength.into();
        assert_eq!(
            err.to_string(),
            "invalid board configuration: win length must be positive"
        );
    }
}
