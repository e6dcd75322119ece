use std::path::Path;

use crate::ai::AgentKind;
use crate::error::{BoardError, ConfigError};
use crate::game::{Board, COLS, ROWS, WIN_LENGTH};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub game: MatchConfig,
}

/// Board geometry, fixed for the lifetime of every board built from it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            cols: COLS,
            win_length: WIN_LENGTH,
        }
    }
}

impl BoardConfig {
    /// Build an empty board with these dimensions.
    pub fn build(&self) -> Result<Board, BoardError> {
        Board::with_win_length(self.rows, self.cols, self.win_length)
    }
}

/// Who plays, how deep the searchers look, and how many games to run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub player1: AgentKind,
    pub player2: AgentKind,
    pub depth: usize,
    pub games: usize,
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            player1: AgentKind::AlphaBeta,
            player2: AgentKind::Random,
            depth: 4,
            games: 1,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Zero dimensions and a zero run length are reported by the board itself
        self.board.build()?;

        if self.board.win_length > self.board.rows.max(self.board.cols) {
            return Err(ConfigError::Validation(
                "board.win_length must fit on the board".into(),
            ));
        }
        if self.game.games == 0 {
            return Err(ConfigError::Validation("game.games must be > 0".into()));
        }
        let searching = self.game.player1.is_search() || self.game.player2.is_search();
        if searching && self.game.depth == 0 {
            return Err(ConfigError::Validation(
                "game.depth must be >= 1 for search agents".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.build().unwrap(), Board::standard());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
cols = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.cols, 9);
        // Other fields should be defaults
        assert_eq!(config.board.rows, ROWS);
        assert_eq!(config.game.player1, AgentKind::AlphaBeta);
        assert_eq!(config.game.depth, 4);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Board(BoardError::InvalidDimensions { .. }))
        ));
    }

    #[test]
    fn test_validation_rejects_zero_win_length() {
        let mut config = AppConfig::default();
        config.board.win_length = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Board(BoardError::InvalidWinLength))
        ));
    }

    #[test]
    fn test_validation_rejects_oversized_win_length() {
        let mut config = AppConfig::default();
        config.board.win_length = 8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.game.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_depth_only_matters_for_search() {
        let mut config = AppConfig::default();
        config.game.depth = 0;
        assert!(config.validate().is_err());

        config.game.player1 = AgentKind::Random;
        config.game.player2 = AgentKind::Random;
        config.validate().expect("random agents do not search");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
player2 = "expectimax"
games = 5
seed = 99
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.player2, AgentKind::Expectimax);
        assert_eq!(config.game.games, 5);
        assert_eq!(config.game.seed, Some(99));
        // Others are defaults
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nrows = 0\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = AppConfig::load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
