use std::fmt;

use crate::game::{GameOutcome, Player};

use super::game::GameRecord;

/// Win/draw tallies over a series of finished games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesStats {
    wins: [usize; 2],
    draws: usize,
    total_moves: usize,
}

impl SeriesStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &GameRecord) {
        match record.outcome {
            GameOutcome::Winner(player) => self.wins[player.index()] += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        self.total_moves += record.moves.len();
    }

    pub fn games(&self) -> usize {
        self.wins[0] + self.wins[1] + self.draws
    }

    pub fn wins(&self, player: Player) -> usize {
        self.wins[player.index()]
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn win_rate(&self, player: Player) -> f32 {
        self.rate(self.wins(player))
    }

    pub fn draw_rate(&self) -> f32 {
        self.rate(self.draws)
    }

    /// Average number of moves per game.
    pub fn average_game_length(&self) -> f32 {
        self.rate(self.total_moves)
    }

    fn rate(&self, count: usize) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        count as f32 / games as f32
    }
}

impl fmt::Display for SeriesStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: {} {} ({:.0}%), {} {} ({:.0}%), {} draws ({:.0}%), avg length {:.1}",
            self.games(),
            Player::Player1,
            self.wins(Player::Player1),
            self.win_rate(Player::Player1) * 100.0,
            Player::Player2,
            self.wins(Player::Player2),
            self.win_rate(Player::Player2) * 100.0,
            self.draws,
            self.draw_rate() * 100.0,
            self.average_game_length(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;

    fn record(outcome: GameOutcome, length: usize) -> GameRecord {
        GameRecord {
            outcome,
            moves: vec![0; length],
            board: Board::standard(),
        }
    }

    #[test]
    fn empty_stats() {
        let stats = SeriesStats::new();
        assert_eq!(stats.games(), 0);
        assert_eq!(stats.win_rate(Player::Player1), 0.0);
        assert_eq!(stats.average_game_length(), 0.0);
    }

    #[test]
    fn tallies_add_up() {
        let mut stats = SeriesStats::new();
        stats.record(&record(GameOutcome::Winner(Player::Player1), 7));
        stats.record(&record(GameOutcome::Winner(Player::Player1), 9));
        stats.record(&record(GameOutcome::Winner(Player::Player2), 12));
        stats.record(&record(GameOutcome::Draw, 42));

        assert_eq!(stats.games(), 4);
        assert_eq!(stats.wins(Player::Player1), 2);
        assert_eq!(stats.wins(Player::Player2), 1);
        assert_eq!(stats.draws(), 1);
        assert!((stats.win_rate(Player::Player1) - 0.5).abs() < 1e-6);
        assert!((stats.draw_rate() - 0.25).abs() < 1e-6);
        assert!((stats.average_game_length() - 17.5).abs() < 1e-6);
    }

    #[test]
    fn display_summary() {
        let mut stats = SeriesStats::new();
        stats.record(&record(GameOutcome::Winner(Player::Player2), 10));
        assert_eq!(
            stats.to_string(),
            "1 games: Player 1 0 (0%), Player 2 1 (100%), 0 draws (0%), avg length 10.0"
        );
    }
}
