use tracing::{debug, info};

use crate::ai::Agent;
use crate::config::AppConfig;
use crate::error::MatchError;
use crate::game::{Board, GameOutcome, GameState};

use super::stats::SeriesStats;

/// A finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    /// Columns played, in order, starting with Player 1.
    pub moves: Vec<usize>,
    pub board: Board,
}

/// Two agents taking turns on one game state. Player 1 always moves first.
pub struct Match {
    state: GameState,
    agents: [Box<dyn Agent>; 2],
    depth: usize,
    moves: Vec<usize>,
}

impl Match {
    /// `agents[0]` plays Player 1, `agents[1]` plays Player 2.
    pub fn new(state: GameState, agents: [Box<dyn Agent>; 2], depth: usize) -> Self {
        Match {
            state,
            agents,
            depth,
            moves: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Ask the side to move for a column and apply it. Returns the outcome
    /// once the game is over; a finished game is left untouched.
    pub fn play_turn(&mut self) -> Result<Option<GameOutcome>, MatchError> {
        if let Some(outcome) = self.state.outcome() {
            return Ok(Some(outcome));
        }

        let player = self.state.current_player();
        let agent = &mut self.agents[player.index()];
        let column = agent
            .select_column(self.state.board(), player, self.depth)
            .ok_or_else(|| MatchError::NoMove {
                agent: agent.name().to_string(),
                player,
            })?;

        let legal = self.state.legal_actions();
        if !legal.contains(&column) {
            return Err(MatchError::IllegalMove {
                agent: agent.name().to_string(),
                player,
                column,
                legal,
            });
        }

        self.state.apply_move_mut(column)?;
        self.moves.push(column);
        debug!(agent = agent.name(), %player, column, move_number = self.moves.len(), "move played");

        Ok(self.state.outcome())
    }

    /// Play turns until the game ends.
    pub fn play_to_end(mut self) -> Result<GameRecord, MatchError> {
        loop {
            if let Some(outcome) = self.play_turn()? {
                return Ok(GameRecord {
                    outcome,
                    moves: self.moves,
                    board: self.state.board().clone(),
                });
            }
        }
    }
}

/// Play `config.game.games` games between the configured agents, handing
/// each finished game to `observer`.
///
/// With a seed set, game `i` seeds Player 1's agent with `seed + 2i` and
/// Player 2's with `seed + 2i + 1`, so a series replays exactly.
pub fn play_series(
    config: &AppConfig,
    mut observer: impl FnMut(usize, &GameRecord),
) -> Result<SeriesStats, MatchError> {
    let mut stats = SeriesStats::new();

    for game in 0..config.game.games {
        let seeds = config.game.seed.map(|seed| {
            let base = seed.wrapping_add(2 * game as u64);
            (base, base.wrapping_add(1))
        });
        let agents = [
            config.game.player1.build(seeds.map(|s| s.0)),
            config.game.player2.build(seeds.map(|s| s.1)),
        ];
        let state = GameState::new(config.board.build()?);
        let record = Match::new(state, agents, config.game.depth).play_to_end()?;

        info!(game, outcome = ?record.outcome, moves = record.moves.len(), "game finished");
        stats.record(&record);
        observer(game, &record);
    }

    info!(%stats, "series finished");
    Ok(stats)
}
