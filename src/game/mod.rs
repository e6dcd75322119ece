//! Core game logic: the gravity-drop board, player identities, and a turn
//! level game state with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, GameOutcome, LineFamily, Slot, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::GameState;
