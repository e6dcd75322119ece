//! Headless match driver: two agents alternate on one game state, and a
//! series runner that tallies the results.

mod game;
mod stats;

pub use game::{play_series, GameRecord, Match};
pub use stats::SeriesStats;
