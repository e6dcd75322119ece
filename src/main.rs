use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gravity_four::ai::AgentKind;
use gravity_four::config::AppConfig;
use gravity_four::play::play_series;

/// Pit two agents against each other on a gravity-drop board.
#[derive(Parser)]
#[command(name = "gravity-four", about = "Run headless gravity-drop connection games")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gravity_four.toml")]
    config: PathBuf,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,

    /// Override board height
    #[arg(long)]
    rows: Option<usize>,

    /// Override board width
    #[arg(long)]
    cols: Option<usize>,

    /// Override the number of tokens in a row needed to win
    #[arg(long)]
    win_length: Option<usize>,

    /// Agent playing first
    #[arg(long, value_enum)]
    player1: Option<AgentKind>,

    /// Agent playing second
    #[arg(long, value_enum)]
    player2: Option<AgentKind>,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Seed for reproducible random agents
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final board of every game
    #[arg(long)]
    show_board: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(win_length) = cli.win_length {
        config.board.win_length = win_length;
    }
    if let Some(kind) = cli.player1 {
        config.game.player1 = kind;
    }
    if let Some(kind) = cli.player2 {
        config.game.player2 = kind;
    }
    if let Some(depth) = cli.depth {
        config.game.depth = depth;
    }
    if let Some(games) = cli.games {
        config.game.games = games;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    config.validate().context("invalid configuration")?;

    let stats = play_series(&config, |game, record| {
        if cli.show_board {
            println!("game {} ({:?}, {} moves):", game + 1, record.outcome, record.moves.len());
            print!("{}", record.board);
        }
    })
    .context("match aborted")?;

    println!("{stats}");
    Ok(())
}
