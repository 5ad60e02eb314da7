use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use game_2048::config::GameConfig;
use game_2048::engine::GameBoard;
use game_2048::policy::{run_game, PolicyKind};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "game-2048", version, about = "Play one game of 2048 with a built-in policy")]
struct Args {
    /// TOML config file (size, win_exponent, four_probability, start_tiles)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Board size, overriding the config file
    #[arg(long)]
    size: Option<usize>,
    /// RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,
    /// Move policy: greedy or random
    #[arg(long, default_value = "greedy")]
    policy: PolicyKind,
    /// Stop after this many moves
    #[arg(long)]
    max_moves: Option<u64>,
    /// Only print the final summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut config = match &args.config {
        Some(path) => GameConfig::from_toml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed {}, policy {:?}", seed, args.policy);

    let mut board = GameBoard::seeded(config, seed)?;
    let mut policy = args.policy.build(seed);
    let quiet = args.quiet;
    let summary = run_game(&mut board, policy.as_mut(), args.max_moves, |b, dir| {
        if !quiet {
            println!("{:?}{}", dir, b);
        }
    });

    println!(
        "Moves made: {}, score: {}, highest tile: {}, won: {}, game over: {}",
        summary.moves, summary.score, summary.highest_tile, summary.won, summary.game_over
    );
    Ok(())
}
