use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use game_2048::config::GameConfig;
use game_2048::engine::GameBoard;
use game_2048::policy::{run_game, GameSummary, PolicyKind};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "selfplay",
    version,
    about = "Play many seeded 2048 games in parallel and report stats"
)]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 100)]
    games: u64,
    /// TOML config file (size, win_exponent, four_probability, start_tiles)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Board size, overriding the config file
    #[arg(long)]
    size: Option<usize>,
    /// Seed of the first game; game i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Move policy: greedy or random
    #[arg(long, default_value = "greedy")]
    policy: PolicyKind,
    /// Per-game move cap
    #[arg(long)]
    max_moves: Option<u64>,
    /// Worker threads (defaults to rayon's choice)
    #[arg(long)]
    threads: Option<usize>,
    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut config = match &args.config {
        Some(path) => GameConfig::from_toml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    config.validate()?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring rayon thread pool")?;
    }

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(args.games)
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} games ({eta})",
        )
        .context("progress template")?
        .progress_chars("=>-"),
    );

    let summaries: Vec<GameSummary> = (0..args.games)
        .into_par_iter()
        .map(|i| -> Result<GameSummary> {
            let seed = args.seed.wrapping_add(i);
            let mut board = GameBoard::seeded(config.clone(), seed)?;
            let mut policy = args.policy.build(seed);
            let summary = run_game(&mut board, policy.as_mut(), args.max_moves, |_, _| {});
            pb.inc(1);
            Ok(summary)
        })
        .collect::<Result<Vec<_>>>()?;
    pb.finish_and_clear();

    let stats = Stats::from_summaries(&summaries);
    info!("played {} games on a {}x{} board", stats.games, config.size, config.size);
    println!(
        "games: {} | wins: {} ({:.1}%) | mean score: {:.1} | best tile: {} | mean moves: {:.1}",
        stats.games,
        stats.wins,
        stats.win_rate() * 100.0,
        stats.mean_score,
        stats.best_tile,
        stats.mean_moves
    );
    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct Stats {
    games: usize,
    wins: usize,
    mean_score: f64,
    mean_moves: f64,
    best_tile: u64,
}

impl Stats {
    fn from_summaries(summaries: &[GameSummary]) -> Self {
        if summaries.is_empty() {
            return Stats::default();
        }
        let n = summaries.len() as f64;
        Stats {
            games: summaries.len(),
            wins: summaries.iter().filter(|s| s.won).count(),
            mean_score: summaries.iter().map(|s| s.score as f64).sum::<f64>() / n,
            mean_moves: summaries.iter().map(|s| s.moves as f64).sum::<f64>() / n,
            best_tile: summaries.iter().map(|s| s.highest_tile).max().unwrap_or(0),
        }
    }

    fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_aggregate_summaries() {
        let summaries = [
            GameSummary { moves: 10, score: 100, highest_tile: 32, won: false, game_over: true },
            GameSummary { moves: 30, score: 300, highest_tile: 2048, won: true, game_over: false },
        ];
        let stats = Stats::from_summaries(&summaries);
        assert_eq!(stats.games, 2);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.best_tile, 2048);
        assert!((stats.mean_score - 200.0).abs() < 1e-9);
        assert!((stats.mean_moves - 20.0).abs() < 1e-9);
        assert!((stats.win_rate() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn stats_of_nothing() {
        let stats = Stats::from_summaries(&[]);
        assert_eq!(stats, Stats::default());
        assert_eq!(stats.win_rate(), 0.0);
    }
}
