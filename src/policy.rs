//! Move-selection policies used by the driver binaries.
//!
//! A policy looks at a board and returns the direction to play, or `None`
//! when no direction changes the board. `run_game` plays a full game with
//! any policy and summarizes the result.
//!
//! ```
//! use game_2048::config::GameConfig;
//! use game_2048::engine::GameBoard;
//! use game_2048::policy::{run_game, Greedy};
//!
//! let mut board = GameBoard::seeded(GameConfig::default(), 123).unwrap();
//! let summary = run_game(&mut board, &mut Greedy, Some(8), |_, _| {});
//! assert!(summary.moves > 0 && summary.moves <= 8);
//! ```

use std::str::FromStr;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::engine::{tile_value, GameBoard, Move};

pub trait Policy<R> {
    fn next_move(&mut self, board: &GameBoard<R>) -> Option<Move>;
}

/// Picks the legal move that leaves the most empty cells.
///
/// Ties go to the earlier entry of `Greedy::PREFERENCE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Greedy {
    pub const PREFERENCE: [Move; 4] = [Move::Left, Move::Up, Move::Right, Move::Down];
}

impl<R> Policy<R> for Greedy {
    fn next_move(&mut self, board: &GameBoard<R>) -> Option<Move> {
        let mut best: Option<(Move, usize)> = None;
        for dir in Self::PREFERENCE {
            if !board.can_move(dir) {
                continue;
            }
            let empty = board.preview(dir).iter().filter(|&&c| c == 0).count();
            if best.map_or(true, |(_, e)| empty > e) {
                best = Some((dir, empty));
            }
        }
        best.map(|(dir, _)| dir)
    }
}

/// Uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomPolicy<G> {
    rng: G,
}

impl<G: Rng> RandomPolicy<G> {
    pub fn new(rng: G) -> Self {
        RandomPolicy { rng }
    }
}

impl<R, G: Rng> Policy<R> for RandomPolicy<G> {
    fn next_move(&mut self, board: &GameBoard<R>) -> Option<Move> {
        let legal: Vec<Move> = Move::ALL.into_iter().filter(|&dir| board.can_move(dir)).collect();
        legal.choose(&mut self.rng).copied()
    }
}

/// Policy choice for the command-line drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Greedy,
    Random,
}

impl PolicyKind {
    /// Instantiate the policy; `seed` only matters for `Random`.
    pub fn build(self, seed: u64) -> Box<dyn Policy<StdRng> + Send> {
        match self {
            PolicyKind::Greedy => Box::new(Greedy),
            PolicyKind::Random => Box::new(RandomPolicy::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(PolicyKind::Greedy),
            "random" => Ok(PolicyKind::Random),
            other => Err(format!("unknown policy '{other}' (expected greedy or random)")),
        }
    }
}

/// Outcome of one played game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameSummary {
    pub moves: u64,
    pub score: u64,
    /// Displayed value of the best tile (e.g. 2048).
    pub highest_tile: u64,
    pub won: bool,
    pub game_over: bool,
}

/// Seed the opening tiles, then play `policy` until the game is over, the
/// policy gives up, or `max_moves` moves were made.
///
/// `on_move` sees the board after every applied move (including its spawn).
pub fn run_game<R, F>(
    board: &mut GameBoard<R>,
    policy: &mut (impl Policy<R> + ?Sized),
    max_moves: Option<u64>,
    mut on_move: F,
) -> GameSummary
where
    R: Rng,
    F: FnMut(&GameBoard<R>, Move),
{
    board.start();
    let mut moves = 0u64;
    while !board.is_game_over() {
        if max_moves.is_some_and(|limit| moves >= limit) {
            break;
        }
        let Some(dir) = policy.next_move(board) else {
            break;
        };
        if !board.move_cells(dir) {
            debug!("policy chose no-op move {:?}; stopping", dir);
            break;
        }
        moves += 1;
        on_move(board, dir);
    }
    GameSummary {
        moves,
        score: board.score(),
        highest_tile: tile_value(board.highest_exponent()),
        won: board.is_game_win(),
        game_over: board.is_game_over(),
    }
}
