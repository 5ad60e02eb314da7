use std::fmt;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::ops;
use crate::config::GameConfig;
use crate::error::BoardError;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Which lines a move slides along: rows (`Horizontal`) or columns (`Vertical`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Move {
    /// All directions, in wire-code order (0 = Up .. 3 = Right).
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Move::Up | Move::Down => Axis::Vertical,
            Move::Left | Move::Right => Axis::Horizontal,
        }
    }

    /// True when tiles slide toward the high end of their line (Right, Down).
    #[inline]
    pub fn is_reversed(self) -> bool {
        match self {
            Move::Up | Move::Left => false,
            Move::Down | Move::Right => true,
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = BoardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(BoardError::InvalidMoveCode(code))
    }
}

impl From<Move> for u8 {
    fn from(dir: Move) -> Self {
        match dir {
            Move::Up => 0,
            Move::Down => 1,
            Move::Left => 2,
            Move::Right => 3,
        }
    }
}

/// An N x N 2048 board of tile exponents.
///
/// `cells` is row-major (`cells[row * size + col]`); `0` is an empty cell and
/// `k > 0` is a tile worth `2^k`. The board owns its RNG so that tile spawns
/// are reproducible when a seeded generator is injected.
#[derive(Clone)]
pub struct GameBoard<R = StdRng> {
    size: usize,
    cells: Vec<u8>,
    config: GameConfig,
    rng: R,
}

impl GameBoard<StdRng> {
    /// Empty board of the given size with default settings and an entropy-seeded RNG.
    ///
    /// ```
    /// use game_2048::engine::GameBoard;
    /// let board = GameBoard::new(4).unwrap();
    /// assert_eq!(board.cells(), &[0; 16]);
    /// assert!(GameBoard::new(1).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::with_config(GameConfig::with_size(size))
    }

    pub fn with_config(config: GameConfig) -> Result<Self, BoardError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic board: same config and seed always spawn the same tiles.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameBoard<R> {
    /// Empty board using the provided RNG for tile spawns.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, BoardError> {
        config.validate()?;
        let size = config.size;
        info!("new {}x{} board (win exponent {})", size, size, config.win_exponent);
        Ok(GameBoard { size, cells: vec![0; size * size], config, rng })
    }

    /// Board from an existing row-major exponent buffer.
    pub fn from_cells(config: GameConfig, cells: Vec<u8>, rng: R) -> Result<Self, BoardError> {
        config.validate()?;
        let expected = config.size * config.size;
        if cells.len() != expected {
            return Err(BoardError::CellCount { expected, actual: cells.len() });
        }
        let size = config.size;
        info!(
            "{}x{} board from {} existing tiles (win exponent {})",
            size,
            size,
            cells.iter().filter(|&&c| c != 0).count(),
            config.win_exponent
        );
        Ok(GameBoard { size, cells, config, rng })
    }

    /// Place one tile on a uniformly chosen empty cell.
    ///
    /// The tile is a 2 (exponent 1) or, with probability
    /// `config.four_probability`, a 4 (exponent 2). Returns the index written,
    /// or `None` (leaving the board untouched) when no cell is empty.
    pub fn generate(&mut self) -> Option<usize> {
        let empty = ops::count_empty(&self.cells);
        if empty == 0 {
            debug!("generate on a full board ignored");
            return None;
        }
        let idx = ops::nth_empty(&self.cells, self.rng.gen_range(0..empty))?;
        let exponent = ops::random_exponent(&mut self.rng, self.config.four_probability);
        self.cells[idx] = exponent;
        debug!("spawned exponent {} at ({}, {})", exponent, idx / self.size, idx % self.size);
        Some(idx)
    }

    /// Seed the opening position with `config.start_tiles` tiles.
    pub fn start(&mut self) {
        for _ in 0..self.config.start_tiles {
            if self.generate().is_none() {
                break;
            }
        }
    }

    /// Slide and merge toward `dir`; spawn one tile if anything changed.
    ///
    /// Returns whether the grid changed. A move that changes nothing leaves
    /// the board exactly as it was and spawns nothing.
    ///
    /// ```
    /// use game_2048::config::GameConfig;
    /// use game_2048::engine::{GameBoard, Move};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let cfg = GameConfig::with_size(3);
    /// let rng = StdRng::seed_from_u64(7);
    /// let mut b = GameBoard::from_cells(cfg, vec![0, 1, 1, 0, 0, 0, 0, 0, 0], rng).unwrap();
    /// assert!(b.move_cells(Move::Left));
    /// assert_eq!(b.cells()[0], 2);
    /// assert_eq!(b.cells().iter().filter(|&&c| c != 0).count(), 2);
    /// ```
    pub fn move_cells(&mut self, dir: Move) -> bool {
        let changed = ops::shift_grid(&mut self.cells, self.size, dir);
        if changed {
            debug!("move {:?} changed the board", dir);
            self.generate();
        } else {
            debug!("move {:?} is a no-op", dir);
        }
        changed
    }
}

impl<R> GameBoard<R> {
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only row-major view of the tile exponents.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Grid after sliding toward `dir`, without spawning and without touching this board.
    pub fn preview(&self, dir: Move) -> Vec<u8> {
        let mut next = self.cells.clone();
        ops::shift_grid(&mut next, self.size, dir);
        next
    }

    /// True if moving toward `dir` would change the grid.
    pub fn can_move(&self, dir: Move) -> bool {
        ops::can_shift(&self.cells, self.size, dir)
    }

    /// Legality of each direction, in `Move::ALL` order.
    pub fn legal_moves(&self) -> [bool; 4] {
        Move::ALL.map(|dir| self.can_move(dir))
    }

    /// True once any tile has reached the configured win exponent.
    pub fn is_game_win(&self) -> bool {
        let target = self.config.win_exponent;
        self.cells.iter().any(|&c| c >= target)
    }

    /// True when the grid is full and no direction changes it.
    pub fn is_game_over(&self) -> bool {
        self.empty_count() == 0 && !Move::ALL.iter().any(|&dir| self.can_move(dir))
    }

    pub fn empty_count(&self) -> usize {
        ops::count_empty(&self.cells)
    }

    pub fn highest_exponent(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Displayed value at `idx` (e.g. 2048), 0 when empty.
    ///
    /// Panics if `idx` is out of range.
    pub fn tile_value(&self, idx: usize) -> u64 {
        ops::tile_value(self.cells[idx])
    }

    /// Sum of all displayed tile values.
    pub fn score(&self) -> u64 {
        ops::score(&self.cells)
    }
}

impl<R> fmt::Debug for GameBoard<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameBoard")
            .field("size", &self.size)
            .field("cells", &self.cells)
            .finish()
    }
}

impl<R> fmt::Display for GameBoard<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.cells.iter().map(|&c| ops::format_val(c)).collect();
        let width = labels.iter().map(String::len).max().unwrap_or(0).max(7);
        let rule = "-".repeat(self.size * (width + 1) - 1);
        writeln!(f)?;
        for (row_idx, row) in labels.chunks(self.size).enumerate() {
            if row_idx > 0 {
                writeln!(f, "{}", rule)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|l| format!("{:^width$}", l, width = width))
                .collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
