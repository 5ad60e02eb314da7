//! game-2048: a variable-size 2048 board engine
//!
//! This crate provides:
//! - `GameBoard`, an N x N grid of tile exponents with `generate`, `move_cells`,
//!   `is_game_win`, `is_game_over` and a zero-copy `cells` view (`engine` module)
//! - A typed, TOML-loadable `GameConfig` (`config` module)
//! - Simple move policies and a game loop for the driver binaries (`policy` module)
//! - With the `wasm` feature, a `wasm-bindgen` wrapper for browser front-ends (`wasm` module)
//!
//! Tiles are stored as exponents: `0` is empty and `k` is a tile worth `2^k`.
//!
//! Quick start:
//! ```
//! use game_2048::config::GameConfig;
//! use game_2048::engine::{GameBoard, Move};
//!
//! // Deterministic board with a seeded RNG
//! let mut board = GameBoard::seeded(GameConfig::with_size(4), 42).unwrap();
//! board.generate();
//! assert_eq!(board.cells().iter().filter(|&&c| c != 0).count(), 1);
//!
//! for dir in Move::ALL {
//!     board.move_cells(dir);
//! }
//! assert!(!board.is_game_over());
//! assert!(!board.is_game_win());
//! ```
//!
//! Invalid sizes are rejected at construction; nothing else can fail:
//! ```
//! use game_2048::engine::GameBoard;
//! use game_2048::error::BoardError;
//! assert!(matches!(GameBoard::new(1), Err(BoardError::InvalidSize { .. })));
//! ```
//!
pub mod config;
pub mod engine;
pub mod error;
pub mod policy;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::GameConfig;
pub use engine::{GameBoard, Move};
pub use error::{BoardError, ConfigError};
