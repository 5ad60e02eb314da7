//! Engine module: the N x N board, its slide/merge algorithm and tile spawns.
//!
//! - `GameBoard` owns the grid of tile exponents and the RNG used for spawns.
//! - `Move` is the direction parameter; `Axis` groups directions by the lines they slide.
//! - The line traversal and merge internals live in `ops`.

mod ops;
pub mod state;

pub use ops::tile_value;
pub use state::{Axis, GameBoard, Move};
