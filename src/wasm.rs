//! `wasm-bindgen` surface for browser front-ends.
//!
//! JavaScript sees a `GameBoard` class whose `cells` getter is a pointer into
//! the module's linear memory; the renderer wraps it in a `Uint8Array` of
//! `size * size` bytes. That view is only valid until the next call to
//! `generate`, `start` or `move_cells`.

use wasm_bindgen::prelude::*;

use crate::engine::{GameBoard, Move};

#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl From<Direction> for Move {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Move::Up,
            Direction::Down => Move::Down,
            Direction::Left => Move::Left,
            Direction::Right => Move::Right,
        }
    }
}

#[wasm_bindgen(js_name = GameBoard)]
pub struct WasmBoard {
    inner: GameBoard,
}

#[wasm_bindgen(js_class = GameBoard)]
impl WasmBoard {
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Result<WasmBoard, JsError> {
        let inner = GameBoard::new(size).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmBoard { inner })
    }

    pub fn generate(&mut self) {
        self.inner.generate();
    }

    pub fn start(&mut self) {
        self.inner.start();
    }

    pub fn move_cells(&mut self, dir: Direction) -> bool {
        self.inner.move_cells(dir.into())
    }

    #[wasm_bindgen(getter)]
    pub fn cells(&self) -> *const u8 {
        self.inner.cells().as_ptr()
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    #[wasm_bindgen(getter)]
    pub fn is_game_win(&self) -> bool {
        self.inner.is_game_win()
    }

    #[wasm_bindgen(getter)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Sum of tile values; an `f64` so JavaScript gets a plain number.
    #[wasm_bindgen(getter)]
    pub fn score(&self) -> f64 {
        self.inner.score() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn wasm_board(size: usize, cells: Vec<u8>) -> WasmBoard {
        let cfg = GameConfig::with_size(size);
        let inner = GameBoard::from_cells(cfg, cells, StdRng::seed_from_u64(3)).unwrap();
        WasmBoard { inner }
    }

    #[test]
    fn direction_maps_onto_move() {
        assert_eq!(Move::from(Direction::Up), Move::Up);
        assert_eq!(Move::from(Direction::Down), Move::Down);
        assert_eq!(Move::from(Direction::Left), Move::Left);
        assert_eq!(Move::from(Direction::Right), Move::Right);
        assert_eq!(Direction::Right as u8, u8::from(Move::Right));
    }

    #[test]
    fn cells_pointer_views_the_whole_grid() {
        let mut board = WasmBoard { inner: GameBoard::seeded(GameConfig::default(), 3).unwrap() };
        board.start();
        let ptr = board.cells();
        assert_eq!(ptr, board.inner.cells().as_ptr());
        let n = board.size() * board.size();
        // SAFETY: `ptr` points at the board's `size * size` cell buffer, which is
        // not mutated while `view` is alive.
        let view = unsafe { std::slice::from_raw_parts(ptr, n) };
        assert_eq!(view, board.inner.cells());
        assert_eq!(view.iter().filter(|&&c| c != 0).count(), 2);
    }

    #[test]
    fn getters_follow_the_engine() {
        let mut board = wasm_board(2, vec![1, 1, 0, 0]);
        assert_eq!(board.size(), 2);
        assert_eq!(board.score(), 4.0);
        assert!(board.move_cells(Direction::Left));
        assert_eq!(board.score(), board.inner.score() as f64);
        assert!(!board.is_game_over());

        let mut locked = wasm_board(2, vec![1, 2, 2, 1]);
        assert!(locked.is_game_over());
        assert!(!locked.move_cells(Direction::Up));
        assert!(!locked.is_game_win());

        let won = wasm_board(2, vec![11, 0, 0, 0]);
        assert!(won.is_game_win());
    }
}
