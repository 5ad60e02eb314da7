//! Typed game configuration.
//!
//! Every knob has a default matching the classic 4x4 game, so a TOML file
//! only needs the keys it changes:
//!
//! ```
//! use game_2048::config::GameConfig;
//!
//! let cfg = GameConfig::from_toml_str("size = 5\nwin_exponent = 12").unwrap();
//! assert_eq!(cfg.size, 5);
//! assert_eq!(cfg.win_exponent, 12);
//! assert_eq!(cfg.start_tiles, 2);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, ConfigError};

/// Smallest board that admits a merge.
pub const MIN_SIZE: usize = 2;
/// Largest supported board edge.
pub const MAX_SIZE: usize = 16;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Edge length N of the N x N grid.
    #[serde(default = "defaults::size")]
    pub size: usize,

    /// Exponent at which the game counts as won (11 => the 2048 tile).
    #[serde(default = "defaults::win_exponent")]
    pub win_exponent: u8,

    /// Probability that a spawned tile is a 4 (exponent 2) instead of a 2.
    #[serde(default = "defaults::four_probability")]
    pub four_probability: f64,

    /// Tiles placed by `GameBoard::start`.
    #[serde(default = "defaults::start_tiles")]
    pub start_tiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: defaults::size(),
            win_exponent: defaults::win_exponent(),
            four_probability: defaults::four_probability(),
            start_tiles: defaults::start_tiles(),
        }
    }
}

impl GameConfig {
    /// Default config with a different board size.
    pub fn with_size(size: usize) -> Self {
        Self { size, ..Self::default() }
    }

    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every field against the engine's limits.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.size < MIN_SIZE || self.size > MAX_SIZE {
            return Err(BoardError::InvalidSize { size: self.size, min: MIN_SIZE, max: MAX_SIZE });
        }
        if self.win_exponent == 0 {
            return Err(BoardError::InvalidWinExponent(self.win_exponent));
        }
        if !self.four_probability.is_finite() || !(0.0..=1.0).contains(&self.four_probability) {
            return Err(BoardError::InvalidProbability(self.four_probability));
        }
        let cells = self.size * self.size;
        if self.start_tiles > cells {
            return Err(BoardError::TooManyStartTiles { start_tiles: self.start_tiles, cells });
        }
        Ok(())
    }
}

mod defaults {
    pub fn size() -> usize {
        4
    }
    pub fn win_exponent() -> u8 {
        11
    }
    pub fn four_probability() -> f64 {
        0.1
    }
    pub fn start_tiles() -> usize {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_are_classic_game() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.size, 4);
        assert_eq!(cfg.win_exponent, 11);
        assert!((cfg.four_probability - 0.1).abs() < f64::EPSILON);
        assert_eq!(cfg.start_tiles, 2);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = GameConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn rejects_out_of_range_size() {
        for size in [0, 1, MAX_SIZE + 1] {
            let err = GameConfig::with_size(size).validate().unwrap_err();
            assert_eq!(err, BoardError::InvalidSize { size, min: MIN_SIZE, max: MAX_SIZE });
        }
        assert!(GameConfig::with_size(MIN_SIZE).validate().is_ok());
        assert!(GameConfig::with_size(MAX_SIZE).validate().is_ok());
    }

    #[test]
    fn rejects_bad_probability_and_win_exponent() {
        let cfg = GameConfig { four_probability: 1.5, ..GameConfig::default() };
        assert!(matches!(cfg.validate(), Err(BoardError::InvalidProbability(_))));
        let cfg = GameConfig { four_probability: f64::NAN, ..GameConfig::default() };
        assert!(matches!(cfg.validate(), Err(BoardError::InvalidProbability(_))));
        let cfg = GameConfig { win_exponent: 0, ..GameConfig::default() };
        assert_eq!(cfg.validate(), Err(BoardError::InvalidWinExponent(0)));
    }

    #[test]
    fn rejects_too_many_start_tiles() {
        let cfg = GameConfig { size: 2, start_tiles: 5, ..GameConfig::default() };
        assert_eq!(cfg.validate(), Err(BoardError::TooManyStartTiles { start_tiles: 5, cells: 4 }));
    }

    #[test]
    fn invalid_toml_value_is_reported() {
        let err = GameConfig::from_toml_str("size = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(BoardError::InvalidSize { size: 1, .. })));
        let err = GameConfig::from_toml_str("size = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "size = 6").unwrap();
        writeln!(f, "four_probability = 0.25").unwrap();
        let cfg = GameConfig::from_toml(f.path()).unwrap();
        assert_eq!(cfg.size, 6);
        assert!((cfg.four_probability - 0.25).abs() < f64::EPSILON);
        assert_eq!(cfg.win_exponent, 11);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_toml(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
