use std::io;

/// Reasons a board or its configuration can be rejected.
///
/// Construction and decoding a move code are the only fallible steps; every
/// operation on a built board is total.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("invalid board size {size}: must be between {min} and {max}")]
    InvalidSize { size: usize, min: usize, max: usize },
    #[error("cell buffer has {actual} entries, expected {expected}")]
    CellCount { expected: usize, actual: usize },
    #[error("win exponent must be at least 1, got {0}")]
    InvalidWinExponent(u8),
    #[error("four probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("{start_tiles} start tiles do not fit on a board of {cells} cells")]
    TooManyStartTiles { start_tiles: usize, cells: usize },
    #[error("unknown move code {0}, expected 0..=3")]
    InvalidMoveCode(u8),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] BoardError),
}
