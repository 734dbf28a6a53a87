/// Errors reported by the grid, the session surface and the pattern loader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    #[error("grid is used before initialization")]
    NotInitialized,
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("malformed RLE pattern: {0}")]
    Rle(String),
    #[error(
        "{pattern_width}x{pattern_height} pattern does not fit into the {width}x{height} grid"
    )]
    PatternTooLarge {
        pattern_width: usize,
        pattern_height: usize,
        width: usize,
        height: usize,
    },
}
