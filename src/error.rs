use thiserror::Error;

/// Reasons a wall configuration cannot be laid out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WallError {
    #[error("no wall column counts configured")]
    NoColumnCounts,

    #[error("inner column count must be positive")]
    InvalidInnerCount,

    #[error("column count {column_count} is smaller than the inner column count {inner}")]
    ColumnCountBelowInner { column_count: usize, inner: usize },

    #[error("tile size must be positive, got {width}x{height}")]
    InvalidTileSize { width: f64, height: f64 },

    #[error("invalid dice roll range {min}..={max}")]
    InvalidDiceRange { min: usize, max: usize },
}
