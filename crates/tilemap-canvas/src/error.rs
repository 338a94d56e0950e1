use thiserror::Error;
use tilemap_core::Point;

/// A placement that could not be drawn normally.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The placement's kind has no cached image; a placeholder was painted.
    #[error("tile at {cell} has kind {value}, but only {kinds} kinds are configured")]
    UnknownKind {
        cell: Point,
        value: usize,
        kinds: usize,
    },
}

/// Invalid [`TileMapProps`](crate::TileMapProps).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PropsError {
    #[error("rows must be at least 1")]
    NoRows,
    #[error("cols must be at least 1")]
    NoCols,
    #[error("expand ratio must be a positive finite number, got {0}")]
    ExpandRatio(f64),
    #[error("a {rows}x{cols} grid is too large to draw")]
    TooLarge { rows: u32, cols: u32 },
}
