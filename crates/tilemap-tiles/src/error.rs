use std::path::PathBuf;

use thiserror::Error;
use tilemap_core::ParseColorError;

/// The tile-kind configuration could not be turned into tile images.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The resource is not a JSON list of `{ text?, color? }` records.
    #[error("tile-kind configuration is not a list of records: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The resource file could not be read.
    #[error("failed to read tile-kind configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A record names a colour that cannot be parsed.
    #[error("tile kind {index}: {source}")]
    InvalidColor {
        index: usize,
        #[source]
        source: ParseColorError,
    },
}

/// A font could not be loaded.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("invalid font data: {0}")]
    InvalidFont(&'static str),
    #[error("failed to read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum CacheError {
    /// A custom tile image does not have the rendered tile dimensions.
    #[error("tile image {index} is {width}x{height}, expected {expected_width}x{expected_height}")]
    ImageSize {
        index: usize,
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },
    /// The process-wide cache has already been installed.
    #[error("a tile image cache is already installed")]
    AlreadyInstalled,
}
