//! **tilemap-tiles**: the tile image cache.
//!
//! Each configured tile kind is rasterized once into a bordered RGBA image
//! ([`TileDrawer`]); the images are kept in an immutable
//! [`TileImageCache`] looked up by kind identifier. Tile kinds come from a
//! JSON list of `{ text?, color? }` records ([`config`]).

pub mod cache;
pub mod config;
pub mod drawer;
pub mod error;
pub mod font;

pub use cache::TileImageCache;
pub use config::{load_tile_kinds, parse_tile_kinds};
pub use drawer::{IMAGE_HEIGHT, IMAGE_WIDTH, TileDrawer};
pub use error::{CacheError, ConfigError, FontError};
pub use font::TileFont;
