//! **tilemap-core**: core types for the tile map presentation layer.
//!
//! This crate holds the plain data shared by the tile image cache and the
//! grid renderer: geometry primitives, colours, tile-kind descriptors,
//! placements, and the grid geometry that maps cells to pixels and back.

pub mod color;
pub mod geom;
pub mod layout;
pub mod tile;

pub use color::{Color, ParseColorError};
pub use geom::Point;
pub use layout::{GridGeometry, cell_at};
pub use tile::{
    DEFAULT_TILE_COLOR, TILE_FONT_SIZE, TILE_HEIGHT, TILE_OFFSET, TILE_WIDTH, TileKindDescriptor,
    TileKindOverride, TilePlacement, merge,
};
