//! **tilemap-canvas**: grid renderer and input mapper.
//!
//! [`TileMap`] paints tile placements from a
//! [`TileImageCache`](tilemap_tiles::TileImageCache) onto a [`Canvas`] and
//! turns pointer clicks on the displayed canvas back into grid cells.
//!
//! Everything here runs on the caller's thread and never blocks: a draw is a
//! synchronous repaint of the whole placement list, and a click is mapped
//! and handed to the click handler before [`TileMap::click`] returns.

pub mod error;
pub mod input;
pub mod renderer;
pub mod surface;
pub mod view;

pub use error::{PropsError, RenderError};
pub use input::{ClickHandler, PointerClick};
pub use renderer::{DrawReport, draw, reset};
pub use surface::Canvas;
pub use view::{ClearMode, TileMap, TileMapProps};
