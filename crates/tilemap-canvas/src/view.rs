//! [`TileMap`]: the host-facing tile map component.

use tilemap_core::{GridGeometry, Point, TilePlacement};
use tilemap_tiles::TileImageCache;

use crate::error::PropsError;
use crate::input::{ClickHandler, PointerClick};
use crate::renderer::{self, DrawReport};
use crate::surface::Canvas;

const DEFAULT_SIZE: u32 = 6;
const DEFAULT_EXPAND_RATIO: f64 = 2.0;

/// What happens to the previous frame's pixels before tiles are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ClearMode {
    /// Draw over whatever is already on the surface. Cells that lost their
    /// tile keep showing it until something else covers them.
    #[default]
    Keep,
    /// Blank the surface and draw grid lines first.
    Reset,
}

/// Configuration supplied by the hosting environment.
#[derive(Clone, Debug, PartialEq)]
pub struct TileMapProps {
    pub rows: u32,
    pub cols: u32,
    pub expand_ratio: f64,
    pub tiles: Vec<TilePlacement>,
    pub clear: ClearMode,
}

impl Default for TileMapProps {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            expand_ratio: DEFAULT_EXPAND_RATIO,
            tiles: Vec::new(),
            clear: ClearMode::Keep,
        }
    }
}

impl TileMapProps {
    pub fn validate(&self) -> Result<(), PropsError> {
        if self.rows == 0 {
            return Err(PropsError::NoRows);
        }
        if self.cols == 0 {
            return Err(PropsError::NoCols);
        }
        if !(self.expand_ratio.is_finite() && self.expand_ratio > 0.0) {
            return Err(PropsError::ExpandRatio(self.expand_ratio));
        }
        if self.geometry().checked_logical_size().is_none() {
            return Err(PropsError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.rows, self.cols, self.expand_ratio)
    }
}

/// A grid of tiles drawn from a [`TileImageCache`], reporting clicked
/// cells to a [`ClickHandler`].
#[derive(Debug)]
pub struct TileMap<'a> {
    cache: &'a TileImageCache,
    props: TileMapProps,
    on_click: ClickHandler,
}

impl<'a> TileMap<'a> {
    /// The cache must be fully built before the map can exist, so no draw
    /// can run against a half-initialised cache.
    pub fn new(cache: &'a TileImageCache, props: TileMapProps) -> Result<Self, PropsError> {
        props.validate()?;
        Ok(Self {
            cache,
            props,
            on_click: ClickHandler::default(),
        })
    }

    /// Set the click handler (builder).
    pub fn with_on_click<F>(mut self, f: F) -> Self
    where
        F: FnMut(Point) + 'static,
    {
        self.set_on_click(f);
        self
    }

    pub fn set_on_click<F>(&mut self, f: F)
    where
        F: FnMut(Point) + 'static,
    {
        self.on_click = ClickHandler::new(f);
    }

    #[inline]
    pub fn props(&self) -> &TileMapProps {
        &self.props
    }

    /// Replace the configuration. Invalid props leave the map unchanged.
    pub fn set_props(&mut self, props: TileMapProps) -> Result<(), PropsError> {
        props.validate()?;
        self.props = props;
        Ok(())
    }

    /// Replace the placement list.
    pub fn set_tiles(&mut self, tiles: Vec<TilePlacement>) {
        self.props.tiles = tiles;
    }

    #[inline]
    pub fn geometry(&self) -> GridGeometry {
        self.props.geometry()
    }

    #[inline]
    pub fn cache(&self) -> &'a TileImageCache {
        self.cache
    }

    /// A fresh surface sized for the current geometry.
    pub fn create_canvas(&self) -> Canvas {
        Canvas::new(&self.geometry())
    }

    /// Repaint the current placements onto `surface`.
    ///
    /// A surface whose size no longer matches the geometry is resized (and
    /// thereby cleared) first. `None` means the surface is not attached yet
    /// and nothing is drawn.
    pub fn draw(&self, surface: Option<&mut Canvas>) -> DrawReport {
        let geometry = self.geometry();
        let surface = surface.map(|canvas| {
            if !canvas.fits(&geometry) {
                log::debug!(
                    "resizing canvas to {}x{} cells at {}x",
                    geometry.cols,
                    geometry.rows,
                    geometry.expand_ratio
                );
                canvas.resize(&geometry);
            }
            if self.props.clear == ClearMode::Reset {
                renderer::reset(canvas, &geometry);
            }
            canvas
        });
        renderer::draw(surface, self.cache, &self.props.tiles)
    }

    /// Map a click on the displayed surface to a cell and pass it to the
    /// click handler. Returns the cell as well.
    pub fn click(&mut self, click: PointerClick) -> Point {
        let cell = click.cell(self.props.expand_ratio);
        log::trace!(
            "click at ({}, {}) -> cell {cell}",
            click.client_x,
            click.client_y
        );
        self.on_click.emit(cell);
        cell
    }
}
