//! Composites tile placements onto a [`Canvas`].

use tilemap_core::{Color, GridGeometry, TILE_HEIGHT, TILE_WIDTH, TilePlacement};
use tilemap_tiles::TileImageCache;

use crate::error::RenderError;
use crate::surface::Canvas;

const BLANK_BG_COLOR: Color = Color::GAINSBORO;
const GRID_COLOR: Color = Color::GRAY;
const GRID_WIDTH: u32 = 1;

/// What a draw call did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawReport {
    /// Images copied onto the surface, placeholders included.
    pub composites: usize,
    /// Placements that could not be drawn with their own image.
    pub errors: Vec<RenderError>,
}

impl DrawReport {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Paint every placement in sequence order.
///
/// The image for placement `(x, y, value)` lands with its top-left pixel at
/// `(x * TILE_WIDTH - TILE_OFFSET, y * TILE_HEIGHT - TILE_OFFSET)`. Later
/// placements overwrite earlier ones. The surface is not cleared first.
///
/// A `None` surface (not attached yet) draws nothing. A placement whose
/// kind is not in `cache` gets the placeholder image and is reported; the
/// remaining placements are still drawn.
pub fn draw(
    surface: Option<&mut Canvas>,
    cache: &TileImageCache,
    tiles: &[TilePlacement],
) -> DrawReport {
    let mut report = DrawReport::default();
    let Some(canvas) = surface else {
        log::trace!("surface not ready, skipping draw of {} tiles", tiles.len());
        return report;
    };

    for tile in tiles {
        let origin = GridGeometry::image_origin(tile.cell());
        let image = match cache.get(tile.value) {
            Some(image) => image,
            None => {
                let err = RenderError::UnknownKind {
                    cell: tile.cell(),
                    value: tile.value,
                    kinds: cache.len(),
                };
                log::warn!("{err}");
                report.errors.push(err);
                cache.placeholder()
            }
        };
        canvas.composite(image, origin);
        report.composites += 1;
    }

    log::debug!(
        "drew {} tiles ({} unknown kinds)",
        report.composites,
        report.errors.len()
    );
    report
}

/// Blank the surface and stroke the cell grid lines, for redraws that must
/// not show tiles from a previous frame.
pub fn reset(canvas: &mut Canvas, geometry: &GridGeometry) {
    canvas.fill(BLANK_BG_COLOR);
    let (w, h) = canvas.logical_size();
    if w == 0 || h == 0 {
        return;
    }
    for i in 0..=geometry.cols {
        let x = i.saturating_mul(TILE_WIDTH).min(w - GRID_WIDTH);
        canvas.fill_rect(x, 0, GRID_WIDTH, h, GRID_COLOR);
    }
    for i in 0..=geometry.rows {
        let y = i.saturating_mul(TILE_HEIGHT).min(h - GRID_WIDTH);
        canvas.fill_rect(0, y, w, GRID_WIDTH, GRID_COLOR);
    }
}
