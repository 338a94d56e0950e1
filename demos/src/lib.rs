//! Shared pieces of the demo programs: the bundled tile set and a small
//! click-driven tile editor.

use tilemap_core::{GridGeometry, Point, TilePlacement};

/// The bundled tile-kind list: 34 mahjong kinds (characters, bamboo and
/// dots 1-9, the four winds, the three dragons).
pub const DEFAULT_TILES: &str = include_str!("../data/tiles.json");

/// Places and cycles tiles on click.
///
/// Clicking an empty cell places kind 0; clicking an occupied cell advances
/// its kind, and advancing past the last kind empties the cell again.
#[derive(Clone, Debug)]
pub struct Editor {
    kinds: usize,
    geometry: GridGeometry,
    tiles: Vec<TilePlacement>,
}

impl Editor {
    pub fn new(kinds: usize, geometry: GridGeometry) -> Self {
        Self {
            kinds,
            geometry,
            tiles: Vec::new(),
        }
    }

    /// Apply a click on `cell`. Cells outside the grid are ignored.
    pub fn click(&mut self, cell: Point) {
        if !self.geometry.contains(cell) || self.kinds == 0 {
            log::debug!("ignoring click outside the grid at {cell}");
            return;
        }
        match self.tiles.iter().position(|t| t.cell() == cell) {
            Some(i) if self.tiles[i].value + 1 < self.kinds => self.tiles[i].value += 1,
            Some(i) => {
                self.tiles.remove(i);
            }
            None => self.tiles.push(TilePlacement::new(cell.x, cell.y, 0)),
        }
    }

    /// Current placements, in placement order.
    pub fn placements(&self) -> &[TilePlacement] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_tiles_parse() {
        let kinds = tilemap_tiles::parse_tile_kinds(DEFAULT_TILES).unwrap();
        assert_eq!(kinds.len(), 34);
        assert_eq!(kinds[0].text.as_deref(), Some("1m"));
        assert_eq!(kinds[27].color, None);

        let cache = tilemap_tiles::TileImageCache::build(
            &kinds,
            &tilemap_tiles::TileDrawer::without_font(),
        )
        .unwrap();
        assert_eq!(cache.len(), 34);
    }

    #[test]
    fn click_cycles_through_kinds() {
        let mut editor = Editor::new(2, GridGeometry::default());
        let cell = Point::new(1, 2);
        editor.click(cell);
        assert_eq!(editor.placements(), &[TilePlacement::new(1, 2, 0)]);
        editor.click(cell);
        assert_eq!(editor.placements(), &[TilePlacement::new(1, 2, 1)]);
        editor.click(cell);
        assert!(editor.placements().is_empty());
    }

    #[test]
    fn clicks_outside_grid_are_ignored() {
        let mut editor = Editor::new(3, GridGeometry::new(2, 2, 1.0));
        editor.click(Point::new(2, 0));
        editor.click(Point::new(-1, 1));
        assert!(editor.placements().is_empty());
    }

    #[test]
    fn no_kinds_means_no_placements() {
        let mut editor = Editor::new(0, GridGeometry::default());
        editor.click(Point::ZERO);
        assert!(editor.placements().is_empty());
    }
}
