//! Click-to-edit tile map in a native window.
//!
//! Run: cargo run --bin tile-editor [tiles.json]
//!
//! `TILEMAP_FONT` selects the label font; otherwise a system serif face is
//! used. `RUST_LOG=debug` shows cache and draw statistics.

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use tilemap_canvas::{ClearMode, TileMap, TileMapProps};
use tilemap_core::Point;
use tilemap_demos::{DEFAULT_TILES, Editor};
use tilemap_tiles::{TileDrawer, TileFont, TileImageCache, load_tile_kinds, parse_tile_kinds};
use tilemap_winit::{WinitConfig, WinitDriver};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let kinds = match std::env::args().nth(1) {
        Some(path) => load_tile_kinds(path)?,
        None => parse_tile_kinds(DEFAULT_TILES)?,
    };

    let drawer = match std::env::var_os("TILEMAP_FONT") {
        Some(path) => TileDrawer::new(TileFont::from_path(path)?),
        None => match TileFont::find_serif() {
            Some(font) => TileDrawer::new(font),
            None => {
                log::warn!("no serif font found; set TILEMAP_FONT to draw tile labels");
                TileDrawer::without_font()
            }
        },
    };

    let cache = TileImageCache::build(&kinds, &drawer)?.install()?;

    let props = TileMapProps {
        clear: ClearMode::Reset,
        ..TileMapProps::default()
    };
    let mut editor = Editor::new(cache.len(), props.geometry());

    let clicks: Rc<RefCell<Vec<Point>>> = Rc::default();
    let sink = clicks.clone();
    let map = TileMap::new(cache, props)?.with_on_click(move |cell| sink.borrow_mut().push(cell));

    let driver = WinitDriver::new(WinitConfig {
        title: "Tile editor".into(),
    });
    driver.run(map, move |map| {
        for cell in clicks.borrow_mut().drain(..) {
            editor.click(cell);
        }
        map.set_tiles(editor.placements().to_vec());
    })
}
