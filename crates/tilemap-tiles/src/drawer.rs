//! Rasterizes one tile kind into a bordered RGBA image.

use image::{Rgba, RgbaImage};
use tilemap_core::{Color, TILE_FONT_SIZE, TILE_HEIGHT, TILE_OFFSET, TILE_WIDTH};

use crate::font::TileFont;

/// Width of a rendered tile image, border included.
pub const IMAGE_WIDTH: u32 = TILE_WIDTH + 2 * TILE_OFFSET;
/// Height of a rendered tile image, border included.
pub const IMAGE_HEIGHT: u32 = TILE_HEIGHT + 2 * TILE_OFFSET;

const LINE_WIDTH: u32 = TILE_OFFSET * 2;
const BACKGROUND: Color = Color::WHITE;
const BORDER: Color = Color::BLACK;
const PLACEHOLDER_FILL: Color = Color::MAGENTA;

/// Renders tile images: white interior, black 2px border, and a label
/// centred in the interior.
#[derive(Debug, Default)]
pub struct TileDrawer {
    font: Option<TileFont>,
}

impl TileDrawer {
    /// A drawer that renders labels with `font`.
    pub fn new(font: TileFont) -> Self {
        Self { font: Some(font) }
    }

    /// A drawer without a font. Labels are skipped; backgrounds and
    /// borders are still drawn.
    pub fn without_font() -> Self {
        Self { font: None }
    }

    /// Whether labels will be rendered.
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Render one tile: background, border, then `text` in `color`.
    pub fn draw(&self, text: &str, color: Color) -> RgbaImage {
        let mut img = framed(BACKGROUND);
        if text.is_empty() {
            return img;
        }
        match &self.font {
            Some(font) => draw_label(&mut img, font, text, color),
            None => log::warn!("no font loaded, tile label {text:?} not drawn"),
        }
        img
    }

    /// The image painted for placements whose kind has no cached image.
    pub fn placeholder() -> RgbaImage {
        framed(PLACEHOLDER_FILL)
    }
}

/// A blank tile: `fill` everywhere, then the border stroke. The stroke is
/// centred on the rectangle at inset `TILE_OFFSET`, so it covers the outer
/// `LINE_WIDTH` pixels on every side.
fn framed(fill: Color) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(IMAGE_WIDTH, IMAGE_HEIGHT, Rgba(fill.to_rgba()));
    let border = Rgba(BORDER.to_rgba());
    let (w, h) = (IMAGE_WIDTH, IMAGE_HEIGHT);
    fill_rect(&mut img, 0, 0, w, LINE_WIDTH, border);
    fill_rect(&mut img, 0, h - LINE_WIDTH, w, LINE_WIDTH, border);
    fill_rect(&mut img, 0, 0, LINE_WIDTH, h, border);
    fill_rect(&mut img, w - LINE_WIDTH, 0, LINE_WIDTH, h, border);
    img
}

fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32, px: Rgba<u8>) {
    for y in y0..(y0 + h).min(img.height()) {
        for x in x0..(x0 + w).min(img.width()) {
            img.put_pixel(x, y, px);
        }
    }
}

/// Draw `text` centred on the image, horizontally by advance width and
/// vertically on the middle of the em box.
fn draw_label(img: &mut RgbaImage, font: &TileFont, text: &str, color: Color) {
    let f = font.font();
    let metrics = font.line_metrics(TILE_FONT_SIZE);

    let mut advances = Vec::with_capacity(text.len());
    let mut total = 0.0f32;
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        let kern = prev
            .and_then(|p| f.horizontal_kern(p, ch, TILE_FONT_SIZE))
            .unwrap_or(0.0);
        total += kern;
        advances.push((ch, total));
        total += f.metrics(ch, TILE_FONT_SIZE).advance_width;
        prev = Some(ch);
    }

    let center_x = IMAGE_WIDTH as f32 * 0.5;
    let center_y = IMAGE_HEIGHT as f32 * 0.5;
    let left = center_x - total * 0.5;
    let baseline = center_y + (metrics.ascent + metrics.descent) * 0.5;

    let fg = color.to_rgba();
    for (ch, pen_x) in advances {
        let (gm, bitmap) = f.rasterize(ch, TILE_FONT_SIZE);
        if gm.width == 0 || gm.height == 0 {
            continue;
        }
        let gx0 = (left + pen_x).round() as i32 + gm.xmin;
        let gy0 = baseline.round() as i32 - gm.ymin - gm.height as i32;

        for gy in 0..gm.height {
            for gx in 0..gm.width {
                let alpha = bitmap[gy * gm.width + gx];
                if alpha == 0 {
                    continue;
                }
                let px = gx0 + gx as i32;
                let py = gy0 + gy as i32;
                if px < 0 || py < 0 || px as u32 >= img.width() || py as u32 >= img.height() {
                    continue;
                }
                let dst = img.get_pixel_mut(px as u32, py as u32);
                let a = alpha as f32 / 255.0;
                for c in 0..3 {
                    dst.0[c] = blend(dst.0[c], fg[c], a);
                }
            }
        }
    }
}

/// Simple alpha-blend of two u8 color channels.
fn blend(bg: u8, fg: u8, alpha: f32) -> u8 {
    ((1.0 - alpha) * bg as f32 + alpha * fg as f32).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_image_dimensions() {
        let img = TileDrawer::without_font().draw("", Color::BLACK);
        assert_eq!(img.dimensions(), (42, 52));
    }

    #[test]
    fn border_covers_outer_two_pixels() {
        let img = TileDrawer::without_font().draw("", Color::BLACK);
        let black = Rgba([0, 0, 0, 255]);
        let white = Rgba([255, 255, 255, 255]);
        for &(x, y) in &[(0, 0), (1, 1), (41, 51), (40, 25), (20, 50), (0, 30)] {
            assert_eq!(*img.get_pixel(x, y), black, "({x}, {y})");
        }
        for &(x, y) in &[(2, 2), (39, 49), (21, 26)] {
            assert_eq!(*img.get_pixel(x, y), white, "({x}, {y})");
        }
    }

    #[test]
    fn missing_font_still_draws_frame() {
        let drawer = TileDrawer::without_font();
        assert!(!drawer.has_font());
        let labelled = drawer.draw("5m", Color::parse("red").unwrap());
        let blank = drawer.draw("", Color::BLACK);
        assert_eq!(labelled, blank);
    }

    #[test]
    fn label_is_centred_in_its_colour() {
        let Some(font) = TileFont::find_serif() else {
            return;
        };
        let red = Color::parse("red").unwrap();
        let img = TileDrawer::new(font).draw("8", red);
        let white = Rgba([255, 255, 255, 255]);
        let black = Rgba([0, 0, 0, 255]);

        for (x, y, px) in img.enumerate_pixels() {
            let border = x < LINE_WIDTH
                || y < LINE_WIDTH
                || x >= IMAGE_WIDTH - LINE_WIDTH
                || y >= IMAGE_HEIGHT - LINE_WIDTH;
            if border {
                assert_eq!(*px, black, "border at ({x}, {y})");
            }
        }

        let ink: Vec<(u32, u32, Rgba<u8>)> = img
            .enumerate_pixels()
            .filter(|&(x, y, px)| {
                x >= LINE_WIDTH
                    && y >= LINE_WIDTH
                    && x < IMAGE_WIDTH - LINE_WIDTH
                    && y < IMAGE_HEIGHT - LINE_WIDTH
                    && *px != white
            })
            .map(|(x, y, px)| (x, y, *px))
            .collect();
        assert!(!ink.is_empty(), "label left no ink");

        // red blended over white keeps the red channel saturated
        for &(x, y, px) in &ink {
            assert_eq!(px.0[0], 255, "({x}, {y}) = {px:?}");
            assert_eq!(px.0[1], px.0[2], "({x}, {y}) = {px:?}");
        }
        assert!(ink.iter().any(|&(_, _, px)| px == Rgba(red.to_rgba())));

        let min_x = ink.iter().map(|p| p.0).min().unwrap() as f32;
        let max_x = ink.iter().map(|p| p.0).max().unwrap() as f32;
        let min_y = ink.iter().map(|p| p.1).min().unwrap() as f32;
        let max_y = ink.iter().map(|p| p.1).max().unwrap() as f32;
        let cx = (min_x + max_x + 1.0) * 0.5;
        let cy = (min_y + max_y + 1.0) * 0.5;
        assert!((cx - 21.0).abs() <= 1.5, "ink centred at x = {cx}");
        assert!((cy - 26.0).abs() <= 1.5, "ink centred at y = {cy}");
    }

    #[test]
    fn placeholder_is_distinct() {
        let placeholder = TileDrawer::placeholder();
        assert_eq!(placeholder.dimensions(), (IMAGE_WIDTH, IMAGE_HEIGHT));
        assert_eq!(*placeholder.get_pixel(20, 25), Rgba([255, 0, 255, 255]));
        assert_eq!(*placeholder.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn blend_endpoints() {
        assert_eq!(blend(10, 200, 0.0), 10);
        assert_eq!(blend(10, 200, 1.0), 200);
        assert_eq!(blend(0, 255, 0.5), 128);
    }
}
