//! The drawable surface tiles are composited onto.

use image::{Rgba, RgbaImage, imageops};
use tilemap_core::{Color, GridGeometry};

/// Page colour shown behind transparent canvas pixels when presenting.
const PAGE_BACKGROUND: Color = Color::WHITE;

/// An RGBA surface sized in logical pixels, plus the expand ratio it is
/// displayed at.
///
/// A new (or resized) canvas is fully transparent.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    pixels: RgbaImage,
    expand_ratio: f64,
}

impl Canvas {
    /// A transparent canvas with the logical size of `geometry`.
    pub fn new(geometry: &GridGeometry) -> Self {
        let (w, h) = geometry.logical_size();
        Self {
            pixels: RgbaImage::new(w, h),
            expand_ratio: geometry.expand_ratio,
        }
    }

    /// Logical size in pixels.
    #[inline]
    pub fn logical_size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Displayed size: the logical size scaled by the expand ratio.
    pub fn display_size(&self) -> (f64, f64) {
        let (w, h) = self.logical_size();
        (
            f64::from(w) * self.expand_ratio,
            f64::from(h) * self.expand_ratio,
        )
    }

    #[inline]
    pub fn expand_ratio(&self) -> f64 {
        self.expand_ratio
    }

    /// Whether this canvas matches `geometry` in logical size and zoom.
    pub fn fits(&self, geometry: &GridGeometry) -> bool {
        self.logical_size() == geometry.logical_size() && self.expand_ratio == geometry.expand_ratio
    }

    /// Adopt a new geometry. Changing the logical size discards the
    /// contents; changing only the zoom keeps them.
    pub fn resize(&mut self, geometry: &GridGeometry) {
        let (w, h) = geometry.logical_size();
        if self.pixels.dimensions() != (w, h) {
            self.pixels = RgbaImage::new(w, h);
        }
        self.expand_ratio = geometry.expand_ratio;
    }

    /// The logical pixels.
    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Pixel at logical position `(x, y)`, if inside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    /// Copy `img` onto the surface with its top-left pixel at `(x, y)`.
    /// Parts falling outside the surface are clipped; pixels are replaced,
    /// not blended.
    pub fn composite(&mut self, img: &RgbaImage, (x, y): (i64, i64)) {
        imageops::replace(&mut self.pixels, img, x, y);
    }

    /// Fill the whole surface with `color`.
    pub fn fill(&mut self, color: Color) {
        let px = Rgba(color.to_rgba());
        self.pixels.pixels_mut().for_each(|p| *p = px);
    }

    /// Fill a rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, w: u32, h: u32, color: Color) {
        let px = Rgba(color.to_rgba());
        let x1 = x0.saturating_add(w).min(self.pixels.width());
        let y1 = y0.saturating_add(h).min(self.pixels.height());
        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels.put_pixel(x, y, px);
            }
        }
    }

    /// Copy the surface into a 0RGB frame buffer at display scale
    /// (nearest-neighbour). Buffer pixels outside the displayed surface are
    /// painted with the page background.
    pub fn present(&self, buf: &mut [u32], buf_width: usize, buf_height: usize) {
        let (w, h) = self.logical_size();
        let page = pixel_to_u32(PAGE_BACKGROUND.to_rgba());
        let ratio = self.expand_ratio;

        if buf_width == 0 {
            return;
        }
        for (dy, row) in buf.chunks_mut(buf_width).take(buf_height).enumerate() {
            let sy = (dy as f64 / ratio).floor() as u32;
            for (dx, out) in row.iter_mut().enumerate() {
                let sx = (dx as f64 / ratio).floor() as u32;
                *out = if sx < w && sy < h {
                    pixel_to_u32(over_page(self.pixels.get_pixel(sx, sy).0))
                } else {
                    page
                };
            }
        }
    }
}

/// Composite a possibly translucent canvas pixel over the page background.
fn over_page(p: [u8; 4]) -> [u8; 4] {
    let bg = PAGE_BACKGROUND.to_rgba();
    let a = u32::from(p[3]);
    let mix = |c: usize| ((u32::from(p[c]) * a + u32::from(bg[c]) * (255 - a)) / 255) as u8;
    [mix(0), mix(1), mix(2), 0xFF]
}

#[inline]
fn pixel_to_u32(p: [u8; 4]) -> u32 {
    (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2])
}
