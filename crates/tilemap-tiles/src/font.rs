//! Font loading for tile labels.

use std::path::Path;

use fontdue::{Font, FontSettings, LineMetrics};
use tilemap_core::TILE_FONT_SIZE;

use crate::error::FontError;

/// Well-known locations of serif faces, probed in order by
/// [`TileFont::find_serif`].
pub const SERIF_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/TTF/DejaVuSerif.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSerif-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSerif-Regular.ttf",
    "/usr/share/fonts/noto/NotoSerif-Regular.ttf",
    "/usr/share/fonts/gnu-free/FreeSerif.otf",
    "/usr/share/fonts/truetype/freefont/FreeSerif.ttf",
    "/System/Library/Fonts/Supplemental/Times New Roman.ttf",
    "/Library/Fonts/Times New Roman.ttf",
    "C:\\Windows\\Fonts\\times.ttf",
];

/// A parsed font used to rasterize tile labels.
pub struct TileFont {
    font: Font,
}

impl TileFont {
    /// Parse TrueType/OpenType font data.
    pub fn from_bytes(data: &[u8]) -> Result<Self, FontError> {
        let settings = FontSettings {
            scale: TILE_FONT_SIZE,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(data, settings).map_err(FontError::InvalidFont)?;
        Ok(Self { font })
    }

    /// Read and parse a font file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&data)
    }

    /// Load the first serif face found in [`SERIF_CANDIDATES`].
    pub fn find_serif() -> Option<Self> {
        SERIF_CANDIDATES.iter().find_map(|candidate| {
            let path = Path::new(candidate);
            if !path.is_file() {
                return None;
            }
            match Self::from_path(path) {
                Ok(font) => {
                    log::debug!("using serif font {}", path.display());
                    Some(font)
                }
                Err(e) => {
                    log::warn!("skipping font {}: {e}", path.display());
                    None
                }
            }
        })
    }

    pub(crate) fn font(&self) -> &Font {
        &self.font
    }

    /// Vertical metrics at `px`, falling back to a conventional 0.8/0.2
    /// ascent/descent split for fonts without horizontal metrics.
    pub(crate) fn line_metrics(&self, px: f32) -> LineMetrics {
        self.font
            .horizontal_line_metrics(px)
            .unwrap_or(LineMetrics {
                ascent: px * 0.8,
                descent: -(px * 0.2),
                line_gap: 0.0,
                new_line_size: px,
            })
    }
}

impl std::fmt::Debug for TileFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileFont").finish_non_exhaustive()
    }
}
