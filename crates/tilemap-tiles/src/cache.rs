//! The tile image cache: one pre-rendered image per tile kind, indexed by
//! kind identifier.

use std::sync::OnceLock;

use image::RgbaImage;
use tilemap_core::{Color, TileKindDescriptor, TileKindOverride, merge};

use crate::drawer::{IMAGE_HEIGHT, IMAGE_WIDTH, TileDrawer};
use crate::error::{CacheError, ConfigError};

static INSTALLED: OnceLock<TileImageCache> = OnceLock::new();

/// Immutable table of rendered tile images.
///
/// The image for kind `i` is the rendering of the `i`-th configuration
/// record. Nothing mutates the table once it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct TileImageCache {
    images: Vec<RgbaImage>,
    placeholder: RgbaImage,
}

impl TileImageCache {
    /// Render every configured tile kind, in configuration order.
    ///
    /// Each record is merged over the default descriptor before drawing.
    pub fn build(kinds: &[TileKindOverride], drawer: &TileDrawer) -> Result<Self, ConfigError> {
        let defaults = TileKindDescriptor::default();
        let images = kinds
            .iter()
            .enumerate()
            .map(|(index, record)| -> Result<RgbaImage, ConfigError> {
                let desc = merge(&defaults, record);
                let color = Color::parse(&desc.color)
                    .map_err(|source| ConfigError::InvalidColor { index, source })?;
                Ok(drawer.draw(&desc.text, color))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        log::debug!(
            "built {} tile images ({}x{}, labels {})",
            images.len(),
            IMAGE_WIDTH,
            IMAGE_HEIGHT,
            if drawer.has_font() { "on" } else { "off" },
        );

        Ok(Self {
            images,
            placeholder: TileDrawer::placeholder(),
        })
    }

    /// Parse a JSON tile-kind list and render it.
    pub fn from_json(json: &str, drawer: &TileDrawer) -> Result<Self, ConfigError> {
        let kinds = crate::config::parse_tile_kinds(json)?;
        Self::build(&kinds, drawer)
    }

    /// Use pre-rendered tile art instead of drawn labels. Every image must
    /// have the rendered tile size, border included.
    pub fn from_images(images: Vec<RgbaImage>) -> Result<Self, CacheError> {
        if let Some((index, img)) = images
            .iter()
            .enumerate()
            .find(|(_, img)| img.dimensions() != (IMAGE_WIDTH, IMAGE_HEIGHT))
        {
            return Err(CacheError::ImageSize {
                index,
                width: img.width(),
                height: img.height(),
                expected_width: IMAGE_WIDTH,
                expected_height: IMAGE_HEIGHT,
            });
        }
        Ok(Self {
            images,
            placeholder: TileDrawer::placeholder(),
        })
    }

    /// Image for tile kind `kind`, if it exists.
    #[inline]
    pub fn get(&self, kind: usize) -> Option<&RgbaImage> {
        self.images.get(kind)
    }

    /// Image painted in place of unknown kinds.
    #[inline]
    pub fn placeholder(&self) -> &RgbaImage {
        &self.placeholder
    }

    /// Number of tile kinds.
    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Iterate over `(kind, image)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RgbaImage)> {
        self.images.iter().enumerate()
    }

    // -----------------------------------------------------------------------
    // Process-wide instance
    // -----------------------------------------------------------------------

    /// Make this cache the process-wide instance. It can be installed once
    /// and lives until the process exits.
    pub fn install(self) -> Result<&'static Self, CacheError> {
        INSTALLED
            .set(self)
            .map_err(|_| CacheError::AlreadyInstalled)?;
        Self::installed().ok_or(CacheError::AlreadyInstalled)
    }

    /// The process-wide instance, if one has been installed.
    pub fn installed() -> Option<&'static Self> {
        INSTALLED.get()
    }

    /// The process-wide instance, building and installing it with `init` on
    /// first use.
    pub fn installed_or_build<F>(init: F) -> Result<&'static Self, ConfigError>
    where
        F: FnOnce() -> Result<Self, ConfigError>,
    {
        if let Some(cache) = INSTALLED.get() {
            return Ok(cache);
        }
        let cache = init()?;
        Ok(INSTALLED.get_or_init(|| cache))
    }
}
