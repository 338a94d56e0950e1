//! Tile kinds and tile placements.
//!
//! A *tile kind* is one entry of the configured tile list; its index in that
//! list is the kind identifier that [`TilePlacement::value`] refers to.

/// Interior width of a tile in logical pixels.
pub const TILE_WIDTH: u32 = 40;
/// Interior height of a tile in logical pixels.
pub const TILE_HEIGHT: u32 = 50;
/// Border inset around the tile interior. Rendered tile images are
/// `TILE_WIDTH + 2 * TILE_OFFSET` by `TILE_HEIGHT + 2 * TILE_OFFSET`.
pub const TILE_OFFSET: u32 = 1;
/// Font size of the tile label, in pixels.
pub const TILE_FONT_SIZE: f32 = 28.0;

/// Label colour used when a tile kind does not specify one.
pub const DEFAULT_TILE_COLOR: &str = "black";

// ---------------------------------------------------------------------------
// TileKindDescriptor
// ---------------------------------------------------------------------------

/// Fully resolved visual attributes of one tile kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileKindDescriptor {
    pub text: String,
    pub color: String,
}

impl Default for TileKindDescriptor {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: DEFAULT_TILE_COLOR.to_owned(),
        }
    }
}

impl TileKindDescriptor {
    /// Set the label (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the label colour (builder).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// One record of the tile-kind configuration resource. Missing fields fall
/// back to the defaults through [`merge`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileKindOverride {
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<String>,
}

/// Layer `over` on top of `defaults`: fields present in `over` win, missing
/// fields keep the default.
pub fn merge(defaults: &TileKindDescriptor, over: &TileKindOverride) -> TileKindDescriptor {
    TileKindDescriptor {
        text: over.text.clone().unwrap_or_else(|| defaults.text.clone()),
        color: over.color.clone().unwrap_or_else(|| defaults.color.clone()),
    }
}

// ---------------------------------------------------------------------------
// TilePlacement
// ---------------------------------------------------------------------------

/// One occupied grid cell: column `x`, row `y`, and the kind identifier
/// `value`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePlacement {
    pub x: i32,
    pub y: i32,
    pub value: usize,
}

impl TilePlacement {
    /// Create a new placement.
    #[inline]
    pub const fn new(x: i32, y: i32, value: usize) -> Self {
        Self { x, y, value }
    }

    /// The occupied cell.
    #[inline]
    pub const fn cell(&self) -> crate::Point {
        crate::Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_defaults_for_missing_fields() {
        let d = TileKindDescriptor::default();
        let merged = merge(&d, &TileKindOverride::default());
        assert_eq!(merged.text, "");
        assert_eq!(merged.color, DEFAULT_TILE_COLOR);
    }

    #[test]
    fn merge_overrides_present_fields() {
        let d = TileKindDescriptor::default();
        let over = TileKindOverride {
            text: Some("5m".into()),
            color: None,
        };
        let merged = merge(&d, &over);
        assert_eq!(merged, TileKindDescriptor::default().with_text("5m"));

        let over = TileKindOverride {
            text: None,
            color: Some("red".into()),
        };
        assert_eq!(merge(&d, &over).color, "red");
    }

    #[test]
    fn merge_accepts_explicit_empty_text() {
        let d = TileKindDescriptor::default().with_text("x");
        let over = TileKindOverride {
            text: Some(String::new()),
            color: None,
        };
        assert_eq!(merge(&d, &over).text, "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn override_from_json() {
        let over: TileKindOverride = serde_json::from_str(r#"{"color":"blue"}"#).unwrap();
        assert_eq!(over.text, None);
        assert_eq!(over.color.as_deref(), Some("blue"));

        let p: TilePlacement = serde_json::from_str(r#"{"x":2,"y":3,"value":0}"#).unwrap();
        assert_eq!(p, TilePlacement::new(2, 3, 0));
    }
}
