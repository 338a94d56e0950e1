//! Opaque RGB colours and the colour strings accepted by the tile-kind
//! configuration.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self::from_rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::from_rgb(0xFF, 0xFF, 0xFF);
    pub const GRAY: Self = Self::from_rgb(0x80, 0x80, 0x80);
    pub const GAINSBORO: Self = Self::from_rgb(0xDC, 0xDC, 0xDC);
    pub const MAGENTA: Self = Self::from_rgb(0xFF, 0x00, 0xFF);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Fully opaque `[r, g, b, a]` channels.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), 0xFF]
    }

    /// Parse a colour string.
    ///
    /// Accepted forms are `#rgb`, `#rrggbb`, `rgb(r, g, b)` and the CSS
    /// named colours listed in [`NAMED_COLORS`] (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ParseColorError::new(trimmed));
        }
        if let Some(args) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_rgb_args(args).ok_or_else(|| ParseColorError::new(trimmed));
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|&(_, c)| c)
            .ok_or_else(|| ParseColorError::new(trimmed))
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            // #abc expands to #aabbcc
            let r = ((v >> 8) & 0xF) as u8 * 0x11;
            let g = ((v >> 4) & 0xF) as u8 * 0x11;
            let b = (v & 0xF) as u8 * 0x11;
            Some(Color::from_rgb(r, g, b))
        }
        6 => u32::from_str_radix(hex, 16).ok().map(Color),
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let mut parts = args.split(',').map(|p| p.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Color::from_rgb(r, g, b))
}

/// CSS named colours understood by [`Color::parse`].
pub const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("gray", Color::GRAY),
    ("grey", Color::GRAY),
    ("gainsboro", Color::GAINSBORO),
    ("lightgray", Color::from_rgb(0xD3, 0xD3, 0xD3)),
    ("darkgray", Color::from_rgb(0xA9, 0xA9, 0xA9)),
    ("silver", Color::from_rgb(0xC0, 0xC0, 0xC0)),
    ("red", Color::from_rgb(0xFF, 0x00, 0x00)),
    ("darkred", Color::from_rgb(0x8B, 0x00, 0x00)),
    ("crimson", Color::from_rgb(0xDC, 0x14, 0x3C)),
    ("maroon", Color::from_rgb(0x80, 0x00, 0x00)),
    ("green", Color::from_rgb(0x00, 0x80, 0x00)),
    ("darkgreen", Color::from_rgb(0x00, 0x64, 0x00)),
    ("forestgreen", Color::from_rgb(0x22, 0x8B, 0x22)),
    ("lime", Color::from_rgb(0x00, 0xFF, 0x00)),
    ("olive", Color::from_rgb(0x80, 0x80, 0x00)),
    ("blue", Color::from_rgb(0x00, 0x00, 0xFF)),
    ("darkblue", Color::from_rgb(0x00, 0x00, 0x8B)),
    ("navy", Color::from_rgb(0x00, 0x00, 0x80)),
    ("royalblue", Color::from_rgb(0x41, 0x69, 0xE1)),
    ("teal", Color::from_rgb(0x00, 0x80, 0x80)),
    ("cyan", Color::from_rgb(0x00, 0xFF, 0xFF)),
    ("magenta", Color::MAGENTA),
    ("purple", Color::from_rgb(0x80, 0x00, 0x80)),
    ("orange", Color::from_rgb(0xFF, 0xA5, 0x00)),
    ("gold", Color::from_rgb(0xFF, 0xD7, 0x00)),
    ("yellow", Color::from_rgb(0xFF, 0xFF, 0x00)),
    ("brown", Color::from_rgb(0xA5, 0x2A, 0x2A)),
];

// ---------------------------------------------------------------------------
// ParseColorError
// ---------------------------------------------------------------------------

/// A colour string that [`Color::parse`] does not understand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError {
    input: String,
}

impl ParseColorError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised colour {:?}", self.input)
    }
}

impl std::error::Error for ParseColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_components() {
        let c = Color::from_rgb(0xAB, 0xCD, 0xEF);
        assert_eq!(c.r(), 0xAB);
        assert_eq!(c.g(), 0xCD);
        assert_eq!(c.b(), 0xEF);
        assert_eq!(c.to_rgba(), [0xAB, 0xCD, 0xEF, 0xFF]);
    }

    #[test]
    fn parse_named() {
        assert_eq!(Color::parse("black"), Ok(Color::BLACK));
        assert_eq!(Color::parse(" Red "), Ok(Color::from_rgb(255, 0, 0)));
        assert_eq!("gainsboro".parse::<Color>(), Ok(Color::GAINSBORO));
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!(Color::parse("#0d6efd"), Ok(Color::from_rgb(0x0d, 0x6e, 0xfd)));
        assert_eq!(Color::parse("#FFF"), Ok(Color::WHITE));
        assert_eq!(Color::parse("#a1b"), Ok(Color::from_rgb(0xaa, 0x11, 0xbb)));
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#gggggg").is_err());
    }

    #[test]
    fn parse_rgb_function() {
        assert_eq!(Color::parse("rgb(1, 2, 3)"), Ok(Color::from_rgb(1, 2, 3)));
        assert!(Color::parse("rgb(1, 2)").is_err());
        assert!(Color::parse("rgb(1, 2, 300)").is_err());
        assert!(Color::parse("rgb(1, 2, 3, 4)").is_err());
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = Color::parse("chartreuse-ish").unwrap_err();
        assert_eq!(err.input(), "chartreuse-ish");
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Color::from_rgb(1, 0x20, 0xff).to_string(), "#0120ff");
    }
}
