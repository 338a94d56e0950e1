//! The tile-kind configuration resource: an ordered JSON list of
//! `{ "text"?: string, "color"?: string }` records.

use std::path::Path;

use tilemap_core::TileKindOverride;

use crate::error::ConfigError;

/// Parse the tile-kind list from JSON text.
pub fn parse_tile_kinds(json: &str) -> Result<Vec<TileKindOverride>, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse the tile-kind list from a file.
pub fn load_tile_kinds(path: impl AsRef<Path>) -> Result<Vec<TileKindOverride>, ConfigError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tile_kinds(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_records() {
        let kinds = parse_tile_kinds(r#"[{"text":"1m","color":"red"},{"text":"E"},{}]"#).unwrap();
        assert_eq!(kinds.len(), 3);
        assert_eq!(kinds[0].color.as_deref(), Some("red"));
        assert_eq!(kinds[1].text.as_deref(), Some("E"));
        assert_eq!(kinds[1].color, None);
        assert_eq!(kinds[2], TileKindOverride::default());
    }

    #[test]
    fn empty_list_is_valid() {
        assert!(parse_tile_kinds("[]").unwrap().is_empty());
    }

    #[test]
    fn non_list_is_malformed() {
        for bad in [r#"{"text":"1m"}"#, r#"["1m"]"#, "42", "not json", r#"[{"text":3}]"#] {
            let err = parse_tile_kinds(bad).unwrap_err();
            assert!(matches!(err, ConfigError::Malformed(_)), "{bad}");
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_tile_kinds("/nonexistent/tiles.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
