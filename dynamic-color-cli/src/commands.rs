pub mod available;
pub mod luminance;
pub mod resolve;

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use comfy_table::{Cell, Color};
use dynamic_color::{Argb, MapResources};

/// Loads a JSON object mapping resource names to `#AARRGGBB` colors.
pub fn load_resources(path: &Path) -> Result<MapResources> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_resources(&content).with_context(|| format!("Invalid resource table {}", path.display()))
}

fn parse_resources(content: &str) -> Result<MapResources> {
    let table: BTreeMap<String, Argb> = serde_json::from_str(content)?;
    Ok(table.into_iter().collect())
}

/// A two-space cell filled with `color`.
pub fn swatch(color: Argb) -> Cell {
    Cell::new("  ").bg(Color::Rgb {
        r: color.red(),
        g: color.green(),
        b: color.blue(),
    })
}

#[cfg(test)]
mod tests {
    use dynamic_color::{ColorResources, ResourceKey};

    use super::*;

    #[test]
    fn parses_resource_tables() {
        let resources = parse_resources(
            r##"{ "system_accent1_600": "#FF6750A4", "system_accent1_0": "#FFFFFF" }"##,
        )
        .unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(
            resources.color(&ResourceKey::from_static("system_accent1_0")),
            Ok(Argb::WHITE)
        );
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(parse_resources(r#"{ "system_accent1_600": "6750A4" }"#).is_err());
        assert!(parse_resources(r#"[1, 2]"#).is_err());
    }
}
