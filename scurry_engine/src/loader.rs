//! Loader utilities for building a [`MapLayout`] from a TOML map file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use scurry_data::{MapDef, validate_map};

use crate::map::MapLayout;

/// Load a map layout from a TOML map file.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or failed validation.
pub fn load_map(path: &Path) -> Result<MapLayout> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("while reading map file {}", path.display()))?;
    let def: MapDef =
        toml::from_str(&raw).with_context(|| format!("while parsing map file {}", path.display()))?;
    validate_mapdef(&def)?;
    info!("{} areas loaded from {}", def.areas.len(), path.display());
    Ok(MapLayout::from_def(&def))
}

/// Validate the parsed `MapDef` and return a single aggregated error.
fn validate_mapdef(def: &MapDef) -> Result<()> {
    let errors = validate_map(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("map validation failed:\n{details}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GOOD_MAP: &str = r#"
        [game]
        title = "Mini"
        start_area = 1
        end_area = 2
        start_message = "Go."
        death_message = "Ouch."

        [[areas]]
        id = 1
        description = "First"
        initial_threat = 2
        item = "med-kit"

        [[areas.exits]]
        direction = "north"
        to = 2

        [[areas]]
        id = 2
        description = "Second"
    "#;

    fn write_map(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_valid_map_file() {
        let file = write_map(GOOD_MAP);
        let layout = load_map(file.path()).unwrap();
        assert_eq!(layout.area_count(), 2);
        assert_eq!(layout.start_area_id(), 1);
        assert_eq!(layout.area(1).unwrap().resolve_direction("north"), Some(2));
    }

    #[test]
    fn rejects_a_map_with_dangling_exits() {
        let broken = GOOD_MAP.replace("to = 2", "to = 99");
        let file = write_map(&broken);
        let err = load_map(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("map validation failed"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let file = write_map("[game\ntitle = ");
        let err = load_map(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("while parsing map file"));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_map(Path::new("/nonexistent/campus.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/campus.toml"));
    }
}
