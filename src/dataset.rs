use std::error::Error;
use std::fs;
use std::path::Path;

use voxset_grid::{EntryCollectionDto, EntryDto};
use voxset_palette::Palette;

const DEFAULT_PALETTE: &str = include_str!("../assets/palette.toml");

/// Reads a dataset file: either a collection (`{"entries": [...]}`) or a
/// single bare entry, which becomes a one-entry collection.
pub fn read_collection(path: &Path) -> Result<EntryCollectionDto, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    parse_collection(&text)
}

pub fn parse_collection(text: &str) -> Result<EntryCollectionDto, Box<dyn Error>> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let is_collection = value
        .as_object()
        .is_some_and(|o| o.contains_key("entries") || o.contains_key("Entries"));
    if is_collection {
        Ok(serde_json::from_value(value)?)
    } else {
        let entry: EntryDto = serde_json::from_value(value)?;
        Ok(EntryCollectionDto {
            name: None,
            entries: vec![entry],
        })
    }
}

/// Writes `collection` as pretty JSON to `out`, or stdout when `out` is `None`.
pub fn write_collection(
    collection: &EntryCollectionDto,
    out: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(collection)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
            log::info!(
                "wrote {} entries to {}",
                collection.entries.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// The palette at `path`, or the bundled default.
pub fn load_palette(path: Option<&Path>) -> Result<Palette, Box<dyn Error>> {
    match path {
        Some(p) => Palette::from_path(p),
        None => Palette::from_toml_str(DEFAULT_PALETTE),
    }
}
