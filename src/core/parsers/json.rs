use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::core::Key;

/// Keys read from one definition file.
#[derive(Debug, Default)]
pub struct DefinitionKeys {
    pub keys: Vec<Key>,
    /// Number of plural variants that were left out.
    pub plural_skipped: usize,
}

/// Read a definition file and return one [`Key`] per top-level field.
///
/// Values are never inspected, so nested objects and arrays are fine. Fields
/// whose name contains `plural_marker` are skipped. Keys keep the order they
/// have in the document.
pub fn parse_definition_file(path: &Path, plural_marker: &str) -> Result<DefinitionKeys> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    let Value::Object(map) = json else {
        bail!("Root of JSON file must be an object: {:?}", path);
    };

    let file_path = path.to_string_lossy().to_string();
    Ok(keys_from_object(&map, &file_path, plural_marker))
}

fn keys_from_object(
    map: &Map<String, Value>,
    file_path: &str,
    plural_marker: &str,
) -> DefinitionKeys {
    let mut result = DefinitionKeys::default();
    for name in map.keys() {
        if name.contains(plural_marker) {
            result.plural_skipped += 1;
            continue;
        }
        result.keys.push(Key::new(name.as_str(), file_path));
    }
    result
}
