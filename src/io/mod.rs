// src/io/mod.rs
pub mod pubchem;
pub mod xyz;

use crate::error::{MolviewError, Result};
use crate::model::Compound;
use std::path::Path;

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Loads a compound, choosing the reader from the file extension.
/// `.json` is a PubChem 3D record, `.xyz` a plain XYZ file.
pub fn load_compound(path: &Path) -> Result<Compound> {
    match extension_of(path).as_str() {
        "json" => pubchem::parse(path),
        "xyz" => xyz::parse(path),
        _ => Err(MolviewError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Like [`load_compound`], then takes title and formula from a PubChem
/// property table when one is given.
pub fn load_compound_with_properties(path: &Path, properties: Option<&Path>) -> Result<Compound> {
    let Some(props_path) = properties else {
        return load_compound(path);
    };
    match extension_of(path).as_str() {
        "json" => pubchem::parse_with_properties(path, props_path),
        _ => {
            let compound = load_compound(path)?;
            let props = pubchem::parse_properties(&std::fs::read_to_string(props_path)?)?;
            Ok(pubchem::apply_properties(compound, &props))
        }
    }
}
