use crate::error::{FacetsError, Result};
use crate::models::LandscapeData;
use crate::schema_validation::validate_landscape_document;
use crate::validation::validate_landscape;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a landscape dataset from a JSON file.
/// The document is checked against the bundled schema, then validated.
pub fn load_landscape<P: AsRef<Path>>(path: P) -> Result<LandscapeData> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let data = parse_landscape(&contents)?;

    log::info!(
        "loaded {} items in {} groups from {}",
        data.items.len(),
        data.groups.len(),
        path.display()
    );

    Ok(data)
}

/// Parse and validate a landscape dataset from JSON text
pub fn parse_landscape(contents: &str) -> Result<LandscapeData> {
    let document: Value = serde_json::from_str(contents)?;
    validate_landscape_document(&document).map_err(FacetsError::Schema)?;

    let data: LandscapeData = serde_json::from_value(document)?;
    validate_landscape(&data).map_err(FacetsError::Validation)?;

    Ok(data)
}

/// Save a landscape dataset to a JSON file with pretty printing
pub fn save_landscape<P: AsRef<Path>>(data: &LandscapeData, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}
