use serde_json::Value;
use std::sync::LazyLock;

const LANDSCAPE_SCHEMA_SOURCE: &str = include_str!("../schema/landscape.schema.json");

static LANDSCAPE_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    serde_json::from_str(LANDSCAPE_SCHEMA_SOURCE).expect("bundled landscape schema is valid JSON")
});

/// JSON Schema describing landscape dataset files
pub fn landscape_schema() -> &'static Value {
    &LANDSCAPE_SCHEMA
}

/// Validate a raw landscape document against the bundled schema
pub fn validate_landscape_document(data: &Value) -> Result<(), Vec<String>> {
    validate_against_schema(landscape_schema(), data)
}

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with the validation error if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    match compiled.validate(data) {
        Ok(()) => Ok(()),
        Err(error) => {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            Err(vec![format!("{} at {}", error, location)])
        }
    }
}
