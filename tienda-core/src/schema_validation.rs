use crate::schema::catalog_schema;
use serde_json::Value;

/// Validate data against a JSON Schema
/// Returns Ok(()) if valid, Err with the list of validation errors if invalid.
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    // Compile the JSON Schema
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    // Collect every violation with its instance path
    let errors: Vec<String> = compiled
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a raw catalog document against the embedded catalog schema.
pub fn validate_catalog_json(data: &Value) -> Result<(), Vec<String>> {
    validate_against_schema(&catalog_schema(), data)
}
