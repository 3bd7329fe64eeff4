use std::path::Path;

/// Map catalog loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_catalog_load_error(
    error: &dyn std::error::Error,
    path: &Path,
) -> (String, String, String) {
    let error_string = error.to_string();

    if error_string.contains("Validation failed") {
        (
            "Validation Error".to_string(),
            "The catalog file has validation errors.".to_string(),
            error_string,
        )
    } else if error_string.contains("No such file") {
        (
            "File Not Found".to_string(),
            "The catalog file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        )
    } else if error_string.contains("Permission denied") {
        (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!(
                "You don't have permission to read this file:\n{}",
                path.display()
            ),
        )
    } else {
        (
            "Error Loading Catalog".to_string(),
            "Failed to load catalog file.".to_string(),
            error_string,
        )
    }
}

/// Map catalog saving errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_catalog_save_error(
    error: &dyn std::error::Error,
    path: &Path,
) -> (String, String, String) {
    let error_string = error.to_string();

    if error_string.contains("Permission denied") {
        (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!(
                "You don't have permission to write to:\n{}",
                path.display()
            ),
        )
    } else if error_string.contains("No space left") {
        (
            "Disk Full".to_string(),
            "Disk full.".to_string(),
            "There is no space left on the device to save the catalog.".to_string(),
        )
    } else {
        (
            "Error Saving Catalog".to_string(),
            "Failed to save catalog file.".to_string(),
            error_string,
        )
    }
}

/// Map image upload errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_upload_error(
    error: &dyn std::error::Error,
    bucket: &Path,
) -> (String, String, String) {
    // Upload failures arrive context-wrapped; the interesting text
    // (missing file, permission, disk) sits further down the chain.
    let error_string = error_chain_string(error);

    if error_string.contains("No such file") {
        (
            "Upload Failed".to_string(),
            "An image file could not be read.".to_string(),
            format!(
                "{}\n\nPlease verify the file exists and you have permission to read it.",
                error_string
            ),
        )
    } else if error_string.contains("Permission denied") {
        (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!(
                "You don't have permission to write to the bucket:\n{}",
                bucket.display()
            ),
        )
    } else if error_string.contains("No space left") {
        (
            "Disk Full".to_string(),
            "Disk full.".to_string(),
            "There is no space left on the device to store the images.".to_string(),
        )
    } else {
        (
            "Upload Error".to_string(),
            "Failed to upload images.".to_string(),
            error_string,
        )
    }
}

fn error_chain_string(error: &dyn std::error::Error) -> String {
    let mut parts = vec![error.to_string()];
    let mut source = error.source();
    while let Some(current) = source {
        parts.push(current.to_string());
        source = current.source();
    }
    parts.join(": ")
}
