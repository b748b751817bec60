use facets_core::FacetsError;
use std::io::ErrorKind;
use std::path::Path;

/// Map landscape loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_file_load_error(error: &FacetsError, path: &Path) -> (String, String, String) {
    match error {
        FacetsError::Io(io) if io.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        ),
        FacetsError::Io(io) if io.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        FacetsError::Json(err) => (
            "Invalid JSON".to_string(),
            "The landscape file is not valid JSON.".to_string(),
            format!("{}: {}", path.display(), err),
        ),
        FacetsError::Schema(errors) => (
            "Schema Error".to_string(),
            "The landscape file does not match the expected format.".to_string(),
            numbered(errors),
        ),
        FacetsError::Validation(errors) => (
            "Validation Error".to_string(),
            "The landscape file has validation errors.".to_string(),
            numbered(errors),
        ),
        other => (
            "Error Loading File".to_string(),
            "Failed to load landscape file.".to_string(),
            other.to_string(),
        ),
    }
}

fn numbered(errors: &[String]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| format!("  {}. {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_not_found() {
        let error = FacetsError::Io(io::Error::new(ErrorKind::NotFound, "missing"));
        let (title, _, details) = map_file_load_error(&error, Path::new("/tmp/landscape.json"));

        assert_eq!(title, "File Not Found");
        assert!(details.contains("/tmp/landscape.json"));
    }

    #[test]
    fn test_validation_errors_are_numbered() {
        let error = FacetsError::Validation(vec!["first".to_string(), "second".to_string()]);
        let (title, _, details) = map_file_load_error(&error, Path::new("x.json"));

        assert_eq!(title, "Validation Error");
        assert_eq!(details, "  1. first\n  2. second");
    }

    #[test]
    fn test_other_io_error() {
        let error = FacetsError::Io(io::Error::new(ErrorKind::Other, "disk on fire"));
        let (title, _, details) = map_file_load_error(&error, Path::new("x.json"));

        assert_eq!(title, "Error Loading File");
        assert!(details.contains("disk on fire"));
    }
}
