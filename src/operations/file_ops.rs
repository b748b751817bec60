use anyhow::anyhow;
use std::path::Path;

use crate::errors::map_file_load_error;
use crate::state::AppState;

/// Load a landscape file into the session, turning failures into readable errors
pub fn load_file(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    match state.load_from_file(path.to_path_buf()) {
        Ok(()) => {
            log::debug!("session ready with groups {:?}", state.group_names());
            Ok(())
        }
        Err(e) => {
            let (title, message, details) = map_file_load_error(&e, path);
            Err(anyhow!("{}: {}\n{}", title, message, details))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_file_reports_mapped_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::new();

        let err = load_file(&mut state, &dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().starts_with("File Not Found"));
        assert!(state.data.is_none());
    }

    #[test]
    fn test_load_file_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landscape.json");
        std::fs::write(&path, r#"{"foundation": "CNCF", "items": [{"name": "a"}]}"#).unwrap();

        let mut state = AppState::new();
        load_file(&mut state, &path).unwrap();
        assert_eq!(state.group_names(), vec![facets_core::DEFAULT_GROUP]);
    }
}
