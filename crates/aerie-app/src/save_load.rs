//! Save-file persistence for the player state.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use aerie_core::error::SimError;
use aerie_core::state::SaveState;

#[derive(Debug)]
pub enum SaveError {
    /// The file could not be read or written.
    Io(io::Error),
    /// The file was read but its contents are not a valid save.
    Format(SimError),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "save file I/O failed: {e}"),
            SaveError::Format(e) => write!(f, "save file rejected: {e}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            SaveError::Format(e) => Some(e),
        }
    }
}

impl From<io::Error> for SaveError {
    fn from(e: io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<SimError> for SaveError {
    fn from(e: SimError) -> Self {
        SaveError::Format(e)
    }
}

/// Write `state` as pretty JSON, creating parent directories as needed.
pub fn save_to_file(path: &Path, state: &SaveState) -> Result<(), SaveError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let json = state.to_json()?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_from_file(path: &Path) -> Result<SaveState, SaveError> {
    let json = fs::read_to_string(path)?;
    Ok(SaveState::from_json(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slots").join("slot1.json");

        let state = SaveState {
            position: DVec3::new(5.0, 1.0, 5.0),
        };
        save_to_file(&path, &state).unwrap();
        let loaded = load_from_file(&path).unwrap();
        assert_eq!(loaded, state);

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["position"], serde_json::json!([5.0, 1.0, 5.0]));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SaveError::Io(_)));
    }

    #[test]
    fn load_malformed_file_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"position": "up"}"#).unwrap();
        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, SaveError::Format(SimError::MalformedSave(_))));
        assert!(err.to_string().starts_with("save file rejected"));
    }
}
