//! Unified path management for Play With Magic storage.
//!
//! All configuration and record data live under platform-standard
//! directories resolved through the `dirs` crate, with a test override
//! for the data directory.

use std::path::{Path, PathBuf};

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves the directories used by the storage layer.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/playwithmagic/     # Config directory
/// └── config.toml              # Application configuration
///
/// ~/.local/share/playwithmagic/  # Data directory
/// ├── magicians/               # One JSON file per magician record
/// └── routines/                # One JSON file per routine record
/// ```
///
/// A custom base directory replaces the data directory (used by tests).
pub struct StoragePaths {
    base_dir: Option<PathBuf>,
}

impl StoragePaths {
    const APP_DIR: &'static str = "playwithmagic";

    /// Creates a path resolver, optionally rooted at a custom base
    /// directory instead of the platform data dir.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR).join("config.toml"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the data directory holding all record storage.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(Self::APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Returns the directory holding magician records.
    pub fn magicians_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("magicians"))
    }

    /// Returns the directory holding routine records.
    pub fn routines_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("routines"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let config_file = StoragePaths::config_file().unwrap();
        assert!(config_file.ends_with("playwithmagic/config.toml"));
    }

    #[test]
    fn test_data_dir_default() {
        let paths = StoragePaths::new(None);
        let data_dir = paths.data_dir().unwrap();
        assert!(data_dir.ends_with("playwithmagic"));
    }

    #[test]
    fn test_base_dir_override() {
        let paths = StoragePaths::new(Some(Path::new("/tmp/pwm-test")));
        assert_eq!(paths.data_dir().unwrap(), Path::new("/tmp/pwm-test"));
        assert!(paths.magicians_dir().unwrap().ends_with("magicians"));
        assert!(paths.routines_dir().unwrap().ends_with("routines"));
    }
}
