//! Shell configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use jobcrew_session::ThemeMode;

use crate::error::CoreError;
use crate::Result;

const DATA_DIR_ENV: &str = "JOBCREW_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the key-value database file
    pub database_path: PathBuf,
    /// Splash time before the session is restored
    pub restore_delay_ms: u64,
    /// Display mode at launch
    pub initial_theme: ThemeMode,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("jobcrew.db"),
            restore_delay_ms: 0,
            initial_theme: ThemeMode::Light,
        }
    }

    /// Load from a JSON file; missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn restore_delay(&self) -> Duration {
        Duration::from_millis(self.restore_delay_ms)
    }

    pub fn data_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            return PathBuf::from(dir);
        }

        dirs::data_local_dir()
            .map(|d| d.join("JobCrew"))
            .unwrap_or_else(|| PathBuf::from(".jobcrew"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_new_config() {
        let config = Config::new(PathBuf::from("/tmp/jobcrew"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/jobcrew/jobcrew.db"));
        assert_eq!(config.restore_delay(), Duration::ZERO);
        assert_eq!(config.initial_theme, ThemeMode::Light);
    }

    #[test]
    fn test_partial_json() {
        let config: Config =
            serde_json::from_str(r#"{"restore_delay_ms": 1000, "initial_theme": "dark"}"#)
                .unwrap();
        assert_eq!(config.restore_delay(), Duration::from_secs(1));
        assert!(config.initial_theme.is_dark());
        assert!(config.database_path.ends_with("jobcrew.db"));
    }

    #[test]
    fn test_from_file_reports_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_from_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"database_path": "/srv/jobcrew/app.db"}"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/srv/jobcrew/app.db"));
        assert_eq!(config.restore_delay_ms, 0);
    }
}
