//! Console configuration
//!
//! Loaded from `$HACKDESK_CONFIG` if set, otherwise from `hackdesk.toml` in
//! the platform config directory. A missing file means defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use hackdesk_core::{roster, MealTracker};
use serde::Deserialize;

use crate::error::{AppError, Result};

pub const CONFIG_ENV: &str = "HACKDESK_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
    pub tracker: TrackerConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Roster file (`.toml` or `.json`) to seed every session with
    pub roster: Option<PathBuf>,
    /// Seed the demo participants when no roster is configured
    pub sample_roster: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            tracker: TrackerConfig::default(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            roster: None,
            sample_roster: true,
        }
    }
}

impl AppConfig {
    /// Where the config file is expected to live
    pub fn locate() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("dev", "hackdesk", "hackdesk")?;
        Some(dirs.config_dir().join("hackdesk.toml"))
    }

    /// Load the config, falling back to defaults when there is no file
    pub fn load() -> Result<Self> {
        match Self::locate() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the tracker every new session starts from
    pub fn seed_tracker(&self) -> Result<MealTracker> {
        if let Some(path) = &self.tracker.roster {
            return Ok(roster::load_tracker(path)?);
        }
        if self.tracker.sample_roster {
            Ok(MealTracker::sample())
        } else {
            Ok(MealTracker::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.seed_tracker().unwrap().len(), 2);
    }

    #[test]
    fn test_load_with_roster() {
        let dir = tempfile::tempdir().unwrap();
        let roster_path = dir.path().join("roster.json");
        std::fs::write(
            &roster_path,
            r#"[{"id": "p1", "name": "Linus", "email": "linus@kernel.org", "team": "Kernel"}]"#,
        )
        .unwrap();

        let config_path = dir.path().join("hackdesk.toml");
        std::fs::write(
            &config_path,
            format!(
                "log_filter = \"debug\"\n[tracker]\nroster = {:?}\n",
                roster_path.display().to_string()
            ),
        )
        .unwrap();

        let config = AppConfig::load_from(&config_path).unwrap();
        assert_eq!(config.log_filter, "debug");
        let tracker = config.seed_tracker().unwrap();
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.participants()[0].name, "Linus");
    }

    #[test]
    fn test_no_sample_roster() {
        let config: AppConfig = toml::from_str("[tracker]\nsample_roster = false\n").unwrap();
        assert!(config.seed_tracker().unwrap().is_empty());
    }

    #[test]
    fn test_bad_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hackdesk.toml");
        std::fs::write(&path, "log_filter = [").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
        assert!(err.to_string().contains("hackdesk.toml"));
    }
}
