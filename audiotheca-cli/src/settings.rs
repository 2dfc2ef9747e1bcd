//! User settings (database location, report currency).
//!
//! The settings file is `~/.config/audiotheca/settings.toml`. A missing file
//! means defaults; an unreadable one is reported and then ignored.

use std::io;
use std::path::{Path, PathBuf};

use audiotheca_report::ReportOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub database: DatabaseSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DatabaseSettings {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ReportSettings {
    pub currency: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            currency: ReportOptions::default().currency,
        }
    }
}

impl Settings {
    /// Load from the canonical settings path.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Load from `path`, falling back to defaults with a warning on bad input.
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match toml::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write to `path` atomically through a temporary file.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(self).map_err(io::Error::other)?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            currency: self.report.currency.clone(),
        }
    }

    /// Resolve the database path using a priority chain:
    ///
    /// 1. `--db` flag (if `Some`)
    /// 2. `database.path` in `settings.toml`
    /// 3. `<data_dir>/audiotheca/collection.db`
    pub fn resolve_db_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.database.path.clone())
            .unwrap_or_else(default_db_path)
    }
}

/// Canonical path to the settings file: `~/.config/audiotheca/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("audiotheca").join("settings.toml")
}

pub(crate) fn default_db_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("audiotheca").join("collection.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load_from(&tmp.path().join("settings.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.report.currency, "₽");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[report]\ncurrency = \"EUR\"\n").unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.report.currency, "EUR");
        assert_eq!(settings.database.path, None);
    }

    #[test]
    fn invalid_file_falls_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[database\npath = ").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("settings.toml");
        let settings = Settings {
            database: DatabaseSettings {
                path: Some(PathBuf::from("/srv/music/collection.db")),
            },
            report: ReportSettings {
                currency: "USD".to_string(),
            },
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn db_path_priority() {
        let settings = Settings {
            database: DatabaseSettings {
                path: Some(PathBuf::from("from-settings.db")),
            },
            ..Default::default()
        };
        assert_eq!(
            settings.resolve_db_path(Some(PathBuf::from("flag.db"))),
            PathBuf::from("flag.db")
        );
        assert_eq!(settings.resolve_db_path(None), PathBuf::from("from-settings.db"));
        assert_eq!(
            Settings::default().resolve_db_path(None),
            default_db_path()
        );
    }
}
