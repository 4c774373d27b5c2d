// src/core/preferences.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{Preferences, Theme};

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Could not determine a directory for preferences")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, PreferencesError>;

/// The single key-value preference file.
///
/// A store without a path keeps everything in memory; `save` on it fails
/// with `NoConfigDir`.
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: Option<PathBuf>,
}

impl PreferencesStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // Missing or unreadable files fall back to defaults
    pub fn load(&self) -> Preferences {
        let Some(path) = &self.path else {
            return Preferences::default();
        };

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(prefs) => prefs,
                Err(e) => {
                    log::warn!("Ignoring malformed preferences file {}: {}", path.display(), e);
                    Preferences::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Preferences::default(),
            Err(e) => {
                log::warn!("Could not read preferences file {}: {}", path.display(), e);
                Preferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let path = self.path.as_ref().ok_or(PreferencesError::NoConfigDir)?;

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, serde_json::to_string_pretty(prefs)?)?;
        log::debug!("Saved preferences to {}", path.display());
        Ok(())
    }

    pub fn load_theme(&self) -> Theme {
        self.load().theme
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        let mut prefs = self.load();
        prefs.theme = theme;
        self.save(&prefs)
    }
}
