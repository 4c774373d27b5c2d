// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::generators::password::MAX_PASSWORD_LENGTH;
use crate::generators::snippets::DEFAULT_TABLE_PREFIX;
use crate::models::HashVariant;

// Configuration for the password tool
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,

    // Hashing
    pub hash_variant: HashVariant,
    pub hash_debounce: Duration,

    // Snippets
    pub default_table_prefix: String,

    // Preferences
    pub preferences_dir: Option<PathBuf>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,

            // Hashing
            hash_variant: HashVariant::TwoY,
            hash_debounce: Duration::from_millis(500),

            // Snippets
            default_table_prefix: DEFAULT_TABLE_PREFIX.to_string(),

            // Preferences
            preferences_dir: None, // Will be initialized in load()

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Runs before the logger exists, so rejected values come back as
    /// warnings for the caller to log once logging is up.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        config.preferences_dir = crate::utils::get_app_config_dir();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(length) if (1..=MAX_PASSWORD_LENGTH).contains(&length) => {
                    config.default_password_length = length
                }
                _ => warnings.push(format!(
                    "Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}', using {}",
                    val, config.default_password_length
                )),
            }
        }

        // Hashing
        if let Some(val) = lookup("HASH_VARIANT") {
            match val.parse() {
                Ok(variant) => config.hash_variant = variant,
                Err(e) => warnings.push(format!("Ignoring HASH_VARIANT: {}, using {}", e, config.hash_variant)),
            }
        }

        if let Some(val) = lookup("HASH_DEBOUNCE_MS") {
            match val.trim().parse::<u64>() {
                Ok(ms) => config.hash_debounce = Duration::from_millis(ms),
                Err(_) => warnings.push(format!(
                    "Ignoring invalid HASH_DEBOUNCE_MS '{}', using {}",
                    val,
                    config.hash_debounce.as_millis()
                )),
            }
        }

        // Snippets
        if let Some(prefix) = lookup("DEFAULT_TABLE_PREFIX") {
            if !prefix.trim().is_empty() {
                config.default_table_prefix = prefix.trim().to_string();
            }
        }

        // Preferences
        if let Some(dir) = lookup("PREFERENCES_DIR") {
            config.preferences_dir = Some(PathBuf::from(dir));
        }
        if config.preferences_dir.is_none() {
            warnings.push("Could not determine config directory; theme changes will not be saved".to_string());
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.trim().to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!(
                    "Ignoring invalid LOG_LEVEL '{}', using {}",
                    level,
                    config.log_level.as_str().to_lowercase()
                )),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }

    pub fn preferences_file(&self) -> Option<PathBuf> {
        self.preferences_dir
            .as_ref()
            .map(|dir| dir.join("preferences.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_wordpress_conventions() {
        let config = Config::default();
        assert_eq!(config.default_table_prefix, "wp_");
        assert_eq!(config.hash_variant, HashVariant::TwoY);
        assert_eq!(config.hash_debounce, Duration::from_millis(500));
        assert_eq!(config.default_password_length, 16);
        assert!(config.preferences_file().is_none());
    }

    #[test]
    fn preferences_file_lives_in_preferences_dir() {
        let config = Config {
            preferences_dir: Some(PathBuf::from("/tmp/prefs")),
            ..Config::default()
        };
        assert_eq!(
            config.preferences_file(),
            Some(PathBuf::from("/tmp/prefs/preferences.json"))
        );
    }

    fn load_from(vars: &[(&str, &str)]) -> (Config, Vec<String>) {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn invalid_values_fall_back_with_warnings() {
        let (config, warnings) = load_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "abc"),
            ("HASH_VARIANT", "2x"),
            ("HASH_DEBOUNCE_MS", "soon"),
            ("LOG_LEVEL", "loud"),
            ("PREFERENCES_DIR", "/tmp/prefs"),
        ]);

        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.hash_variant, HashVariant::TwoY);
        assert_eq!(config.hash_debounce, Duration::from_millis(500));
        assert_eq!(config.log_level, LevelFilter::Warn);

        assert_eq!(warnings.len(), 4, "{:?}", warnings);
        assert!(warnings.iter().any(|w| w.contains("DEFAULT_PASSWORD_LENGTH 'abc'")));
        assert!(warnings.iter().any(|w| w.contains("'2x'")));
        assert!(warnings.iter().any(|w| w.contains("HASH_DEBOUNCE_MS 'soon'")));
        assert!(warnings.iter().any(|w| w.contains("LOG_LEVEL 'loud'")));
    }

    #[test]
    fn valid_values_load_without_warnings() {
        let (config, warnings) = load_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("HASH_VARIANT", "2b"),
            ("HASH_DEBOUNCE_MS", "250"),
            ("DEFAULT_TABLE_PREFIX", "blog_"),
            ("LOG_LEVEL", "debug"),
            ("PREFERENCES_DIR", "/tmp/prefs"),
        ]);

        assert!(warnings.is_empty(), "{:?}", warnings);
        assert_eq!(config.default_password_length, 24);
        assert_eq!(config.hash_variant, HashVariant::TwoB);
        assert_eq!(config.hash_debounce, Duration::from_millis(250));
        assert_eq!(config.default_table_prefix, "blog_");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn oversized_default_length_is_rejected() {
        let (config, warnings) = load_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "100000000000000"),
            ("PREFERENCES_DIR", "/tmp/prefs"),
        ]);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(warnings.len(), 1);
    }
}
