//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub const DATA_DIR_VAR: &str = "FORMCRAFT_DATA_DIR";
pub const TOAST_MS_VAR: &str = "FORMCRAFT_TOAST_MS";
pub const DEMO_SEED_VAR: &str = "FORMCRAFT_DEMO_SEED";

const DEFAULT_DATA_DIR: &str = ".formcraft";
const DATABASE_FILE: &str = "formcraft.db";
const DEFAULT_TOAST_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the database file
    pub data_dir: PathBuf,
    /// How long a notification stays on screen
    pub toast_duration: Duration,
    /// Seed for the demo-data generator; entropy when unset
    pub demo_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(DEFAULT_DATA_DIR),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_MS),
            demo_seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration from `lookup`, which maps a variable name
    /// to its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|value| !value.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(TOAST_MS_VAR) {
            config.toast_duration = Duration::from_millis(parse_number(TOAST_MS_VAR, &raw)?);
        }
        if let Some(raw) = lookup(DEMO_SEED_VAR) {
            config.demo_seed = Some(parse_number(DEMO_SEED_VAR, &raw)?);
        }

        Ok(config)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

fn parse_number(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.toast_duration, Duration::from_millis(3000));
        assert_eq!(config.demo_seed, None);
        assert!(config.data_dir.ends_with(".formcraft"));
        assert!(config.database_path().ends_with("formcraft.db"));
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (DATA_DIR_VAR, "/tmp/forms"),
            (TOAST_MS_VAR, "1500"),
            (DEMO_SEED_VAR, " 99 "),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/forms"));
        assert_eq!(config.toast_duration, Duration::from_millis(1500));
        assert_eq!(config.demo_seed, Some(99));
    }

    #[test]
    fn rejects_invalid_numbers() {
        let err = AppConfig::from_lookup(lookup_from(&[(TOAST_MS_VAR, "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: TOAST_MS_VAR,
                value: "soon".into()
            }
        );
    }
}
