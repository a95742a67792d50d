use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_log_level(env::var("LOG_LEVEL").ok())
    }

    pub fn from_log_level(log_level: Option<String>) -> Self {
        Config {
            log_level: log_level.unwrap_or_else(|| "warn".to_string()),
        }
    }

    /// Strict parse of `log_level`, for reporting a bad value.
    pub fn parse_level(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(self.log_level.trim())
            .with_context(|| format!("Invalid LOG_LEVEL value: {}", self.log_level))
    }

    /// Unparsable values fall back to `warn`.
    pub fn level_filter(&self) -> LevelFilter {
        self.parse_level().unwrap_or(LevelFilter::Warn)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_log_level(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        let config = Config::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_unset_level_uses_default() {
        assert_eq!(Config::from_log_level(None), Config::default());
    }

    #[test]
    fn test_level_parsing_is_case_insensitive() {
        let config = Config::from_log_level(Some(" DEBUG ".to_string()));
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert!(config.parse_level().is_ok());
    }

    #[test]
    fn test_invalid_level_falls_back_to_warn() {
        let config = Config::from_log_level(Some("verbose".to_string()));
        assert_eq!(config.level_filter(), LevelFilter::Warn);

        let err = config.parse_level().unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }

    // only test in the crate that touches LOG_LEVEL
    #[test]
    fn test_from_env_reads_log_level() {
        env::set_var("LOG_LEVEL", "verbose");
        let invalid = Config::from_env();
        env::set_var("LOG_LEVEL", "trace");
        let valid = Config::from_env();
        env::remove_var("LOG_LEVEL");
        let unset = Config::from_env();

        assert_eq!(invalid.log_level, "verbose");
        assert_eq!(invalid.level_filter(), LevelFilter::Warn);
        assert_eq!(valid.level_filter(), LevelFilter::Trace);
        assert_eq!(unset, Config::default());
    }
}
