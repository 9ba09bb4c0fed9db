use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use liturgia_core::{GridOptions, SeasonRules};
use liturgia_engine::EngineOptions;

/// Remote PostgREST table replacing the local SQLite store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub url: String,
    pub api_key: String,
}

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub database_url: String,
    pub remote: Option<RemoteConfig>,
    pub source_timeout: Duration,
    pub max_events_per_day: usize,
    pub upcoming_days: u32,
    pub season_rules: SeasonRules,
}

impl Config {
    /// Load configuration from environment variables.
    /// DATABASE_URL defaults to "sqlite://liturgia.db"
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from any variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let set = |var: &str| get(var).filter(|v| !v.trim().is_empty());

        let listen_addr = set("LITURGIA_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|_| {
                ConfigError::Invalid("LITURGIA_LISTEN_ADDR", "must be a valid socket address")
            })?;

        let database_url =
            set("DATABASE_URL").unwrap_or_else(|| "sqlite://liturgia.db".to_string());

        let remote = match (set("LITURGIA_REMOTE_URL"), set("LITURGIA_REMOTE_KEY")) {
            (Some(url), Some(api_key)) => Some(RemoteConfig { url, api_key }),
            (Some(_), None) => {
                return Err(ConfigError::Invalid(
                    "LITURGIA_REMOTE_KEY",
                    "required when LITURGIA_REMOTE_URL is set",
                ))
            }
            (None, _) => None,
        };

        let timeout_ms: u64 = match set("LITURGIA_SOURCE_TIMEOUT_MS") {
            Some(v) => v.parse().map_err(|_| {
                ConfigError::Invalid("LITURGIA_SOURCE_TIMEOUT_MS", "must be milliseconds (u64)")
            })?,
            None => 5000,
        };
        if timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "LITURGIA_SOURCE_TIMEOUT_MS",
                "must be greater than zero",
            ));
        }

        let max_events_per_day = match set("LITURGIA_MAX_EVENTS_PER_DAY") {
            Some(v) => v.parse().map_err(|_| {
                ConfigError::Invalid("LITURGIA_MAX_EVENTS_PER_DAY", "must be a non-negative integer")
            })?,
            None => GridOptions::default().max_per_day,
        };

        let upcoming_days = match set("LITURGIA_UPCOMING_DAYS") {
            Some(v) => v.parse().map_err(|_| {
                ConfigError::Invalid("LITURGIA_UPCOMING_DAYS", "must be a non-negative integer")
            })?,
            None => 30,
        };

        let season_rules = match set("LITURGIA_SEASON_RULES") {
            Some(v) => v.parse().map_err(|_| {
                ConfigError::Invalid("LITURGIA_SEASON_RULES", "must be 'fixed' or 'computus'")
            })?,
            None => SeasonRules::default(),
        };

        Ok(Config {
            listen_addr,
            database_url,
            remote,
            source_timeout: Duration::from_millis(timeout_ms),
            max_events_per_day,
            upcoming_days,
            season_rules,
        })
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            season_rules: self.season_rules,
            source_timeout: self.source_timeout,
            upcoming_days: self.upcoming_days,
            grid: GridOptions {
                max_per_day: self.max_events_per_day,
                ..GridOptions::default()
            },
            ..EngineOptions::default()
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.database_url, "sqlite://liturgia.db");
        assert!(config.remote.is_none());
        assert_eq!(config.source_timeout, Duration::from_secs(5));
        assert_eq!(config.max_events_per_day, 2);
        assert_eq!(config.upcoming_days, 30);
        assert_eq!(config.season_rules, SeasonRules::FixedMonths);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("LITURGIA_REMOTE_URL", "https://example.org"),
            ("LITURGIA_REMOTE_KEY", "anon"),
            ("LITURGIA_SOURCE_TIMEOUT_MS", "1500"),
            ("LITURGIA_MAX_EVENTS_PER_DAY", "4"),
            ("LITURGIA_SEASON_RULES", "computus"),
        ])
        .unwrap();
        assert_eq!(config.remote.as_ref().unwrap().api_key, "anon");
        let options = config.engine_options();
        assert_eq!(options.source_timeout, Duration::from_millis(1500));
        assert_eq!(options.grid.max_per_day, 4);
        assert_eq!(options.season_rules, SeasonRules::Computus);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            load(&[("LITURGIA_REMOTE_URL", "https://example.org")]).unwrap_err(),
            ConfigError::Invalid(
                "LITURGIA_REMOTE_KEY",
                "required when LITURGIA_REMOTE_URL is set"
            )
        );
        assert!(load(&[("LITURGIA_LISTEN_ADDR", "nowhere")]).is_err());
        assert!(load(&[("LITURGIA_SOURCE_TIMEOUT_MS", "0")]).is_err());
        assert!(load(&[("LITURGIA_SEASON_RULES", "lunar")]).is_err());
        assert!(load(&[("LITURGIA_UPCOMING_DAYS", "-3")]).is_err());
    }
}
