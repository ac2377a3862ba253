use std::str::FromStr;

use crate::application::services::ActivityLimits;
use crate::application::use_cases::pagination::MAX_PAGE_SIZE;

/// Upper bound for every feed and top-list cap.
const MAX_CAP: usize = MAX_PAGE_SIZE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend: {}", other)),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} not set", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub database_pool_size: u32,
    pub server_port: u16,
    pub seed_on_startup: bool,
    pub activity_limits: ActivityLimits,
    pub top_matches_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ActivityLimits::default();
        let store_backend = parse_or(&lookup, "STORE_BACKEND", StoreBackend::Postgres)?;
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        Ok(Self {
            store_backend,
            database_url,
            database_pool_size: parse_or(&lookup, "DATABASE_POOL_SIZE", 10)?,
            server_port: parse_or(&lookup, "SERVER_PORT", 3000)?,
            seed_on_startup: parse_flag(&lookup, "SEED_ON_STARTUP", true)?,
            activity_limits: ActivityLimits {
                emails: parse_cap(&lookup, "ACTIVITY_EMAIL_CAP", defaults.emails)?,
                matches: parse_cap(&lookup, "ACTIVITY_MATCH_CAP", defaults.matches)?,
                submissions: parse_cap(&lookup, "ACTIVITY_SUBMISSION_CAP", defaults.submissions)?,
                total: parse_cap(&lookup, "ACTIVITY_TOTAL_CAP", defaults.total)?,
            },
            top_matches_limit: parse_cap(&lookup, "TOP_MATCHES_LIMIT", 5)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

fn parse_cap<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let cap = parse_or(lookup, key, default)?;
    if cap > MAX_CAP {
        return Err(ConfigError::Invalid {
            key,
            value: cap.to_string(),
        });
    }
    Ok(cap)
}

fn parse_flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("DATABASE_URL", "postgres://localhost/benchpilot")]).unwrap();

        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.database_pool_size, 10);
        assert!(config.seed_on_startup);
        assert_eq!(config.activity_limits, ActivityLimits::default());
        assert_eq!(config.top_matches_limit, 5);
    }

    #[test]
    fn test_postgres_requires_database_url() {
        assert!(matches!(
            config(&[]),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
    }

    #[test]
    fn test_memory_backend_without_database() {
        let config = config(&[
            ("STORE_BACKEND", "memory"),
            ("SEED_ON_STARTUP", "no"),
            ("ACTIVITY_TOTAL_CAP", "20"),
        ])
        .unwrap();

        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert!(!config.seed_on_startup);
        assert_eq!(config.activity_limits.total, 20);
        assert_eq!(config.activity_limits.emails, 5);
    }

    #[test]
    fn test_invalid_number_is_reported() {
        let result = config(&[("STORE_BACKEND", "memory"), ("SERVER_PORT", "eighty")]);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "SERVER_PORT", .. })
        ));
    }

    #[test]
    fn test_caps_are_bounded() {
        let huge = usize::MAX.to_string();
        for key in ["ACTIVITY_EMAIL_CAP", "ACTIVITY_TOTAL_CAP", "TOP_MATCHES_LIMIT"] {
            let result = config(&[("STORE_BACKEND", "memory"), (key, huge.as_str())]);
            assert!(
                matches!(result, Err(ConfigError::Invalid { key: k, .. }) if k == key),
                "{}",
                key
            );
        }

        let result = config(&[("STORE_BACKEND", "memory"), ("ACTIVITY_MATCH_CAP", "101")]);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));

        let config = config(&[("STORE_BACKEND", "memory"), ("ACTIVITY_MATCH_CAP", "100")]).unwrap();
        assert_eq!(config.activity_limits.matches, 100);
    }
}
