// Runtime configuration, read from the environment (and a .env file when present).

use crate::modules::properties::controller::RollbackPolicy;
use std::net::SocketAddr;
use thiserror::Error;

pub const BIND_ADDR: &str = "PROPERTIES_BIND_ADDR";
pub const ROLLBACK_POLICY: &str = "PROPERTIES_ROLLBACK_POLICY";
pub const SEED_DEMO: &str = "PROPERTIES_SEED_DEMO";
pub const STORE_LATENCY_MS: &str = "PROPERTIES_STORE_LATENCY_MS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub rollback_policy: RollbackPolicy,
    pub seed_demo: bool,
    pub store_latency_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: parse(&lookup, BIND_ADDR, DEFAULT_BIND_ADDR, |v| v.parse().ok())?,
            rollback_policy: parse(&lookup, ROLLBACK_POLICY, "rollback", |v| v.parse().ok())?,
            seed_demo: parse(&lookup, SEED_DEMO, "false", parse_flag)?,
            store_latency_ms: parse(&lookup, STORE_LATENCY_MS, "0", |v| v.parse().ok())?,
        })
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
    convert: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    let value = lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string());
    convert(&value).ok_or(ConfigError::Invalid { key, value })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod app_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.rollback_policy, RollbackPolicy::Rollback);
        assert!(!config.seed_demo);
        assert_eq!(config.store_latency_ms, 0);
    }

    #[rstest]
    fn it_should_read_every_setting() {
        let config = AppConfig::from_lookup(lookup(&[
            (BIND_ADDR, "127.0.0.1:9000"),
            (ROLLBACK_POLICY, "keep-optimistic"),
            (SEED_DEMO, "yes"),
            (STORE_LATENCY_MS, "250"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.rollback_policy, RollbackPolicy::KeepOptimistic);
        assert!(config.seed_demo);
        assert_eq!(config.store_latency_ms, 250);
    }

    #[rstest]
    #[case(BIND_ADDR, "nowhere")]
    #[case(ROLLBACK_POLICY, "sometimes")]
    #[case(SEED_DEMO, "maybe")]
    #[case(STORE_LATENCY_MS, "-1")]
    fn it_should_reject_invalid_values(#[case] key: &'static str, #[case] value: &str) {
        let result = AppConfig::from_lookup(lookup(&[(key, value)]));
        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                key,
                value: value.to_string()
            })
        );
    }
}
