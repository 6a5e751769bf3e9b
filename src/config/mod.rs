use crate::error::{EchoError, Result};
use dashmap::DashMap;
use std::env;
use std::str::FromStr;
use std::sync::Arc;

/// Configuration service
///
/// A snapshot of key/value settings, loaded from the process environment by
/// [`ConfigService::new`].
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::from_pairs(env::vars())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let service = Self::default();
        for (key, value) in pairs {
            service.set(key.as_ref(), value.as_ref());
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse `key` into `T`, falling back to `default` when the key is unset.
    pub fn get_parsed<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|e: T::Err| EchoError::InvalidConfig {
                key: key.to_string(),
                message: format!("'{}': {}", raw, e),
            }),
        }
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Settings for the HTTP listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 3000;
    pub const DEFAULT_LOG_FILTER: &'static str = "info";

    /// Read `HOST`, `PORT` and `RUST_LOG`.
    pub fn from_config(config: &ConfigService) -> Result<Self> {
        Ok(Self {
            host: config.get_or("HOST", Self::DEFAULT_HOST),
            port: config.get_parsed("PORT", Self::DEFAULT_PORT)?,
            log_filter: config.get_or("RUST_LOG", Self::DEFAULT_LOG_FILTER),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigService::from_pairs(Vec::<(String, String)>::new());
        let server = ServerConfig::from_config(&config).unwrap();
        assert_eq!(server, ServerConfig::default());
        assert_eq!(server.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = ConfigService::from_pairs([
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("RUST_LOG", "debug"),
        ]);
        let server = ServerConfig::from_config(&config).unwrap();
        assert_eq!(server.addr(), "127.0.0.1:8080");
        assert_eq!(server.log_filter, "debug");
    }

    #[test]
    fn test_invalid_port() {
        let config = ConfigService::from_pairs([("PORT", "http")]);
        let err = ServerConfig::from_config(&config).unwrap_err();
        assert!(matches!(err, EchoError::InvalidConfig { ref key, .. } if key == "PORT"));
    }

    #[test]
    fn test_set_and_get() {
        let config = ConfigService::default();
        assert_eq!(config.get("GREETING"), None);
        config.set("GREETING", "hello");
        assert_eq!(config.get("GREETING").as_deref(), Some("hello"));
    }
}
