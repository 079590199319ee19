//! Build `RosterConfig` from the process environment (and a `.env` file when present).

use crate::config::{validate, DatabaseConfig, RosterConfig, ServerConfig};
use crate::error::ConfigError;
use std::str::FromStr;

impl RosterConfig {
    /// Load `.env`, read the environment once, and validate. Call at startup and pass the result down.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::Load(e.to_string())),
        }
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        validate(&config)?;
        Ok(config)
    }

    /// Build from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_defaults = DatabaseConfig::default();
        let server_defaults = ServerConfig::default();
        let database = DatabaseConfig {
            host: lookup("DB_HOST").unwrap_or(db_defaults.host),
            port: parse_or(&lookup, "DB_PORT", db_defaults.port)?,
            name: lookup("DB_NAME").unwrap_or(db_defaults.name),
            user: lookup("DB_USER").filter(|s| !s.is_empty()),
            password: lookup("DB_PASSWORD").filter(|s| !s.is_empty()),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", db_defaults.max_connections)?,
        };
        let server = ServerConfig {
            bind_addr: lookup("BIND_ADDR").unwrap_or(server_defaults.bind_addr),
            api_base_url: lookup("API_BASE_URL").unwrap_or(server_defaults.api_base_url),
            body_limit_bytes: parse_or(&lookup, "BODY_LIMIT_BYTES", server_defaults.body_limit_bytes)?,
        };
        Ok(RosterConfig { database, server })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: format!("{:?}: {}", raw, e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = RosterConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database.name, "project_01");
        assert!(config.database.user.is_none());
        assert_eq!(config.server.api_base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = RosterConfig::from_lookup(lookup_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_NAME", "school"),
            ("DB_USER", "registrar"),
            ("DB_PASSWORD", "secret"),
            ("BIND_ADDR", "0.0.0.0:9000"),
        ]))
        .unwrap();
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.name, "school");
        assert_eq!(config.database.user.as_deref(), Some("registrar"));
        assert_eq!(config.database.password.as_deref(), Some("secret"));
        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn unparsable_port_is_reported_with_its_key() {
        let err = RosterConfig::from_lookup(lookup_from(&[("DB_PORT", "fifty")])).unwrap_err();
        match err {
            ConfigError::Invalid { key, .. } => assert_eq!(key, "DB_PORT"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
