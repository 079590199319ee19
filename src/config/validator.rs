//! Config validation, run once before anything connects.

use crate::config::RosterConfig;
use crate::error::ConfigError;
use regex::Regex;
use std::sync::OnceLock;

fn ident_regex() -> &'static Regex {
    static IDENT: OnceLock<Regex> = OnceLock::new();
    IDENT.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_$]*$").expect("identifier pattern compiles"))
}

/// True if `name` can be used unquoted as a PostgreSQL identifier (max 63 bytes).
pub fn is_valid_identifier(name: &str) -> bool {
    name.len() <= 63 && ident_regex().is_match(name)
}

pub fn validate(config: &RosterConfig) -> Result<(), ConfigError> {
    let db = &config.database;
    if db.host.trim().is_empty() {
        return Err(ConfigError::Invalid {
            key: "DB_HOST",
            reason: "must not be empty".into(),
        });
    }
    if db.port == 0 {
        return Err(ConfigError::Invalid {
            key: "DB_PORT",
            reason: "must be non-zero".into(),
        });
    }
    if !is_valid_identifier(&db.name) {
        return Err(ConfigError::Invalid {
            key: "DB_NAME",
            reason: format!("{:?} is not a valid database identifier", db.name),
        });
    }
    if db.max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            reason: "must be at least 1".into(),
        });
    }
    let base = &config.server.api_base_url;
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            key: "API_BASE_URL",
            reason: format!("{:?} must start with http:// or https://", base),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&RosterConfig::default()).is_ok());
    }

    #[test]
    fn identifier_pattern_is_compiled_once() {
        assert!(std::ptr::eq(ident_regex(), ident_regex()));
    }

    #[test]
    fn identifiers() {
        assert!(is_valid_identifier("project_01"));
        assert!(is_valid_identifier("_school$1"));
        assert!(!is_valid_identifier("1school"));
        assert!(!is_valid_identifier("school; DROP"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier(&"a".repeat(64)));
    }

    #[test]
    fn rejects_bad_database_name() {
        let mut config = RosterConfig::default();
        config.database.name = "my-db".into();
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_NAME", .. }));
    }

    #[test]
    fn rejects_base_url_without_scheme() {
        let mut config = RosterConfig::default();
        config.server.api_base_url = "localhost:8000".into();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_empty_pool() {
        let mut config = RosterConfig::default();
        config.database.max_connections = 0;
        assert!(validate(&config).is_err());
    }
}
