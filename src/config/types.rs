//! Startup configuration: database connection and HTTP server settings.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_host")]
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
    #[serde(default = "default_db_name")]
    pub name: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_name() -> String {
    "project_01".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            name: default_db_name(),
            user: None,
            password: None,
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// Connect options for the configured database.
    pub fn connect_options(&self) -> PgConnectOptions {
        self.connect_options_for(&self.name)
    }

    /// Same server and credentials, different database (used to reach `postgres` for CREATE DATABASE).
    pub fn connect_options_for(&self, database: &str) -> PgConnectOptions {
        let mut opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(database);
        if let Some(ref user) = self.user {
            opts = opts.username(user);
        }
        if let Some(ref password) = self.password {
            opts = opts.password(password);
        }
        opts
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Public base URL clients use to reach the API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_body_limit() -> usize {
    64 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            api_base_url: default_api_base_url(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_development_setup() {
        let config = RosterConfig::default();
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.name, "project_01");
        assert_eq!(config.server.bind_addr, "127.0.0.1:8000");
    }

    #[test]
    fn password_is_never_serialized() {
        let config = DatabaseConfig {
            password: Some("hunter2".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn connect_options_carry_target_database() {
        let config = DatabaseConfig::default();
        assert_eq!(config.connect_options().get_database(), Some("project_01"));
        assert_eq!(config.connect_options_for("postgres").get_database(), Some("postgres"));
        assert_eq!(config.connect_options().get_port(), 5432);
    }
}
