//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEV_AUTH_TOKEN,
};
use crate::errors::{AppError, AppResult};

/// Application configuration.
///
/// Built once at process start and handed to the components that need it;
/// request handling never reads the environment.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    auth_token: String,
    pub log_dir: Option<PathBuf>,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("db_max_connections", &self.db_max_connections)
            .field("auth_token", &"[REDACTED]")
            .field("log_dir", &self.log_dir)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Create a configuration with defaults for everything but the store and token.
    pub fn new(database_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            auth_token: auth_token.into(),
            log_dir: None,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }

    /// Load configuration from environment variables (and `.env`, if present).
    ///
    /// # Errors
    /// Fails when no auth token is configured in a release build, or when the
    /// token is blank.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_token = match lookup("AUTH_TOKEN").or_else(|| lookup("SECRET_KEY")) {
            Some(token) => token,
            None if cfg!(debug_assertions) => DEV_AUTH_TOKEN.to_string(),
            None => {
                return Err(AppError::internal(
                    "AUTH_TOKEN environment variable must be set in production",
                ))
            }
        };

        if auth_token.trim().is_empty() {
            return Err(AppError::internal("AUTH_TOKEN must not be blank"));
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            auth_token,
            log_dir: lookup("LOG_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        })
    }

    /// The shared secret every request must present.
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// True when running on the built-in development token.
    pub fn uses_dev_token(&self) -> bool {
        self.auth_token == DEV_AUTH_TOKEN
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_reads_all_keys() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/users"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("AUTH_TOKEN", "s3cret"),
            ("LOG_DIR", "/var/log/twm"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "9000"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "postgres://db/users");
        assert_eq!(config.db_max_connections, 4);
        assert_eq!(config.auth_token(), "s3cret");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/twm")));
        assert_eq!(config.server_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_secret_key_is_accepted_as_token_fallback() {
        let config = Config::from_lookup(lookup_from(&[("SECRET_KEY", "legacy")])).unwrap();
        assert_eq!(config.auth_token(), "legacy");
    }

    #[test]
    fn test_defaults_apply_for_missing_or_bad_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("AUTH_TOKEN", "t"),
            ("DB_MAX_CONNECTIONS", "0"),
            ("SERVER_PORT", "not-a-port"),
            ("LOG_DIR", "  "),
        ]))
        .unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert!(config.log_dir.is_none());
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_debug_build_falls_back_to_dev_token() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.uses_dev_token());
    }

    #[test]
    fn test_blank_token_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("AUTH_TOKEN", "   ")]));
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let config = Config::new("postgres://user:pw@db/app", "hunter2");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("pw@db"));
        assert!(debug.contains("[REDACTED]"));
    }
}
