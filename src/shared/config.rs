// src/shared/config.rs
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::auth::adapter::outgoing::jwt::IdentityConfig;
use crate::comment::application::domain::ThreadShape;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct DbPoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Default for DbPoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 50,
            min_connections: 10,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(300),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Root of publicly served files; playlist covers land in `<public_dir>/uploads`.
    pub public_dir: PathBuf,
    pub thread_shape: ThreadShape,
    pub view_refresh_url: Option<String>,
    pub identity: IdentityConfig,
    pub db_pool: DbPoolConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// `.env.{RUST_ENV}` is tried first, then `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = required("DATABASE_URL")?;
        let host = required("HOST")?;
        let port = parse_value("PORT", required("PORT")?)?;

        let public_dir = optional("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("public"));

        let thread_shape = match optional("COMMENT_THREAD_SHAPE") {
            Some(value) => parse_value("COMMENT_THREAD_SHAPE", value)?,
            None => ThreadShape::default(),
        };

        let identity_secret = required("IDENTITY_JWT_SECRET")?;
        if identity_secret.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "IDENTITY_JWT_SECRET",
                value: "<must be at least 32 characters>".to_string(),
            });
        }

        let mut db_pool = DbPoolConfig::default();
        if let Some(value) = optional("DB_MAX_CONNECTIONS") {
            db_pool.max_connections = parse_value("DB_MAX_CONNECTIONS", value)?;
        }
        if let Some(value) = optional("DB_MIN_CONNECTIONS") {
            db_pool.min_connections = parse_value("DB_MIN_CONNECTIONS", value)?;
        }

        Ok(Self {
            database_url,
            host,
            port,
            public_dir,
            thread_shape,
            view_refresh_url: optional("VIEW_REFRESH_URL"),
            identity: IdentityConfig {
                secret_key: identity_secret,
                issuer: optional("IDENTITY_JWT_ISSUER"),
            },
            db_pool,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, &'static str> {
        hashmap! {
            "DATABASE_URL" => "postgres://localhost/tunefeed",
            "HOST" => "127.0.0.1",
            "PORT" => "8080",
            "IDENTITY_JWT_SECRET" => "0123456789abcdef0123456789abcdef",
        }
    }

    fn load(env: HashMap<&'static str, &'static str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn loads_required_values_and_defaults() {
        let config = load(base_env()).unwrap();

        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.thread_shape, ThreadShape::SingleLevel);
        assert!(config.view_refresh_url.is_none());
        assert!(config.identity.issuer.is_none());
        assert_eq!(config.db_pool.max_connections, 50);
    }

    #[test]
    fn missing_database_url_is_reported() {
        let mut env = base_env();
        env.remove("DATABASE_URL");

        assert_eq!(load(env).unwrap_err(), ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn invalid_port_is_reported() {
        let mut env = base_env();
        env.insert("PORT", "eighty");

        assert!(matches!(
            load(env),
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));
    }

    #[test]
    fn short_identity_secret_is_rejected() {
        let mut env = base_env();
        env.insert("IDENTITY_JWT_SECRET", "short");

        assert!(matches!(
            load(env),
            Err(ConfigError::Invalid {
                key: "IDENTITY_JWT_SECRET",
                ..
            })
        ));
    }

    #[test]
    fn optional_values_are_read() {
        let mut env = base_env();
        env.insert("COMMENT_THREAD_SHAPE", "recursive");
        env.insert("VIEW_REFRESH_URL", "http://frontend:3000/api/revalidate");
        env.insert("PUBLIC_DIR", "/srv/public");
        env.insert("IDENTITY_JWT_ISSUER", "tunefeed-auth");
        env.insert("DB_MAX_CONNECTIONS", "8");

        let config = load(env).unwrap();

        assert_eq!(config.thread_shape, ThreadShape::Recursive);
        assert_eq!(
            config.view_refresh_url.as_deref(),
            Some("http://frontend:3000/api/revalidate")
        );
        assert_eq!(config.public_dir, PathBuf::from("/srv/public"));
        assert_eq!(config.identity.issuer.as_deref(), Some("tunefeed-auth"));
        assert_eq!(config.db_pool.max_connections, 8);
    }

    #[test]
    fn unknown_thread_shape_is_rejected() {
        let mut env = base_env();
        env.insert("COMMENT_THREAD_SHAPE", "flat");

        assert!(matches!(
            load(env),
            Err(ConfigError::Invalid {
                key: "COMMENT_THREAD_SHAPE",
                ..
            })
        ));
    }
}
