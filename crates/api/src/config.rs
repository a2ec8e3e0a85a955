use axum::http::HeaderValue;

use crate::auth::jwt::{JwtConfig, DEFAULT_ACCESS_EXPIRY_MINS};

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL and JWT secret have defaults suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Postgres connection string.
    pub database_url: String,
    /// Pool size (default: `20`).
    pub db_max_connections: u32,
    /// JWT token configuration.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `DATABASE_URL`           | required                   |
    /// | `DB_MAX_CONNECTIONS`     | `20`                       |
    /// | `JWT_SECRET`             | required                   |
    /// | `JWT_ACCESS_EXPIRY_MINS` | `15`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000u16)?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                    key: "CORS_ORIGINS",
                    value: s.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let db_max_connections = parse_or(
            &lookup,
            "DB_MAX_CONNECTIONS",
            maintrack_db::DEFAULT_MAX_CONNECTIONS,
        )?;

        let secret = lookup("JWT_SECRET")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let access_token_expiry_mins =
            parse_or(&lookup, "JWT_ACCESS_EXPIRY_MINS", DEFAULT_ACCESS_EXPIRY_MINS)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            db_max_connections,
            jwt: JwtConfig {
                secret,
                access_token_expiry_mins,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("DATABASE_URL", "postgres://localhost/maintrack"),
        ("JWT_SECRET", "dev-secret"),
    ];

    #[test]
    fn defaults_apply_when_only_required_vars_set() {
        let config = ServerConfig::from_lookup(lookup_from(&REQUIRED)).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.db_max_connections, 20);
        assert_eq!(config.jwt.access_token_expiry_mins, 15);
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("CORS_ORIGINS", "https://a.example, https://b.example,,"));
        let config = ServerConfig::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn missing_secret_is_reported() {
        let err = ServerConfig::from_lookup(lookup_from(&REQUIRED[..1])).unwrap_err();
        assert_matches!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn invalid_port_is_reported() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "eighty"));
        let err = ServerConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { key: "PORT", .. });
    }
}
