use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JWT_EXPIRATION_SECS: u64 = 86_400;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiration_secs: u64,
    pub cors_allowed_origin: String,
    pub log_level: String,
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            jwt_secret,
            jwt_expiration_secs: parse_or(
                &lookup,
                "JWT_EXPIRATION_SECS",
                DEFAULT_JWT_EXPIRATION_SECS,
            )?,
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied_when_only_secret_set() {
        let config = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.jwt_expiration_secs, 86_400);
        assert_eq!(config.cors_allowed_origin, "http://localhost:3000");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides_are_read() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("JWT_EXPIRATION_SECS", "60"),
            ("CORS_ALLOWED_ORIGIN", "https://school.example"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.jwt_expiration_secs, 60);
        assert_eq!(config.cors_allowed_origin, "https://school.example");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let result = AppConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(ConfigError::Missing("JWT_SECRET"))));
    }

    #[test]
    fn test_blank_secret_is_an_error() {
        let result = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "  ")]));
        assert!(matches!(result, Err(ConfigError::Missing("JWT_SECRET"))));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result =
            AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret"), ("PORT", "eighty")]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));
    }
}
