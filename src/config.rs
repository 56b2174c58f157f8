use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),
    #[error("environment variable {name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

/// Process settings, read once at startup.
///
/// | Variable     | Required | Default   |
/// |--------------|----------|-----------|
/// | `MONGO_URL`  | yes      |           |
/// | `DB_NAME`    | yes      |           |
/// | `HOST`       | no       | `0.0.0.0` |
/// | `PORT`       | no       | `8001`    |
/// | `LOG_FORMAT` | no       | `text`    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mongo_url: String,
    pub db_name: String,
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Reads the process environment. Call after `dotenv::dotenv()`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let port = match get("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let log_format = match get("LOG_FORMAT") {
            Some(value) => value.trim().parse::<LogFormat>().map_err(|_| ConfigError::Invalid {
                name: "LOG_FORMAT",
                value,
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            mongo_url: required("MONGO_URL")?,
            db_name: required("DB_NAME")?,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_format,
        })
    }

    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

/// Reads `LOG_FORMAT` on its own so logging can start before the rest of
/// the configuration is validated. Unknown values fall back to text here;
/// [`AppConfig::from_env`] reports them.
pub fn log_format_from_env() -> LogFormat {
    env::var("LOG_FORMAT")
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio_test::{assert_err, assert_ok};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn loads_required_and_defaults() {
        let config = assert_ok!(AppConfig::from_lookup(lookup(&[
            ("MONGO_URL", "mongodb://localhost:27017"),
            ("DB_NAME", "contacts_db"),
        ])));

        assert_eq!(config.mongo_url, "mongodb://localhost:27017");
        assert_eq!(config.db_name, "contacts_db");
        assert_eq!(config.bind_address(), ("0.0.0.0", 8001));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn missing_mongo_url_fails() {
        let err = assert_err!(AppConfig::from_lookup(lookup(&[("DB_NAME", "db")])));
        assert_eq!(err, ConfigError::Missing("MONGO_URL"));
    }

    #[test]
    fn missing_db_name_fails() {
        let err = assert_err!(AppConfig::from_lookup(lookup(&[(
            "MONGO_URL",
            "mongodb://localhost"
        )])));
        assert_eq!(err, ConfigError::Missing("DB_NAME"));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let err = assert_err!(AppConfig::from_lookup(lookup(&[
            ("MONGO_URL", "   "),
            ("DB_NAME", "db"),
        ])));
        assert_eq!(err, ConfigError::Missing("MONGO_URL"));
    }

    #[test]
    fn overrides_are_applied() {
        let config = assert_ok!(AppConfig::from_lookup(lookup(&[
            ("MONGO_URL", "mongodb://db:27017"),
            ("DB_NAME", "db"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("LOG_FORMAT", "JSON"),
        ])));

        assert_eq!(config.bind_address(), ("127.0.0.1", 9000));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_port_fails() {
        let err = assert_err!(AppConfig::from_lookup(lookup(&[
            ("MONGO_URL", "mongodb://db:27017"),
            ("DB_NAME", "db"),
            ("PORT", "eighty"),
        ])));
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn invalid_log_format_fails() {
        let err = assert_err!(AppConfig::from_lookup(lookup(&[
            ("MONGO_URL", "mongodb://db:27017"),
            ("DB_NAME", "db"),
            ("LOG_FORMAT", "xml"),
        ])));
        assert!(matches!(err, ConfigError::Invalid { name: "LOG_FORMAT", .. }));
    }
}
