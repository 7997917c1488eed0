use anyhow::{Context, Result};

/// Development-only flash signing secret, used when `SECRET_KEY` is unset.
pub const DEV_SECRET_KEY: &str = "dev-key-change-later";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
const DEFAULT_EVENT_TITLE: &str = "Madrasa Fest";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub secret_key: String,
    pub event_title: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a number, got {:?}", port))?,
            None => DEFAULT_PORT,
        };

        let secret_key = lookup("SECRET_KEY")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEV_SECRET_KEY.to_string());

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            secret_key,
            event_title: lookup("EVENT_TITLE").unwrap_or_else(|| DEFAULT_EVENT_TITLE.to_string()),
        })
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.database_url, "sqlite://app.db");
        assert_eq!(config.event_title, "Madrasa Fest");
        assert!(config.uses_dev_secret());
    }

    #[test]
    fn test_values_from_environment() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("SECRET_KEY", "s3cret"),
            ("DATABASE_URL", "sqlite::memory:"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.secret_key, "s3cret");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(!config.uses_dev_secret());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
    }
}
