use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &redact_password(&self.url))
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Drops the password from a connection URL. Unparsable URLs are hidden entirely.
fn redact_password(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(parsed) if parsed.password().is_none() => parsed.to_string(),
        Ok(mut parsed) => match parsed.set_password(None) {
            Ok(()) => parsed.to_string(),
            Err(()) => "<redacted>".to_string(),
        },
        Err(_) => "<redacted>".to_string(),
    }
}

#[derive(Clone)]
pub struct GenerationConfig {
    pub api_url: String,
    pub model: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

// Keeps the API key out of logs.
impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub generation: GenerationConfig,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenv` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingEnv(name))
        };

        Ok(Self {
            server: ServerConfig {
                host: parse_or(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]))?,
                port: parse_or(&lookup, "PORT", 3000)?,
                max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            },
            generation: GenerationConfig {
                api_url: lookup("GENERATION_API_URL")
                    .unwrap_or_else(|| "https://api-inference.huggingface.co".to_string())
                    .trim_end_matches('/')
                    .to_string(),
                model: lookup("GENERATION_MODEL")
                    .unwrap_or_else(|| "google/flan-t5-large".to_string()),
                api_key: required("HUGGINGFACE_API_KEY")?,
                timeout_secs: parse_or(&lookup, "GENERATION_TIMEOUT_SECS", 120)?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/docfaq"),
            ("HUGGINGFACE_API_KEY", "hf_test"),
        ]))
        .unwrap();

        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.server.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.generation.model, "google/flan-t5-large");
        assert_eq!(
            config.generation.api_url,
            "https://api-inference.huggingface.co"
        );
        assert_eq!(config.generation.timeout_secs, 120);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/docfaq"),
            ("HUGGINGFACE_API_KEY", "hf_test"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("GENERATION_API_URL", "http://localhost:9000/"),
            ("GENERATION_MODEL", "google/flan-t5-base"),
        ]))
        .unwrap();

        assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.generation.api_url, "http://localhost:9000");
        assert_eq!(config.generation.model, "google/flan-t5-base");
    }

    #[test]
    fn test_missing_and_invalid_values() {
        let err = AppConfig::from_lookup(lookup(&[("HUGGINGFACE_API_KEY", "hf_test")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv("DATABASE_URL")));

        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/docfaq"),
            ("HUGGINGFACE_API_KEY", "hf_test"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "PORT", .. }));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/docfaq"),
            ("HUGGINGFACE_API_KEY", "hf_secret"),
        ]))
        .unwrap();

        assert!(!format!("{:?}", config).contains("hf_secret"));
    }

    #[test]
    fn test_debug_redacts_database_password() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://app:s3cretpw@db/docfaq"),
            ("HUGGINGFACE_API_KEY", "hf_test"),
        ]))
        .unwrap();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("s3cretpw"));
        assert!(debug.contains("postgres://app@db/docfaq"));
    }

    #[test]
    fn test_redact_password_edge_cases() {
        assert_eq!(
            redact_password("postgres://localhost/docfaq"),
            "postgres://localhost/docfaq"
        );
        assert_eq!(redact_password("not a url"), "<redacted>");
    }
}
