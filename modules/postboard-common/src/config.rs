use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub api_host: String,
    pub api_port: u16,

    // GraphQL limits
    pub depth_limit: usize,
    pub complexity_limit: usize,

    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 4000,
            depth_limit: 10,
            complexity_limit: 1000,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT",
                    expected: "\"text\" or \"json\"",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            api_host: lookup("API_HOST").unwrap_or(defaults.api_host),
            api_port: parse_or(&lookup, "API_PORT", defaults.api_port)?,
            depth_limit: parse_or(&lookup, "GRAPHQL_DEPTH_LIMIT", defaults.depth_limit)?,
            complexity_limit: parse_or(
                &lookup,
                "GRAPHQL_COMPLEXITY_LIMIT",
                defaults.complexity_limit,
            )?,
            log_format,
        })
    }

    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  API_HOST: {}", self.api_host);
        tracing::info!("  API_PORT: {}", self.api_port);
        tracing::info!("  GRAPHQL_DEPTH_LIMIT: {}", self.depth_limit);
        tracing::info!("  GRAPHQL_COMPLEXITY_LIMIT: {}", self.complexity_limit);
        tracing::info!("  LOG_FORMAT: {}", self.log_format.as_str());
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            expected: "a number",
            value: raw,
        }),
    }
}
