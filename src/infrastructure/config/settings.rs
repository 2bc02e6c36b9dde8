use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::template::{DEFAULT_MAX_TEMPLATE_LENGTH, DEFAULT_STORE_NAME};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body, in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Required `X-API-Key` value; unset disables the check
    pub key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// `storeName` used when no store data is supplied
    #[serde(default = "default_store_name")]
    pub default_store_name: String,
    /// Longest template accepted for preview or storage, in bytes
    #[serde(default = "default_max_template_length")]
    pub max_template_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_body_limit() -> usize {
    1024 * 1024 // 1 MiB
}

fn default_store_name() -> String {
    DEFAULT_STORE_NAME.to_string()
}

fn default_max_template_length() -> usize {
    DEFAULT_MAX_TEMPLATE_LENGTH
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("parser.default_store_name", DEFAULT_STORE_NAME)?
            .set_default("logging.level", default_log_level())?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // SERVER__PORT, API__KEY, PARSER__DEFAULT_STORE_NAME, LOGGING__JSON, ...
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit: default_body_limit(),
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_store_name: default_store_name(),
            max_template_length: default_max_template_length(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
