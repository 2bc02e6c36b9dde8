mod settings;

pub use settings::{ApiConfig, LoggingConfig, ParserConfig, ServerConfig, Settings};
