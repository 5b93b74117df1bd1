mod authority_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use authority_config::AuthorityConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "LP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".lp";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
const MIN_BUSY_TIMEOUT_SECS: u64 = 1;
const MAX_BUSY_TIMEOUT_SECS: u64 = 300;

const DEFAULT_VERIFY_PATH: &str = "/verify";
const DEFAULT_AUTHORITY_TIMEOUT_SECS: u64 = 10;
const MIN_AUTHORITY_TIMEOUT_SECS: u64 = 1;
const MAX_AUTHORITY_TIMEOUT_SECS: u64 = 120;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
