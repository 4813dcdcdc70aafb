//! Application configuration.

pub mod app_config;
pub mod args;
pub mod settings_provider;
pub mod storage;

pub use app_config::{AccountConfig, AppConfig, LogLevel};
pub use args::CliArgs;
pub use settings_provider::ConfigSettingsProvider;
pub use storage::{ConfigError, StorageManager};
