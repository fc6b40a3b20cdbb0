use cardapio_menu::ProjectionOptions;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, path::PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub menu: MenuConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuConfig {
    /// JSON file holding the yearly menu links.
    pub data_path: PathBuf,
    #[serde(default)]
    pub promote_current_week: bool,
}

impl MenuConfig {
    pub fn projection_options(&self) -> ProjectionOptions {
        ProjectionOptions {
            promote_current_week: self.promote_current_week,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (CARDAPIO__MENU__DATA_PATH, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("menu.data_path", "data/menu-links.json")?
            .set_default("menu.promote_current_week", false)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CARDAPIO")
                .separator("__")
                .try_parsing(true),
        );

        // Legacy name used by the static deployment
        if let Ok(data_path) = env::var("MENU_DATA_PATH") {
            builder = builder.set_override("menu.data_path", data_path)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.menu.data_path.as_os_str().is_empty() {
            return Err("Menu data path must not be empty".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown logging format {:?}, expected \"pretty\" or \"json\"",
                self.logging.format
            ));
        }
        Ok(())
    }
}
