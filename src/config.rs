use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_dir: PathBuf,
}

/// HTTP fetch configuration for URL sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("b64image/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let fetch_defaults = FetchConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("output.default_dir", "./images")?
            .set_default("fetch.timeout_seconds", fetch_defaults.timeout_seconds)?
            .set_default("fetch.user_agent", fetch_defaults.user_agent)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Environment variables with custom names override file configuration
        if let Ok(dir) = env::var("B64IMAGE_OUTPUT_DIR") {
            app_config.output.default_dir = PathBuf::from(dir);
        }

        if let Ok(timeout) = env::var("B64IMAGE_FETCH_TIMEOUT") {
            app_config.fetch.timeout_seconds = timeout.parse().map_err(|_| {
                ConfigError::Message(format!("invalid B64IMAGE_FETCH_TIMEOUT: {}", timeout))
            })?;
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Result<Self, ConfigError> {
        // Try to load config for defaults, but don't fail if not found
        match Self::load() {
            Ok(config) => Ok(config),
            Err(_) => Ok(Self {
                output: OutputConfig {
                    default_dir: PathBuf::from("./images"),
                },
                fetch: FetchConfig::default(),
            }),
        }
    }
}
