//! Environment variable configuration for koine
//!
//! This module provides environment-based configuration with sensible
//! defaults for embedding applications.

use std::env;
use std::path::PathBuf;

/// Environment variable names
pub mod vars {
    /// Dictionary file path
    pub const DICTIONARY_PATH: &str = "KOINE_DICTIONARY_PATH";

    /// Log level (trace, debug, info, warn, error)
    pub const LOG_LEVEL: &str = "KOINE_LOG_LEVEL";

    /// Data directory for storing dictionaries
    pub const DATA_DIR: &str = "KOINE_DATA_DIR";

    /// Enable debug mode
    pub const DEBUG_MODE: &str = "KOINE_DEBUG";
}

/// Runtime configuration from environment
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Dictionary file path
    pub dictionary_path: Option<PathBuf>,

    /// Log level
    pub log_level: String,

    /// Data directory
    pub data_dir: PathBuf,

    /// Debug mode
    pub debug_mode: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            log_level: "info".to_string(),
            data_dir: default_data_dir(),
            debug_mode: false,
        }
    }
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var(vars::DICTIONARY_PATH) {
            config.dictionary_path = Some(PathBuf::from(path));
        }

        if let Ok(level) = env::var(vars::LOG_LEVEL) {
            config.log_level = level.to_lowercase();
        }

        if let Ok(dir) = env::var(vars::DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }

        config.debug_mode = env::var(vars::DEBUG_MODE)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        config
    }

    /// Get the dictionary path, defaulting into the data directory
    pub fn default_dictionary_path(&self) -> PathBuf {
        self.dictionary_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join("koine.dict"))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(format!("Invalid log level: {}", self.log_level)),
        }
        Ok(())
    }
}

/// Get default data directory
fn default_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("koine")
    } else {
        PathBuf::from("./data")
    }
}
