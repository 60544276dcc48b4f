use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Extra Ctrl-Q presses required to quit with unsaved changes
    #[serde(default = "default_quit_times")]
    pub quit_times: u32,

    /// Extra Ctrl-S presses required to save a file that has no extension
    /// and no detected language
    #[serde(default = "default_save_times")]
    pub save_times: u32,

    /// Seconds a status message stays visible in the message bar
    #[serde(default = "default_status_message_timeout")]
    pub status_message_timeout_secs: u64,

    /// Enable syntax highlighting for recognised file types
    #[serde(default = "default_true")]
    pub syntax_highlighting: bool,
}

fn default_quit_times() -> u32 {
    3
}

fn default_save_times() -> u32 {
    3
}

fn default_status_message_timeout() -> u64 {
    5
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quit_times: default_quit_times(),
            save_times: default_save_times(),
            status_message_timeout_secs: default_status_message_timeout(),
            syntax_highlighting: true,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Default location of the user config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quill").join("config.json"))
    }

    /// Load from `explicit` if given (errors are returned), otherwise from the
    /// default location, falling back to defaults if it is missing or invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        let Some(path) = Self::default_path().filter(|p| p.exists()) else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Self::default());
        };
        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                Ok(config)
            }
            Err(e) => {
                tracing::warn!("Ignoring config file {:?}: {}", path, e);
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
