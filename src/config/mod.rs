//! Agent configuration: loading, validation, defaults.
//!
//! The agent runs unattended, so every field has a default and a missing
//! or unreadable config file falls back to the built-in settings rather
//! than failing the run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::system::paths;

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// off | error | warn | info | debug | trace
    pub level: String,
    pub log_file: String,
    /// Mirror log lines to stderr as well as the file.
    pub color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            level: "info".to_string(),
            log_file: paths::WorkDir::default()
                .log_file()
                .to_string_lossy()
                .into_owned(),
            color: false,
        }
    }
}

/// Provisioning server settings. The inventory and progress endpoints both
/// live on this host, which is also the readiness-gate target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: "osinstall.".to_string(),
        }
    }
}

/// Readiness-gate tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub max_attempts: u32,
    pub interval_secs: u64,
    /// Pause after IP/DNS reassignment before re-verifying reachability.
    pub settle_secs: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        GateConfig {
            max_attempts: 300,
            interval_secs: 2,
            settle_secs: 30,
        }
    }
}

/// Complete agent configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub logger: LoggerConfig,
    pub server: ServerConfig,
    pub gate: GateConfig,
}

/// Load config from a JSON file.
pub fn load_config_from_file(path: &Path) -> Result<AgentConfig, ConfigError> {
    validate_config_path(path)?;

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(format!(
                "configuration file not found at: {}",
                path.display()
            ))
        } else {
            ConfigError::IoError(e)
        }
    })?;

    let config: AgentConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Load config from the given path, falling back to defaults if the file
/// is absent. A present-but-invalid file is still an error.
pub fn load_or_default(path: &Path) -> Result<AgentConfig, ConfigError> {
    match load_config_from_file(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => Ok(AgentConfig::default()),
        Err(e) => Err(e),
    }
}

/// Validate config path (.json extension required).
pub fn validate_config_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationFailed(
            "configuration path cannot be empty".to_string(),
        ));
    }

    match path.extension() {
        Some(ext) if ext == "json" => Ok(()),
        Some(ext) => Err(ConfigError::ValidationFailed(format!(
            "configuration file must have .json extension, got .{}",
            ext.to_string_lossy()
        ))),
        None => Err(ConfigError::ValidationFailed(
            "configuration file must have .json extension".to_string(),
        )),
    }
}
