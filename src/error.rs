//! Unified error type hierarchy for the first-boot agent.
//!
//! Provides structured error handling with CommandError, StepError,
//! InventoryError, ReportError, ConfigError, and the global AgentError.

use std::io;
use thiserror::Error;

/// External command dispatch errors.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to write command script: {0}")]
    ScriptWrite(io::Error),

    #[error("failed to spawn command interpreter: {0}")]
    Spawn(io::Error),

    #[error("command exited with code {code}: {detail}")]
    ExitStatus { code: i32, detail: String },

    #[error("command terminated by signal")]
    Terminated,
}

/// Configuration step errors.
#[derive(Error, Debug)]
pub enum StepError {
    #[error("command dispatch failed: {0}")]
    Command(#[from] CommandError),

    #[error("caption not found in system information output")]
    CaptionNotFound,

    #[error("failed to write partitioning script: {0}")]
    PartitionScript(io::Error),

    #[error("partitioning utility failed: {0}")]
    PartitionFailed(String),

    #[error("hook script failed: {0}")]
    HookFailed(String),
}

/// Inventory service lookup errors.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("inventory request failed: {0}")]
    Transport(reqwest::Error),

    #[error("http status code: {0}")]
    HttpStatus(u16),

    #[error("invalid inventory response: {0}")]
    Decode(reqwest::Error),
}

/// Progress-report delivery errors. Never fatal to the caller.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("progress report failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("progress endpoint returned status {0}")]
    HttpStatus(u16),
}

/// Configuration file parsing and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    #[error("invalid JSON in config: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("IO error during config operations: {0}")]
    IoError(#[from] io::Error),
}

/// Global error type for the agent.
///
/// The provisioning run returns this from the orchestrator; only
/// `NetworkTimeout` terminates the process with a non-zero exit code.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("network readiness timeout for {host} after {attempts} attempts")]
    NetworkTimeout { host: String, attempts: u32 },

    #[error(transparent)]
    Step(#[from] StepError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Top-level result type for operations that may fail.
pub type Result<T> = std::result::Result<T, AgentError>;
