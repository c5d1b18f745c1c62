//! First-boot provisioning agent.
//!
//! Runs once, unattended, on a freshly imaged Windows host during an
//! automated OS-deployment pipeline: waits for the provisioning network,
//! pulls the device's network/identity facts from the inventory service,
//! partitions the data disk, renames the host, assigns static IP and DNS,
//! applies the Winlogon registry edits, reports progress after each stage,
//! and reboots.
//!
//! The system is organized into functional modules:
//! - **error**: unified error type hierarchy
//! - **models**: core data structures (device profile, progress stages)
//! - **policy**: step-failure severity table (gate fatal, rest advisory)
//! - **config**: agent configuration loading
//! - **logger**: non-blocking file logging pipeline
//! - **system**: command dispatch, console encoding, output extraction,
//!   working-directory paths
//! - **facts**: derived read-only host facts (serial, adapter, resolver)
//! - **remote**: inventory and progress-tracking clients
//! - **gate**: bounded-retry network readiness gate
//! - **steps**: the individual configuration actions
//! - **orchestrator**: the fixed provisioning sequence

pub mod config;
pub mod error;
pub mod facts;
pub mod gate;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod policy;
pub mod remote;
pub mod steps;
pub mod system;

// Re-export the log crate for macro usage
pub use log;

pub use error::{
    AgentError, CommandError, ConfigError, InventoryError, ReportError, Result, StepError,
};
pub use models::{version, DeviceNetworkProfile, ProgressEvent, Stage};
pub use orchestrator::Provisioner;
