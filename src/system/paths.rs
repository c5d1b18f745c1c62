//! Centralized registry for the agent's working-directory artifacts.
//!
//! Everything the agent writes or probes on disk lives under one fixed
//! working directory (`c:/firstboot` on target images). Path derivation is
//! kept in one place so steps never assemble paths ad hoc.

use std::path::{Path, PathBuf};

/// Default working directory on a freshly imaged host.
pub const DEFAULT_ROOT: &str = "c:/firstboot";

/// Resolved working-directory paths for one provisioning run.
#[derive(Debug, Clone)]
pub struct WorkDir {
    root: PathBuf,
}

impl WorkDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        WorkDir { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// General-purpose command script, truncated before each dispatch.
    pub fn command_script(&self) -> PathBuf {
        self.root.join("temp-script.cmd")
    }

    /// Script file consumed by the disk partitioning utility.
    pub fn diskpart_script(&self) -> PathBuf {
        self.root.join("disk.txt")
    }

    /// Optional hook executed before any configuration begins.
    pub fn pre_install_script(&self) -> PathBuf {
        self.root.join("preInstall.cmd")
    }

    /// Optional hook executed after configuration, before reboot.
    pub fn post_install_script(&self) -> PathBuf {
        self.root.join("postInstall.cmd")
    }

    /// Agent configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.root.join("agent.json")
    }

    /// Default agent log file.
    pub fn log_file(&self) -> PathBuf {
        self.root.join("firstboot-agent.log")
    }
}

impl Default for WorkDir {
    fn default() -> Self {
        WorkDir::new(DEFAULT_ROOT)
    }
}
