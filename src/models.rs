//! Core data structures shared across the agent.

use serde::Deserialize;

/// Per-device network and identity facts fetched once from the inventory
/// service. Consumed read-only by every configuration step.
///
/// Missing fields decode to empty strings, which is also the degraded
/// profile the orchestrator uses when the inventory lookup fails entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeviceNetworkProfile {
    #[serde(rename = "Bonding", alias = "bonding")]
    pub bonding: String,
    #[serde(rename = "Gateway", alias = "gateway")]
    pub gateway: String,
    #[serde(rename = "Hostname", alias = "hostname")]
    pub hostname: String,
    #[serde(rename = "Ip", alias = "ip")]
    pub ip: String,
    #[serde(rename = "Netmask", alias = "netmask")]
    pub netmask: String,
    #[serde(rename = "Trunk", alias = "trunk")]
    pub trunk: String,
    #[serde(rename = "Vlan", alias = "vlan")]
    pub vlan: String,
    #[serde(rename = "HWADDR", alias = "hwaddr")]
    pub hwaddr: String,
}

/// A single progress telemetry emission: completion fraction plus the
/// human-readable stage name and the machine stage key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEvent {
    pub fraction: f64,
    pub label: &'static str,
    pub key: &'static str,
}

/// The fixed progress checkpoints of a provisioning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Partition,
    Hostname,
    Network,
    Registry,
    Finish,
}

impl Stage {
    /// The progress event emitted when this stage completes.
    pub fn event(self) -> ProgressEvent {
        match self {
            Stage::Partition => ProgressEvent {
                fraction: 0.70,
                label: "partition disk",
                key: "diskpart",
            },
            Stage::Hostname => ProgressEvent {
                fraction: 0.75,
                label: "change hostname",
                key: "change hostname",
            },
            Stage::Network => ProgressEvent {
                fraction: 0.80,
                label: "change network",
                key: "change network",
            },
            Stage::Registry => ProgressEvent {
                fraction: 0.90,
                label: "change registry",
                key: "change reg",
            },
            Stage::Finish => ProgressEvent {
                fraction: 1.00,
                label: "finish",
                key: "finish",
            },
        }
    }
}

/// Agent version string with the build date, logged at startup.
pub fn version() -> String {
    format!(
        "v{} ({})",
        env!("CARGO_PKG_VERSION"),
        chrono::Local::now().format("%Y-%m-%d")
    )
}
