//! The configuration actions of a provisioning run.
//!
//! Each step is a side-effecting action over already-resolved inputs and
//! returns an explicit result; whether a failure aborts the run is decided
//! by the orchestrator's policy table, never inside the step.

mod hooks;
mod hostname;
mod network;
mod partition;
mod power;
mod registry;

pub use hooks::run_if_present;
pub use hostname::rename_host;
pub use network::{set_static_dns, set_static_ip};
pub use partition::partition;
pub use power::reboot;
pub use registry::disable_auto_logon;
