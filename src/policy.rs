//! Failure policy for the provisioning sequence.
//!
//! The workflow favors reaching the final reboot over halting on a single
//! misconfigured field: a partially configured host can still be corrected
//! by hand, whereas an unreachable provisioning network makes the run
//! unrecoverable. Only the readiness gate is therefore fatal; every other
//! step failure is logged and the run continues.

use std::fmt;

/// Every operation the orchestrator sequences, in workflow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    PreInstallHook,
    ReadinessGate,
    SerialLookup,
    InventoryFetch,
    AdapterLookup,
    ResolverLookup,
    Partition,
    RenameHost,
    SetStaticIp,
    SetStaticDns,
    RegistryEdit,
    ProgressReport,
    PostInstallHook,
    Reboot,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::PreInstallHook => "pre-install hook",
            StepKind::ReadinessGate => "readiness gate",
            StepKind::SerialLookup => "serial number lookup",
            StepKind::InventoryFetch => "inventory fetch",
            StepKind::AdapterLookup => "adapter index lookup",
            StepKind::ResolverLookup => "resolver lookup",
            StepKind::Partition => "disk partitioning",
            StepKind::RenameHost => "hostname change",
            StepKind::SetStaticIp => "static IP assignment",
            StepKind::SetStaticDns => "static DNS assignment",
            StepKind::RegistryEdit => "registry edit",
            StepKind::ProgressReport => "progress report",
            StepKind::PostInstallHook => "post-install hook",
            StepKind::Reboot => "reboot",
        };
        f.write_str(name)
    }
}

/// How the orchestrator treats a failure of a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Abort the entire run.
    Fatal,
    /// Log at error severity and continue with whatever value was available.
    Advisory,
}

/// Severity of a step failure. The asymmetry here is the central
/// failure-handling decision of the agent.
pub fn severity(kind: StepKind) -> Severity {
    match kind {
        StepKind::ReadinessGate => Severity::Fatal,
        _ => Severity::Advisory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readiness_gate_is_the_only_fatal_step() {
        let kinds = [
            StepKind::PreInstallHook,
            StepKind::ReadinessGate,
            StepKind::SerialLookup,
            StepKind::InventoryFetch,
            StepKind::AdapterLookup,
            StepKind::ResolverLookup,
            StepKind::Partition,
            StepKind::RenameHost,
            StepKind::SetStaticIp,
            StepKind::SetStaticDns,
            StepKind::RegistryEdit,
            StepKind::ProgressReport,
            StepKind::PostInstallHook,
            StepKind::Reboot,
        ];
        for kind in kinds {
            let expected = if kind == StepKind::ReadinessGate {
                Severity::Fatal
            } else {
                Severity::Advisory
            };
            assert_eq!(severity(kind), expected, "unexpected severity for {kind}");
        }
    }

    #[test]
    fn test_step_kind_display_names() {
        assert_eq!(StepKind::RenameHost.to_string(), "hostname change");
        assert_eq!(StepKind::ReadinessGate.to_string(), "readiness gate");
    }
}
