//! The provisioning sequence.
//!
//! One fixed linear pass: readiness gate, fact resolution, configuration
//! steps with progress checkpoints, and the final reboot. Failures are
//! routed through the policy table; apart from the two readiness-gate
//! invocations every failure is absorbed and the run keeps going, so a
//! host with one misconfigured field still reaches its reboot.

use std::fmt;
use std::time::Duration;

use crate::config::AgentConfig;
use crate::error::{AgentError, Result};
use crate::facts;
use crate::gate::{PingProbe, Probe, ReadinessGate};
use crate::models::{DeviceNetworkProfile, Stage};
use crate::policy::{severity, Severity, StepKind};
use crate::remote::{InventoryClient, ProgressReporter};
use crate::steps;
use crate::system::command::{CommandRunner, ScriptRunner};
use crate::system::paths::WorkDir;

/// One provisioning run over injected collaborators.
pub struct Provisioner<R, P> {
    runner: R,
    probe: P,
    gate: ReadinessGate,
    gate_host: String,
    inventory: InventoryClient,
    reporter: ProgressReporter,
    work: WorkDir,
    settle: Duration,
}

impl Provisioner<ScriptRunner, PingProbe> {
    /// Production provisioner: script-file command dispatch and ICMP
    /// probing, against the configured provisioning server.
    pub fn from_config(config: &AgentConfig) -> Self {
        let work = WorkDir::default();
        Provisioner {
            runner: ScriptRunner::new(work.command_script()),
            probe: PingProbe,
            gate: ReadinessGate::new(
                config.gate.max_attempts,
                Duration::from_secs(config.gate.interval_secs),
            ),
            gate_host: config.server.address.clone(),
            inventory: InventoryClient::new(&config.server.address),
            reporter: ProgressReporter::new(&config.server.address),
            work,
            settle: Duration::from_secs(config.gate.settle_secs),
        }
    }
}

impl<R: CommandRunner, P: Probe> Provisioner<R, P> {
    /// Provisioner over explicit collaborators. Tests inject a recording
    /// runner, a scripted probe, and mock endpoints through this.
    #[allow(clippy::too_many_arguments)]
    pub fn with_parts(
        runner: R,
        probe: P,
        gate: ReadinessGate,
        gate_host: String,
        inventory: InventoryClient,
        reporter: ProgressReporter,
        work: WorkDir,
        settle: Duration,
    ) -> Self {
        Provisioner {
            runner,
            probe,
            gate,
            gate_host,
            inventory,
            reporter,
            work,
            settle,
        }
    }

    /// The injected command runner (tests inspect recorded dispatches).
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// The injected reachability probe.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Execute the full sequence. Returns an error only for the fatal
    /// readiness-gate timeout; every other outcome ends in the reboot.
    pub async fn run(&self) -> Result<()> {
        log::info!("provisioning run started");

        self.absorb(
            StepKind::PreInstallHook,
            steps::run_if_present(&self.work.pre_install_script()).await,
        )?;

        self.gate_or_abort().await?;

        let serial = match facts::serial_number(&self.runner).await {
            Some(serial) => serial,
            None => {
                log::error!("{} failed, continuing with empty key", StepKind::SerialLookup);
                String::new()
            }
        };

        let profile = match self.inventory.fetch_profile(&serial).await {
            Ok(profile) => {
                log::info!(
                    "inventory profile: hostname={} ip={} hwaddr={}",
                    profile.hostname,
                    profile.ip,
                    profile.hwaddr
                );
                profile
            }
            Err(e) => {
                self.advisory(StepKind::InventoryFetch, &e);
                DeviceNetworkProfile::default()
            }
        };

        let adapter = match facts::adapter_index(&self.runner, &profile.hwaddr).await {
            Some(index) => index,
            None => {
                self.advisory(StepKind::AdapterLookup, &"no connected adapter matched");
                String::new()
            }
        };

        let dns = match facts::resolver_address(&self.runner).await {
            Some(address) => address,
            None => {
                self.advisory(StepKind::ResolverLookup, &"no resolver address found");
                String::new()
            }
        };

        self.absorb(StepKind::Partition, steps::partition(&self.work).await)?;
        self.checkpoint(&serial, Stage::Partition).await?;

        self.absorb(
            StepKind::RenameHost,
            steps::rename_host(&self.runner, &profile.hostname).await,
        )?;
        self.checkpoint(&serial, Stage::Hostname).await?;

        self.absorb(
            StepKind::SetStaticIp,
            steps::set_static_ip(
                &self.runner,
                &adapter,
                &profile.ip,
                &profile.netmask,
                &profile.gateway,
            )
            .await,
        )?;
        self.absorb(
            StepKind::SetStaticDns,
            steps::set_static_dns(&self.runner, &adapter, &dns).await,
        )?;

        log::info!(
            "waiting {}s for the new addressing to settle",
            self.settle.as_secs()
        );
        tokio::time::sleep(self.settle).await;
        self.gate_or_abort().await?;
        self.checkpoint(&serial, Stage::Network).await?;

        self.absorb(
            StepKind::RegistryEdit,
            steps::disable_auto_logon(&self.runner).await,
        )?;
        self.checkpoint(&serial, Stage::Registry).await?;

        self.checkpoint(&serial, Stage::Finish).await?;

        self.absorb(
            StepKind::PostInstallHook,
            steps::run_if_present(&self.work.post_install_script()).await,
        )?;

        self.absorb(StepKind::Reboot, steps::reboot(&self.runner).await)?;
        log::info!("provisioning run complete, reboot issued");
        Ok(())
    }

    async fn gate_or_abort(&self) -> Result<()> {
        if self.gate.wait(&self.probe, &self.gate_host).await {
            Ok(())
        } else {
            Err(AgentError::NetworkTimeout {
                host: self.gate_host.clone(),
                attempts: self.gate.max_attempts(),
            })
        }
    }

    async fn checkpoint(&self, serial: &str, stage: Stage) -> Result<()> {
        self.absorb(
            StepKind::ProgressReport,
            self.reporter.report(serial, stage.event()).await,
        )
    }

    /// Route a step outcome through the policy table: advisory failures are
    /// logged and dropped here, fatal ones propagate.
    fn absorb<E>(&self, kind: StepKind, result: std::result::Result<(), E>) -> Result<()>
    where
        E: Into<AgentError> + fmt::Display,
    {
        match result {
            Ok(()) => Ok(()),
            Err(e) => match severity(kind) {
                Severity::Advisory => {
                    log::error!("{kind} failed: {e}");
                    Ok(())
                }
                Severity::Fatal => Err(e.into()),
            },
        }
    }

    fn advisory(&self, kind: StepKind, detail: &dyn fmt::Display) {
        debug_assert_eq!(severity(kind), Severity::Advisory);
        log::error!("{kind} failed: {detail}");
    }
}
