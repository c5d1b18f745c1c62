//! Network readiness gate.
//!
//! Bounded-retry reachability check gating progression of the workflow.
//! Invoked twice per run: before any configuration begins, and again after
//! the IP/DNS reassignment (following the settle delay) to confirm the
//! host is still reachable on its new addressing. Exhausting the gate is
//! the only fatal failure in the agent.

use std::time::Duration;

use tokio::process::Command;

/// A single reachability probe against a target host.
pub trait Probe {
    fn reachable(&self, host: &str) -> impl std::future::Future<Output = bool>;
}

/// Production probe: one ICMP echo via the system ping utility.
#[derive(Debug, Clone, Default)]
pub struct PingProbe;

impl Probe for PingProbe {
    async fn reachable(&self, host: &str) -> bool {
        let mut command = Command::new("ping");
        if cfg!(windows) {
            command.args(["-n", "1", "-w", "2000", host]);
        } else {
            command.args(["-c", "1", "-W", "2", host]);
        }
        match command.output().await {
            Ok(output) => output.status.success(),
            Err(e) => {
                log::debug!("ping spawn failed: {e}");
                false
            }
        }
    }
}

/// Bounded-retry gate over a [`Probe`].
#[derive(Debug, Clone)]
pub struct ReadinessGate {
    max_attempts: u32,
    interval: Duration,
}

impl ReadinessGate {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        ReadinessGate {
            max_attempts,
            interval,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Probe `host` once per attempt until reachable or the attempt budget
    /// is exhausted. Returns true immediately on the first success; sleeps
    /// the configured interval between failed attempts.
    pub async fn wait<P: Probe>(&self, probe: &P, host: &str) -> bool {
        for attempt in 1..=self.max_attempts {
            if probe.reachable(host).await {
                log::info!("host {host} reachable after {attempt} attempt(s)");
                return true;
            }
            if attempt < self.max_attempts {
                tokio::time::sleep(self.interval).await;
            }
        }
        log::error!(
            "host {host} unreachable after {} attempts",
            self.max_attempts
        );
        false
    }
}
