//! Shared test doubles for the orchestrator integration tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use firstboot_agent::error::CommandError;
use firstboot_agent::gate::Probe;
use firstboot_agent::system::command::CommandRunner;

/// Recording runner answering known command prefixes with canned output
/// and everything else with empty output.
pub struct ScriptedRunner {
    responses: Vec<(&'static str, &'static [u8])>,
    commands: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new(responses: Vec<(&'static str, &'static [u8])>) -> Self {
        ScriptedRunner {
            responses,
            commands: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        ScriptedRunner::new(Vec::new())
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    async fn run(&self, command: &str) -> Result<Vec<u8>, CommandError> {
        self.commands.lock().unwrap().push(command.to_string());
        for (prefix, output) in &self.responses {
            if command.starts_with(prefix) {
                return Ok(output.to_vec());
            }
        }
        Ok(Vec::new())
    }
}

/// Probe returning a fixed answer while counting invocations.
pub struct FixedProbe {
    reachable: bool,
    calls: AtomicU32,
}

impl FixedProbe {
    pub fn up() -> Self {
        FixedProbe {
            reachable: true,
            calls: AtomicU32::new(0),
        }
    }

    pub fn down() -> Self {
        FixedProbe {
            reachable: false,
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Probe for FixedProbe {
    async fn reachable(&self, _host: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reachable
    }
}
