//! Imperative OS command dispatch.
//!
//! Steps never talk to the command interpreter directly: they go through
//! the [`CommandRunner`] capability, so tests can substitute a recording
//! runner and the production path stays in one place. The production
//! implementation batches each command into a single working script file,
//! which the interpreter then executes; the file is truncated before every
//! dispatch, so no two invocations may overlap (by construction of the
//! sequential workflow, they do not).

use std::path::PathBuf;

use tokio::process::Command;

use crate::error::CommandError;
use crate::system::encoding::encode_console;

/// Stateless command-execution capability.
///
/// One call dispatches one imperative command and blocks until the spawned
/// process finishes, yielding the raw combined output bytes on success.
pub trait CommandRunner {
    fn run(
        &self,
        command: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, CommandError>>;
}

/// Production runner: overwrites the working script file with the command
/// (encoded to the console code page) and executes it via the platform
/// command interpreter.
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    script_path: PathBuf,
}

impl ScriptRunner {
    pub fn new(script_path: PathBuf) -> Self {
        ScriptRunner { script_path }
    }

    fn interpreter(&self) -> Command {
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd.exe");
            c.arg("/C");
            c
        } else {
            Command::new("sh")
        };
        cmd.arg(&self.script_path);
        cmd
    }
}

impl CommandRunner for ScriptRunner {
    async fn run(&self, command: &str) -> Result<Vec<u8>, CommandError> {
        log::debug!("dispatch: {}", command);

        if let Some(parent) = self.script_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(CommandError::ScriptWrite)?;
            }
        }
        std::fs::write(&self.script_path, encode_console(command))
            .map_err(CommandError::ScriptWrite)?;

        let output = self
            .interpreter()
            .output()
            .await
            .map_err(CommandError::Spawn)?;

        if !output.status.success() {
            let detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return match output.status.code() {
                Some(code) => Err(CommandError::ExitStatus { code, detail }),
                None => Err(CommandError::Terminated),
            };
        }

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        Ok(combined)
    }
}
