//! Optional pre/post-install hook scripts.

use std::path::Path;

use tokio::process::Command;

use crate::error::StepError;
use crate::system::encoding::decode_console;

/// Execute the hook script at `path` through the command interpreter if it
/// exists. An absent hook is success; a present hook that fails is an
/// error for the caller's policy to absorb.
pub async fn run_if_present(path: &Path) -> Result<(), StepError> {
    if !path.exists() {
        log::debug!("no hook script at {}", path.display());
        return Ok(());
    }

    log::info!("running hook script {}", path.display());
    let mut command = if cfg!(windows) {
        let mut c = Command::new("cmd.exe");
        c.arg("/C");
        c
    } else {
        Command::new("sh")
    };
    command.arg(path);

    let output = command
        .output()
        .await
        .map_err(|e| StepError::HookFailed(e.to_string()))?;

    if !output.status.success() {
        return Err(StepError::HookFailed(format!(
            "{} exited with {}",
            path.display(),
            output.status
        )));
    }

    log::debug!("{}", decode_console(&output.stdout).trim_end());
    Ok(())
}
