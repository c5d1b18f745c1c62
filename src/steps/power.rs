//! Host restart.

use crate::error::StepError;
use crate::system::command::CommandRunner;
use crate::system::encoding::decode_console;

/// Forced restart with a fixed 10-second delay. The unconditional final
/// action of a run.
pub async fn reboot<R: CommandRunner>(runner: &R) -> Result<(), StepError> {
    let raw = runner.run("shutdown -f -r -t 10").await?;
    log::debug!("{}", decode_console(&raw).trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRunner {
        commands: Mutex<Vec<String>>,
    }

    impl CommandRunner for RecordingRunner {
        async fn run(&self, command: &str) -> Result<Vec<u8>, CommandError> {
            self.commands.lock().unwrap().push(command.to_string());
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_reboot_command() {
        let runner = RecordingRunner::default();
        reboot(&runner).await.unwrap();
        assert_eq!(
            runner.commands.lock().unwrap().as_slice(),
            ["shutdown -f -r -t 10"]
        );
    }
}
