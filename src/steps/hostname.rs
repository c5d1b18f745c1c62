//! Hostname change via the domain-management utility.

use crate::error::StepError;
use crate::system::command::CommandRunner;
use crate::system::encoding::decode_console;
use crate::system::extract::extract;

const CAPTION_COMMAND: &str = "wmic ntdomain get Caption /value";
const CAPTION_PATTERN: &str = r"Caption=(.*)";

/// Rename the host to the inventory-assigned name.
///
/// The rename command needs the current domain/workgroup caption, read via
/// system information first; a missing caption aborts only this step.
pub async fn rename_host<R: CommandRunner>(
    runner: &R,
    hostname: &str,
) -> Result<(), StepError> {
    let raw = runner.run(CAPTION_COMMAND).await?;
    let output = decode_console(&raw);
    let caption = extract(CAPTION_PATTERN, &output).ok_or(StepError::CaptionNotFound)?;
    let old_name = caption.trim();
    log::debug!("current caption: {old_name}");

    let command = format!("netdom renamecomputer {old_name} /newname:{hostname} /force");
    let raw = runner.run(&command).await?;
    log::debug!("{}", decode_console(&raw).trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use std::sync::Mutex;

    struct CaptionRunner {
        caption_output: &'static [u8],
        commands: Mutex<Vec<String>>,
    }

    impl CaptionRunner {
        fn new(caption_output: &'static [u8]) -> Self {
            CaptionRunner {
                caption_output,
                commands: Mutex::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for CaptionRunner {
        async fn run(&self, command: &str) -> Result<Vec<u8>, CommandError> {
            self.commands.lock().unwrap().push(command.to_string());
            if command.starts_with("wmic ntdomain") {
                Ok(self.caption_output.to_vec())
            } else {
                Ok(Vec::new())
            }
        }
    }

    #[tokio::test]
    async fn test_rename_combines_old_caption_and_new_name() {
        let runner = CaptionRunner::new(b"\r\nCaption=WORKGROUP\r\n\r\n");
        rename_host(&runner, "HOST-01").await.unwrap();

        let commands = runner.commands.lock().unwrap();
        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[1],
            "netdom renamecomputer WORKGROUP /newname:HOST-01 /force"
        );
    }

    #[tokio::test]
    async fn test_missing_caption_aborts_only_this_step() {
        let runner = CaptionRunner::new(b"No Instance(s) Available.\r\n");
        let err = rename_host(&runner, "HOST-01").await.unwrap_err();
        assert!(matches!(err, StepError::CaptionNotFound));

        // the rename command was never dispatched
        assert_eq!(runner.commands.lock().unwrap().len(), 1);
    }
}
