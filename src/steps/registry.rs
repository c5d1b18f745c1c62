//! Winlogon registry edits.

use crate::error::StepError;
use crate::system::command::CommandRunner;
use crate::system::encoding::decode_console;

const WINLOGON_KEY: &str =
    r"HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft\Windows NT\CurrentVersion\Winlogon";

/// Disable the deployment-time automatic logon and clear any stored
/// default password. The two writes are independent: the second runs even
/// if the first fails, and the first failure becomes the step result.
pub async fn disable_auto_logon<R: CommandRunner>(runner: &R) -> Result<(), StepError> {
    let commands = [
        format!(r#"reg add "{WINLOGON_KEY}" /v AutoAdminLogon /t reg_sz /d 0 /f"#),
        format!(r#"reg add "{WINLOGON_KEY}" /v Defaultpassword /t reg_sz /d "" /f"#),
    ];

    let mut first_failure = None;
    for command in &commands {
        match runner.run(command).await {
            Ok(raw) => log::debug!("{}", decode_console(&raw).trim_end()),
            Err(e) => {
                log::error!("registry edit failed: {e}");
                if first_failure.is_none() {
                    first_failure = Some(e);
                }
            }
        }
    }

    match first_failure {
        None => Ok(()),
        Some(e) => Err(e.into()),
    }
}
