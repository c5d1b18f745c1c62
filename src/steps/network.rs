//! Static IP and DNS assignment on the resolved adapter.

use crate::error::StepError;
use crate::system::command::CommandRunner;
use crate::system::encoding::decode_console;

/// Assign a static address, mask, and gateway to the adapter identified by
/// `adapter` (an interface index).
pub async fn set_static_ip<R: CommandRunner>(
    runner: &R,
    adapter: &str,
    ip: &str,
    netmask: &str,
    gateway: &str,
) -> Result<(), StepError> {
    let command = format!(
        r#"netsh interface ipv4 set address name="{adapter}" source=static addr={ip} mask={netmask} gateway={gateway}"#
    );
    let raw = runner.run(&command).await?;
    log::debug!("{}", decode_console(&raw).trim_end());
    Ok(())
}

/// Assign one primary static DNS server on the adapter.
pub async fn set_static_dns<R: CommandRunner>(
    runner: &R,
    adapter: &str,
    dns: &str,
) -> Result<(), StepError> {
    let command =
        format!(r#"netsh interface ipv4 set dnsservers name="{adapter}" static {dns} primary"#);
    let raw = runner.run(&command).await?;
    log::debug!("{}", decode_console(&raw).trim_end());
    Ok(())
}
