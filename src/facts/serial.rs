//! Serial number extraction from firmware data.

use crate::system::command::CommandRunner;
use crate::system::encoding::decode_console;
use crate::system::extract::extract;

const SERIAL_COMMAND: &str = "wmic bios get SerialNumber /VALUE";
const SERIAL_PATTERN: &str = r"SerialNumber=(.+)";

/// Read the firmware serial number, the primary key for the inventory
/// lookup. A command failure is logged and treated as an extraction miss.
pub async fn serial_number<R: CommandRunner>(runner: &R) -> Option<String> {
    let output = match runner.run(SERIAL_COMMAND).await {
        Ok(raw) => decode_console(&raw),
        Err(e) => {
            log::error!("serial number command failed: {e}");
            String::new()
        }
    };
    log::debug!("firmware serial output: {}", output.trim_end());
    extract(SERIAL_PATTERN, &output)
}
