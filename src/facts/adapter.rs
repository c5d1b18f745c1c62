//! Network adapter index resolution.

use crate::system::command::CommandRunner;
use crate::system::encoding::decode_console;
use crate::system::extract::extract;

const ADAPTER_PATTERN: &str = r"InterfaceIndex=(.*)";

/// Resolve the interface index of the connected adapter whose MAC address
/// matches the inventory profile. The IP and DNS commands address the
/// adapter by this index.
pub async fn adapter_index<R: CommandRunner>(runner: &R, mac: &str) -> Option<String> {
    let command = format!(
        r#"wmic nic where (MACAddress="{mac}" AND netConnectionStatus=2) get InterfaceIndex /value"#
    );
    let output = match runner.run(&command).await {
        Ok(raw) => decode_console(&raw),
        Err(e) => {
            log::error!("adapter index command failed: {e}");
            String::new()
        }
    };
    log::debug!("adapter query output: {}", output.trim_end());
    let index = extract(ADAPTER_PATTERN, &output)?;
    log::info!("nic interface index: {index}");
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use crate::facts::testing::{FailingRunner, StaticRunner};
    use crate::system::command::CommandRunner;

    #[tokio::test]
    async fn test_adapter_index_extracted() {
        let runner = StaticRunner {
            output: b"\r\nInterfaceIndex=12\r\n\r\n",
        };
        assert_eq!(
            adapter_index(&runner, "AA:BB:CC:DD:EE:FF").await,
            Some("12".to_string())
        );
    }

    #[tokio::test]
    async fn test_adapter_query_embeds_mac_address() {
        struct CapturingRunner(std::sync::Mutex<Vec<String>>);

        impl CommandRunner for CapturingRunner {
            async fn run(&self, command: &str) -> Result<Vec<u8>, CommandError> {
                self.0.lock().unwrap().push(command.to_string());
                Ok(b"InterfaceIndex=7\r\n".to_vec())
            }
        }

        let runner = CapturingRunner(std::sync::Mutex::new(Vec::new()));
        adapter_index(&runner, "AA:BB:CC:DD:EE:FF").await;

        let commands = runner.0.lock().unwrap();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].contains(r#"MACAddress="AA:BB:CC:DD:EE:FF""#));
        assert!(commands[0].contains("netConnectionStatus=2"));
    }

    #[tokio::test]
    async fn test_adapter_index_miss() {
        let runner = StaticRunner {
            output: b"No Instance(s) Available.\r\n",
        };
        assert_eq!(adapter_index(&runner, "AA:BB:CC:DD:EE:FF").await, None);
    }

    #[tokio::test]
    async fn test_adapter_index_command_failure_is_a_miss() {
        assert_eq!(adapter_index(&FailingRunner, "AA:BB:CC:DD:EE:FF").await, None);
    }
}
