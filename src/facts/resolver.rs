//! Current DNS resolver address.

use crate::system::command::CommandRunner;
use crate::system::encoding::decode_console;
use crate::system::extract::extract;

const RESOLVER_COMMAND: &str = "echo | nslookup";
const RESOLVER_PATTERN: &str = r"Address:[[:blank:]]*(.+)";

/// Read the resolver the host is currently configured with, before the
/// static DNS step overwrites it. The first `Address:` line of an empty
/// nslookup session is the active resolver.
pub async fn resolver_address<R: CommandRunner>(runner: &R) -> Option<String> {
    let output = match runner.run(RESOLVER_COMMAND).await {
        Ok(raw) => decode_console(&raw),
        Err(e) => {
            log::error!("resolver query failed: {e}");
            String::new()
        }
    };
    log::debug!("nslookup output: {}", output.trim_end());
    let address = extract(RESOLVER_PATTERN, &output)?;
    let address = address.trim().to_string();
    if address.is_empty() {
        return None;
    }
    Some(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::testing::{FailingRunner, StaticRunner};

    #[tokio::test]
    async fn test_resolver_address_first_match() {
        let runner = StaticRunner {
            output: b"Default Server:  dns.lab\r\nAddress:  10.0.0.2\r\n\r\n> ",
        };
        assert_eq!(
            resolver_address(&runner).await,
            Some("10.0.0.2".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolver_address_trimmed_of_whitespace() {
        let runner = StaticRunner {
            output: b"Address:\t192.168.1.1 \r\n",
        };
        assert_eq!(
            resolver_address(&runner).await,
            Some("192.168.1.1".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolver_address_miss() {
        let runner = StaticRunner {
            output: b"*** can't find server name\r\n",
        };
        assert_eq!(resolver_address(&runner).await, None);
    }

    #[tokio::test]
    async fn test_resolver_command_failure_is_a_miss() {
        assert_eq!(resolver_address(&FailingRunner).await, None);
    }
}
