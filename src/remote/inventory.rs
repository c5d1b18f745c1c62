//! Inventory service lookup.

use serde::Deserialize;

use crate::error::InventoryError;
use crate::models::DeviceNetworkProfile;

/// Status/message envelope wrapping every inventory response.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Status", alias = "status", default)]
    #[allow(dead_code)]
    status: String,
    #[serde(rename = "Message", alias = "message", default)]
    #[allow(dead_code)]
    message: String,
    #[serde(rename = "Content", alias = "content", default)]
    content: DeviceNetworkProfile,
}

/// Client for the per-device network/identity facts, keyed by serial
/// number. One GET per run; retry, if ever wanted, belongs to the caller
/// (the readiness gate has already ensured the server is reachable).
#[derive(Debug, Clone)]
pub struct InventoryClient {
    endpoint: String,
    http: reqwest::Client,
}

impl InventoryClient {
    /// Client against the conventional endpoint on the given server host.
    pub fn new(server: &str) -> Self {
        InventoryClient::with_endpoint(format!(
            "http://{server}/api/osinstall/v1/device/getNetworkBySn"
        ))
    }

    /// Client against an explicit endpoint URL (tests point this at a
    /// local mock server).
    pub fn with_endpoint(endpoint: String) -> Self {
        InventoryClient {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the device profile for `serial`.
    ///
    /// Non-200 status is an error carrying the code; a malformed body is a
    /// decode error.
    pub async fn fetch_profile(
        &self,
        serial: &str,
    ) -> Result<DeviceNetworkProfile, InventoryError> {
        let url = format!("{}?sn={}&type=json", self.endpoint, serial);
        log::debug!("inventory lookup: {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(InventoryError::Transport)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(InventoryError::HttpStatus(status.as_u16()));
        }

        let envelope: Envelope = response.json().await.map_err(InventoryError::Decode)?;
        Ok(envelope.content)
    }
}
