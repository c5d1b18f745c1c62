//! Installation progress reporting.

use serde::Serialize;

use crate::error::ReportError;
use crate::models::ProgressEvent;

#[derive(Debug, Serialize)]
struct ReportBody<'a> {
    #[serde(rename = "Sn")]
    sn: &'a str,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "InstallProgress")]
    install_progress: f64,
    #[serde(rename = "InstallLog")]
    install_log: &'a str,
}

/// Client for the remote progress-tracking endpoint.
///
/// Each call produces exactly one outbound delivery. Delivery failure is
/// surfaced as an error, but the orchestrator treats it as advisory: a lost
/// progress event never aborts provisioning.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    endpoint: String,
    http: reqwest::Client,
}

impl ProgressReporter {
    /// Reporter against the conventional endpoint on the given server host.
    pub fn new(server: &str) -> Self {
        ProgressReporter::with_endpoint(format!(
            "http://{server}/api/osinstall/v1/report/deviceInstallInfo"
        ))
    }

    /// Reporter against an explicit endpoint URL.
    pub fn with_endpoint(endpoint: String) -> Self {
        ProgressReporter {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    /// Send one progress event for the device identified by `serial`.
    pub async fn report(&self, serial: &str, event: ProgressEvent) -> Result<(), ReportError> {
        log::debug!(
            "progress {:.2} {} ({})",
            event.fraction,
            event.label,
            event.key
        );
        let body = ReportBody {
            sn: serial,
            title: event.label,
            install_progress: event.fraction,
            install_log: event.key,
        };

        let response = self.http.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::HttpStatus(status.as_u16()));
        }
        Ok(())
    }
}
