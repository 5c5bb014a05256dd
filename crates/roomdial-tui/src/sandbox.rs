//! Sandbox credential service client.
//!
//! One HTTP POST against a fixed endpoint issues demo credentials for
//! zero-config connections. A 2xx status with a well-formed JSON body
//! yields [`ConnectionDetails`]; anything else is an error that the
//! caller swallows.

use std::time::Duration;

use roomdial_app::ConnectionDetails;
use thiserror::Error;

/// Default sandbox credential endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://cloud-api.roomdial.dev/api/sandbox/connection-details";

/// Placeholder sandbox ID. Replace with a real one to use the service.
pub const DEFAULT_SANDBOX_ID: &str = "YOUR_SANDBOX_ID";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const DEMO_ROOM_NAME: &str = "test-room";

/// Errors from the sandbox fetch.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// Transport or body-decode failure.
    #[error("sandbox request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response status.
    #[error("sandbox returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the sandbox token service.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    http: reqwest::Client,
    endpoint: String,
    sandbox_id: String,
}

impl SandboxClient {
    /// Create a client for the given endpoint and sandbox ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(
        endpoint: impl Into<String>,
        sandbox_id: impl Into<String>,
    ) -> Result<Self, SandboxError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, endpoint: endpoint.into(), sandbox_id: sandbox_id.into() })
    }

    /// Fetch demo credentials for the fixed demo room.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a
    /// malformed body.
    pub async fn fetch(&self) -> Result<ConnectionDetails, SandboxError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("X-Sandbox-ID", &self.sandbox_id)
            .json(&serde_json::json!({ "roomName": DEMO_ROOM_NAME }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SandboxError::Status(status));
        }

        Ok(response.json::<ConnectionDetails>().await?)
    }
}
