//! # Platform API Client
//!
//! HTTP client for calling back into the host platform's API. In production
//! the host pre-configures this client with its own base address and the
//! caller's ambient credentials; the handler borrows it per-call and manages
//! no credentials of its own.

use reqwest::Client;
use std::time::Duration;
use url::Url;
use tracing::debug;

use crate::error::{HandlerError, HandlerResult};

/// Configuration for the platform API client
#[derive(Debug, Clone)]
pub struct PlatformApiConfig {
    /// Base URL for the platform API (e.g., `http://localhost:8080`)
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for PlatformApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: 30000,
        }
    }
}

/// HTTP client scoped to the host platform API
#[derive(Debug, Clone)]
pub struct PlatformApiClient {
    client: Client,
    base_url: Url,
}

impl PlatformApiClient {
    /// Create a new platform API client from configuration.
    ///
    /// Every request carries the configured timeout so a stalled API call
    /// cannot hold the host's calling thread indefinitely.
    pub fn new(config: PlatformApiConfig) -> HandlerResult<Self> {
        let mut base_url = Url::parse(&config.base_url)
            .map_err(|e| HandlerError::configuration(format!("Invalid base URL: {e}")))?;

        // Url::join treats a base without a trailing slash as a file path
        // and would drop the last segment.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(format!(
                "job-completion-handler/{}",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(HandlerError::Http)?;

        Ok(Self { client, base_url })
    }

    /// The base address this client was configured with, for the context
    /// field dump.
    #[must_use]
    pub fn base_address(&self) -> &Url {
        &self.base_url
    }

    /// Build the job-history query URL for a job id.
    pub fn job_history_url(&self, job_id: &str) -> HandlerResult<Url> {
        let mut url = self
            .base_url
            .join("OrchestratorJobs/JobHistory")
            .map_err(|e| HandlerError::configuration(format!("Invalid query URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("pq.queryString", &format!("JobID -eq \"{job_id}\""));
        Ok(url)
    }

    /// Retrieve the orchestrator job history for a completed job.
    ///
    /// Issues exactly one GET. A 2xx response yields the body text; non-2xx
    /// and transport failures come back as errors for the caller to resolve
    /// at the dispatcher boundary.
    pub async fn job_history(&self, job_id: &str) -> HandlerResult<String> {
        let url = self.job_history_url(job_id)?;
        debug!(job_id = %job_id, "Querying platform API with: {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(HandlerError::api_error(status.as_u16(), message));
        }

        Ok(response.text().await?)
    }
}
