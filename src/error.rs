//! # Handler Error Types
//!
//! Unified error handling for the completion handler. Declared business
//! failures (unsuccessful job, missing API client, API rejection) and
//! unexpected failures stay distinguishable here even though the host only
//! ever sees a boolean at the dispatcher boundary.

use thiserror::Error;

use crate::context::JobResult;

/// Handler operation result type
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Error types for completion handler operations
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Job {job_id} for orchestrator {orchestrator} completed with result {result}, expected Success")]
    UnsuccessfulJob {
        job_id: String,
        orchestrator: String,
        result: JobResult,
    },

    #[error("No API client supplied in the context for orchestrator {orchestrator}")]
    MissingApiClient { orchestrator: String },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON serialization/deserialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected handler failure: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl HandlerError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an API error from an HTTP response
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this error is a declared business failure rather than an
    /// unexpected fault.
    ///
    /// Declared failures are conditions the handler understands and expects
    /// (job did not succeed, no client supplied, API said no); they get a
    /// single error-level log line. Anything else is logged with full detail
    /// and the failure site preserved.
    #[must_use]
    pub fn is_declared_failure(&self) -> bool {
        matches!(
            self,
            Self::UnsuccessfulJob { .. }
                | Self::MissingApiClient { .. }
                | Self::Api { .. }
                | Self::Http(_)
        )
    }
}
