//! # Job Completion Context
//!
//! The read-only context the host constructs immediately before invoking the
//! completion handler and discards after the call returns. The handler reads
//! it, never mutates it, and retains nothing from it across invocations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::client::PlatformApiClient;

/// Outcome of the completed orchestrator job, as reported by the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobResult {
    Unknown,
    Success,
    Warning,
    Failure,
}

impl JobResult {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Failure => "Failure",
        }
    }
}

impl fmt::Display for JobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-operation of a certificate-store job.
///
/// The full set covers all job categories, so not every value can occur for
/// every category; Management handlers branch on `Add` and `Remove`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    Unknown,
    Inventory,
    Add,
    Remove,
    Create,
    Discovery,
    Reenrollment,
}

impl OperationType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Inventory => "Inventory",
            Self::Add => "Add",
            Self::Remove => "Remove",
            Self::Create => "Create",
            Self::Discovery => "Discovery",
            Self::Reenrollment => "Reenrollment",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a completion notification by its job-type tag.
///
/// The three recognized tags plus "unrecognized" form a closed set; matching
/// on this enum keeps the dispatch exhaustive at compile time instead of
/// comparing raw strings at every site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    Inventory,
    Management,
    Reenrollment,
    Unrecognized,
}

/// Details of a completed orchestrator job, supplied by the host.
///
/// `job_type` and `job_id` are always present; `api_client`,
/// `certificate_id`, and `request_timestamp` may be absent. The client
/// handle is host-provided transport state and is not serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCompletionContext {
    /// Identifier of the reporting orchestrator instance
    pub agent_id: Uuid,
    /// Hostname of the machine the orchestrator ran on
    pub client_machine: String,
    /// Identity under which the job executed
    pub username: String,
    /// Unique identifier of the completed job
    pub job_id: String,
    /// Job-type tag used for dispatch
    pub job_type: String,
    /// Stable identifier backing `job_type`
    pub job_type_id: Uuid,
    /// Enumerated outcome of the job
    pub job_result: JobResult,
    /// Sub-operation for management jobs
    pub operation_type: OperationType,
    /// Reference to a certificate record, when applicable
    pub certificate_id: Option<i64>,
    /// Time the job was requested, when known
    pub request_timestamp: Option<DateTime<Utc>>,
    /// Number of prior retry attempts, informational; retry policy is
    /// host-owned
    pub current_retry_count: u32,
    /// Host-configured client for calling back into the platform API
    #[serde(skip)]
    pub api_client: Option<PlatformApiClient>,
}

impl JobCompletionContext {
    /// The `[agent_id/client_machine]` token used to identify the reporting
    /// orchestrator in log and error messages.
    #[must_use]
    pub fn orchestrator(&self) -> String {
        format!("[{}/{}]", self.agent_id, self.client_machine)
    }

    /// Convert the context into something printable.
    ///
    /// Operators rely on this dump for diagnosis, so the field list and
    /// order are part of the log contract. Absent optionals print `null`.
    #[must_use]
    pub fn format_fields(&self) -> String {
        let pairs = [
            format!("AgentId : {}", self.agent_id),
            format!("Username : {}", self.username),
            format!("ClientMachine : {}", self.client_machine),
            format!("JobResult : {}", self.job_result),
            format!("JobId : {}", self.job_id),
            format!("JobType : {}", self.job_type),
            format!("JobTypeId : {}", self.job_type_id),
            format!("OperationType : {}", self.operation_type),
            format!(
                "CertificateId : {}",
                self.certificate_id
                    .map_or_else(|| "null".to_string(), |id| id.to_string())
            ),
            format!(
                "RequestTimestamp : {}",
                self.request_timestamp
                    .map_or_else(|| "null".to_string(), |ts| ts.to_rfc3339())
            ),
            format!("CurrentRetryCount : {}", self.current_retry_count),
            format!(
                "Client : {}",
                self.api_client
                    .as_ref()
                    .map_or_else(|| "null".to_string(), |c| c.base_address().to_string())
            ),
        ];

        pairs.join(",\n")
    }
}
