//! # Handler Configuration
//!
//! Options arrive from the host's manifest/registration mechanism as a small
//! JSON object, get validated once at construction, and are read-only for
//! the lifetime of the handler.

use serde::{Deserialize, Serialize};

use crate::context::JobKind;
use crate::error::{HandlerError, HandlerResult};

/// Default recognized tags for Windows Certificate store jobs.
///
/// The job-type tag the host passes is the store-type capability name
/// concatenated with the logical job category; these are the WinCert
/// defaults and can be overridden per deployment.
pub const DEFAULT_INVENTORY_TAG: &str = "WinCertInventory";
pub const DEFAULT_MANAGEMENT_TAG: &str = "WinCertManagement";
pub const DEFAULT_REENROLLMENT_TAG: &str = "WinCertReenrollment";

const DEFAULT_API_TIMEOUT_MS: u64 = 30000;

/// Raw options as supplied in the host manifest.
///
/// Field names match the manifest's JSON keys. Everything except `JobTypes`
/// is optional; `FavoriteAnimal` is a demo parameter that exists only to be
/// logged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HandlerOptions {
    /// Comma-separated list of job-type identifiers the host should invoke
    /// this handler for. Required.
    pub job_types: Option<String>,
    /// Free-form demo parameter, logged on every invocation
    pub favorite_animal: Option<String>,
    /// Recognized tag for inventory jobs
    pub inventory_tag: Option<String>,
    /// Recognized tag for management jobs
    pub management_tag: Option<String>,
    /// Recognized tag for re-enrollment jobs
    pub reenrollment_tag: Option<String>,
    /// Timeout in milliseconds for outbound API calls
    pub api_timeout_ms: Option<u64>,
}

impl HandlerOptions {
    /// Parse options from the JSON object the host's manifest supplies at
    /// registration time.
    pub fn from_manifest(value: serde_json::Value) -> HandlerResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Validated, read-only handler configuration
#[derive(Debug, Clone)]
pub struct CompletionHandlerConfig {
    /// Job-type identifiers the host will invoke this handler for
    pub job_types: Vec<String>,
    /// Demo parameter logged on every invocation
    pub favorite_animal: String,
    /// Recognized tag for inventory jobs
    pub inventory_tag: String,
    /// Recognized tag for management jobs
    pub management_tag: String,
    /// Recognized tag for re-enrollment jobs
    pub reenrollment_tag: String,
    /// Timeout in milliseconds for outbound API calls
    pub api_timeout_ms: u64,
}

impl CompletionHandlerConfig {
    /// Build a validated configuration from manifest options.
    pub fn from_options(options: HandlerOptions) -> HandlerResult<Self> {
        let job_types: Vec<String> = options
            .job_types
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if job_types.is_empty() {
            return Err(HandlerError::configuration(
                "JobTypes must be specified in Options in order for this Completion Handler to run",
            ));
        }

        Ok(Self {
            job_types,
            favorite_animal: options
                .favorite_animal
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Unspecified".to_string()),
            inventory_tag: options
                .inventory_tag
                .unwrap_or_else(|| DEFAULT_INVENTORY_TAG.to_string()),
            management_tag: options
                .management_tag
                .unwrap_or_else(|| DEFAULT_MANAGEMENT_TAG.to_string()),
            reenrollment_tag: options
                .reenrollment_tag
                .unwrap_or_else(|| DEFAULT_REENROLLMENT_TAG.to_string()),
            api_timeout_ms: options.api_timeout_ms.unwrap_or(DEFAULT_API_TIMEOUT_MS),
        })
    }

    /// Validate a manually constructed configuration.
    pub fn validate(&self) -> HandlerResult<()> {
        if self.job_types.is_empty() {
            return Err(HandlerError::configuration(
                "JobTypes must be specified in Options in order for this Completion Handler to run",
            ));
        }
        Ok(())
    }

    /// Classify a job-type tag against the recognized set.
    #[must_use]
    pub fn classify(&self, job_type: &str) -> JobKind {
        if job_type == self.inventory_tag {
            JobKind::Inventory
        } else if job_type == self.management_tag {
            JobKind::Management
        } else if job_type == self.reenrollment_tag {
            JobKind::Reenrollment
        } else {
            JobKind::Unrecognized
        }
    }
}
