//! # Job Completion Handler
//!
//! Sample job completion handler plugin for a certificate-lifecycle
//! orchestration platform.
//!
//! ## Overview
//!
//! The host platform invokes a completion handler synchronously after an
//! orchestrator job finishes, passing a read-only context describing the job.
//! The handler performs vendor-specific post-processing (here: diagnostic
//! logging and a callback into the host's job-history API) and reports a
//! single boolean back to the host. That boolean is the only host-visible
//! signal; all detail goes to the log stream.
//!
//! This crate implements handlers for the three certificate-store job
//! categories (Inventory, Management, Re-enrollment). The Inventory handler
//! demonstrates calling back into the host API; the other two are placeholder
//! dispatch targets showing where custom post-processing goes. No side
//! effects occur beyond log output and the single API read.
//!
//! ## Module Organization
//!
//! - [`context`] - The job completion context supplied by the host
//! - [`config`] - Handler options from the host manifest and their validation
//! - [`client`] - HTTP client for callbacks into the host API
//! - [`handlers`] - Per-job-category completion handlers
//! - [`dispatcher`] - The synchronous host-facing entry point
//! - [`error`] - Structured error handling
//! - [`logging`] - Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use job_completion_handler::config::{CompletionHandlerConfig, HandlerOptions};
//! use job_completion_handler::dispatcher::{CompletionDispatcher, JobCompletionHandler};
//!
//! # fn example(context: job_completion_handler::context::JobCompletionContext)
//! # -> Result<(), Box<dyn std::error::Error>> {
//! let options = HandlerOptions::from_manifest(serde_json::json!({
//!     "JobTypes": "fc530b09-e434-4d89-b2d2-bd60f6dcfbfb",
//! }))?;
//! let config = CompletionHandlerConfig::from_options(options)?;
//! let dispatcher = CompletionDispatcher::new(config)?;
//!
//! // The host calls this once per completed job.
//! let handled = dispatcher.handle_completion(Some(&context));
//! # let _ = handled;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod logging;

pub use client::{PlatformApiClient, PlatformApiConfig};
pub use config::{CompletionHandlerConfig, HandlerOptions};
pub use context::{JobCompletionContext, JobKind, JobResult, OperationType};
pub use dispatcher::{CompletionDispatcher, JobCompletionHandler};
pub use error::{HandlerError, HandlerResult};
