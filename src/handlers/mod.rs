//! # Completion Handlers
//!
//! One handler per recognized job category. Handlers are async internally;
//! the dispatcher owns the bridge back to the host's synchronous call.
//!
//! Handlers report failures as typed errors, never as panics and never as
//! control flow. The dispatcher boundary resolves every outcome to the
//! boolean the host expects.

use async_trait::async_trait;

use crate::context::{JobCompletionContext, JobResult};
use crate::error::{HandlerError, HandlerResult};

mod inventory;
mod management;
mod reenrollment;

pub use inventory::InventoryHandler;
pub use management::ManagementHandler;
pub use reenrollment::ReenrollmentHandler;

/// Trait implemented by each per-category completion handler
#[async_trait]
pub trait CompletionHandler: Send + Sync {
    /// Perform post-processing for a completed job.
    async fn handle(&self, context: &JobCompletionContext) -> HandlerResult<()>;
}

/// Shared precondition: the completed job must have succeeded.
pub(crate) fn require_successful(context: &JobCompletionContext) -> HandlerResult<()> {
    if context.job_result == JobResult::Success {
        Ok(())
    } else {
        Err(HandlerError::UnsuccessfulJob {
            job_id: context.job_id.clone(),
            orchestrator: context.orchestrator(),
            result: context.job_result,
        })
    }
}
