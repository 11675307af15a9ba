//! # Re-enrollment Completion Handler
//!
//! Placeholder target for re-enrollment jobs. Enforces the shared success
//! precondition and marks where custom post-processing goes.

use async_trait::async_trait;
use tracing::trace;

use crate::context::JobCompletionContext;
use crate::error::HandlerResult;
use crate::handlers::{require_successful, CompletionHandler};

/// Handler for completed re-enrollment jobs
#[derive(Debug, Default)]
pub struct ReenrollmentHandler;

#[async_trait]
impl CompletionHandler for ReenrollmentHandler {
    async fn handle(&self, context: &JobCompletionContext) -> HandlerResult<()> {
        trace!("Executing the Reenrollment handler");

        require_successful(context)?;

        trace!("Custom logic for Reenrollment completion handler here");

        Ok(())
    }
}
