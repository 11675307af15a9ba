//! # Management Completion Handler
//!
//! Management jobs carry a sub-operation type. Add and Remove operations get
//! dedicated placeholder sub-routines; every other operation is logged
//! generically. No network call is made.

use async_trait::async_trait;
use tracing::trace;

use crate::context::{JobCompletionContext, OperationType};
use crate::error::HandlerResult;
use crate::handlers::{require_successful, CompletionHandler};

/// Handler for completed management jobs
#[derive(Debug, Default)]
pub struct ManagementHandler;

impl ManagementHandler {
    fn process_add(&self, context: &JobCompletionContext) {
        trace!(job_id = %context.job_id, "Management job process for an Add operation");
    }

    fn process_remove(&self, context: &JobCompletionContext) {
        trace!(job_id = %context.job_id, "Management job process for a Remove operation");
    }
}

#[async_trait]
impl CompletionHandler for ManagementHandler {
    async fn handle(&self, context: &JobCompletionContext) -> HandlerResult<()> {
        trace!("Executing the Management handler");

        require_successful(context)?;

        trace!("Custom logic for Management completion handler here");

        match context.operation_type {
            OperationType::Add => self.process_add(context),
            OperationType::Remove => self.process_remove(context),
            other => {
                trace!(job_id = %context.job_id, "Management job process for operation type {other}");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use crate::{HandlerError, JobResult};

    #[tokio::test]
    async fn succeeds_for_every_operation_type() {
        for operation in [
            OperationType::Unknown,
            OperationType::Inventory,
            OperationType::Add,
            OperationType::Remove,
            OperationType::Create,
            OperationType::Discovery,
            OperationType::Reenrollment,
        ] {
            let mut ctx = context("WinCertManagement", JobResult::Success);
            ctx.operation_type = operation;
            assert!(ManagementHandler.handle(&ctx).await.is_ok());
        }
    }

    #[tokio::test]
    async fn unsuccessful_job_fails_the_precondition() {
        let ctx = context("WinCertManagement", JobResult::Warning);
        let err = ManagementHandler.handle(&ctx).await.unwrap_err();
        assert!(matches!(err, HandlerError::UnsuccessfulJob { .. }));
    }
}
