//! # Inventory Completion Handler
//!
//! Demonstrates the common use case of reaching back into the platform API
//! after a job completes: it retrieves the job history for the job that
//! just finished and logs it. The history is not processed further here,
//! but it could be examined to detect a repeatedly failing job and take
//! corrective action.

use async_trait::async_trait;
use tracing::trace;

use crate::context::JobCompletionContext;
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{require_successful, CompletionHandler};

/// Handler for completed inventory jobs
#[derive(Debug, Default)]
pub struct InventoryHandler;

#[async_trait]
impl CompletionHandler for InventoryHandler {
    async fn handle(&self, context: &JobCompletionContext) -> HandlerResult<()> {
        trace!("Executing the Inventory handler");

        require_successful(context)?;

        // The host pre-configures this client with its base address and the
        // caller's ambient credentials, so the API can be called without
        // managing a credential set here.
        let client =
            context
                .api_client
                .as_ref()
                .ok_or_else(|| HandlerError::MissingApiClient {
                    orchestrator: context.orchestrator(),
                })?;

        trace!("Custom logic for Inventory completion handler here");

        let history = client.job_history(&context.job_id).await?;

        trace!(job_id = %context.job_id, "Results of JobHistory API: {history}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use crate::{JobResult, PlatformApiClient, PlatformApiConfig};
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn unsuccessful_job_fails_the_precondition() {
        let ctx = context("WinCertInventory", JobResult::Failure);
        let err = InventoryHandler.handle(&ctx).await.unwrap_err();
        assert!(matches!(err, HandlerError::UnsuccessfulJob { .. }));
    }

    #[tokio::test]
    async fn missing_client_is_a_declared_failure() {
        let ctx = context("WinCertInventory", JobResult::Success);
        let err = InventoryHandler.handle(&ctx).await.unwrap_err();
        assert!(matches!(err, HandlerError::MissingApiClient { .. }));
        assert!(err.is_declared_failure());
    }

    #[tokio::test]
    async fn success_path_queries_job_history_once() {
        let mut server = Server::new_async().await;
        let mut ctx = context("WinCertInventory", JobResult::Success);
        let mock = server
            .mock("GET", "/OrchestratorJobs/JobHistory")
            .match_query(Matcher::UrlEncoded(
                "pq.queryString".into(),
                format!("JobID -eq \"{}\"", ctx.job_id),
            ))
            .with_status(200)
            .with_body("[]")
            .expect(1)
            .create_async()
            .await;

        ctx.api_client = Some(
            PlatformApiClient::new(PlatformApiConfig {
                base_url: server.url(),
                timeout_ms: 5000,
            })
            .unwrap(),
        );

        assert!(InventoryHandler.handle(&ctx).await.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn api_rejection_surfaces_as_an_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/OrchestratorJobs/JobHistory")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("unavailable")
            .create_async()
            .await;

        let mut ctx = context("WinCertInventory", JobResult::Success);
        ctx.api_client = Some(
            PlatformApiClient::new(PlatformApiConfig {
                base_url: server.url(),
                timeout_ms: 5000,
            })
            .unwrap(),
        );

        let err = InventoryHandler.handle(&ctx).await.unwrap_err();
        assert!(matches!(err, HandlerError::Api { status: 503, .. }));
        assert!(err.is_declared_failure());

        mock.assert_async().await;
    }
}
