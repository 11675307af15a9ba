//! Shared helpers for integration tests.
#![allow(dead_code)]

use job_completion_handler::{
    CompletionDispatcher, CompletionHandlerConfig, HandlerOptions, JobCompletionContext, JobResult,
    OperationType, PlatformApiClient, PlatformApiConfig,
};
use uuid::Uuid;

pub fn dispatcher() -> CompletionDispatcher {
    let options = HandlerOptions {
        job_types: Some("fc530b09-e434-4d89-b2d2-bd60f6dcfbfb".to_string()),
        favorite_animal: Some("Capuchin Monkey".to_string()),
        ..Default::default()
    };
    CompletionDispatcher::new(CompletionHandlerConfig::from_options(options).unwrap()).unwrap()
}

pub fn context(job_type: &str, job_result: JobResult) -> JobCompletionContext {
    JobCompletionContext {
        agent_id: Uuid::new_v4(),
        client_machine: "orchestrator-01".to_string(),
        username: "svc-orchestrator".to_string(),
        job_id: Uuid::new_v4().to_string(),
        job_type: job_type.to_string(),
        job_type_id: Uuid::new_v4(),
        job_result,
        operation_type: OperationType::Unknown,
        certificate_id: None,
        request_timestamp: None,
        current_retry_count: 0,
        api_client: None,
    }
}

pub fn context_with_client(
    job_type: &str,
    job_result: JobResult,
    base_url: &str,
) -> JobCompletionContext {
    let mut ctx = context(job_type, job_result);
    ctx.api_client = Some(
        PlatformApiClient::new(PlatformApiConfig {
            base_url: base_url.to_string(),
            timeout_ms: 5000,
        })
        .unwrap(),
    );
    ctx
}
