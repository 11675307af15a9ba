//! # Completion Dispatcher
//!
//! The host-facing entry point. The host calls `handle_completion`
//! synchronously, once per completed job whose job-type identifier is in the
//! configured set, and expects a direct boolean back.
//!
//! The handlers themselves are async, so the dispatcher owns a small
//! multi-thread runtime: each invocation spawns the handler future onto that
//! runtime's workers and the calling thread blocks on the join handle. The
//! future is driven by the runtime's own workers, never by the blocked
//! caller, so the bridge cannot deadlock against the host's execution
//! context.

use std::sync::Arc;

use tokio::runtime::Runtime;
use tracing::{error, info, trace};

use crate::config::CompletionHandlerConfig;
use crate::context::{JobCompletionContext, JobKind};
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{
    CompletionHandler, InventoryHandler, ManagementHandler, ReenrollmentHandler,
};
use crate::logging::init_logging;

/// Contract the host invokes after a job completes.
///
/// The boolean is the only signal the host receives; failure detail exists
/// solely in the log stream. Implementations must never panic across this
/// boundary.
pub trait JobCompletionHandler: Send + Sync {
    fn handle_completion(&self, context: Option<&JobCompletionContext>) -> bool;
}

/// Dispatches completion notifications to the per-category handlers
pub struct CompletionDispatcher {
    config: CompletionHandlerConfig,
    runtime: Runtime,
    inventory: Arc<dyn CompletionHandler>,
    management: Arc<dyn CompletionHandler>,
    reenrollment: Arc<dyn CompletionHandler>,
}

impl CompletionDispatcher {
    /// Create a dispatcher from validated configuration.
    ///
    /// Logging and the handler runtime are initialized here, once, so no
    /// per-invocation lazy checks are needed afterwards.
    pub fn new(config: CompletionHandlerConfig) -> HandlerResult<Self> {
        init_logging();
        config.validate()?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("completion-handler")
            .enable_all()
            .build()
            .map_err(|e| {
                HandlerError::configuration(format!("Failed to build handler runtime: {e}"))
            })?;

        Ok(Self {
            config,
            runtime,
            inventory: Arc::new(InventoryHandler),
            management: Arc::new(ManagementHandler),
            reenrollment: Arc::new(ReenrollmentHandler),
        })
    }

    /// Replace the inventory handler
    #[must_use]
    pub fn with_inventory_handler(mut self, handler: Arc<dyn CompletionHandler>) -> Self {
        self.inventory = handler;
        self
    }

    /// Replace the management handler
    #[must_use]
    pub fn with_management_handler(mut self, handler: Arc<dyn CompletionHandler>) -> Self {
        self.management = handler;
        self
    }

    /// Replace the re-enrollment handler
    #[must_use]
    pub fn with_reenrollment_handler(mut self, handler: Arc<dyn CompletionHandler>) -> Self {
        self.reenrollment = handler;
        self
    }

    /// Classify the notification and run exactly one handler, resolving its
    /// outcome to the host-visible boolean.
    fn dispatch(&self, context: &JobCompletionContext) -> bool {
        let handler: Arc<dyn CompletionHandler> = match self.config.classify(&context.job_type) {
            JobKind::Inventory => {
                trace!(
                    "Dispatching completion handler for an Inventory job {}",
                    context.job_id
                );
                Arc::clone(&self.inventory)
            }
            JobKind::Management => {
                trace!(
                    "Dispatching completion handler for a Management job {}",
                    context.job_id
                );
                Arc::clone(&self.management)
            }
            JobKind::Reenrollment => {
                trace!(
                    "Dispatching completion handler for the re-enrollment job {}",
                    context.job_id
                );
                Arc::clone(&self.reenrollment)
            }
            JobKind::Unrecognized => {
                trace!(
                    "{} is not implemented by the completion handler. No action taken for job {}",
                    context.job_type,
                    context.job_id
                );
                return false;
            }
        };

        // Spawn onto the dispatcher's own workers, then block the calling
        // thread on the join handle. The workers drive the future to
        // completion independently of the blocked caller.
        let ctx = context.clone();
        let task = self
            .runtime
            .spawn(async move { handler.handle(&ctx).await });

        match self.runtime.block_on(task) {
            Ok(Ok(())) => true,
            Ok(Err(err)) if err.is_declared_failure() => {
                error!(job_id = %context.job_id, "{err}");
                false
            }
            Ok(Err(err)) => {
                error!(
                    job_id = %context.job_id,
                    "FAILURE in completion handler for orchestrator {}: {err:?}",
                    context.orchestrator()
                );
                false
            }
            Err(join_err) => {
                error!(
                    job_id = %context.job_id,
                    "Completion handler task for orchestrator {} did not finish: {join_err}",
                    context.orchestrator()
                );
                false
            }
        }
    }
}

impl JobCompletionHandler for CompletionDispatcher {
    fn handle_completion(&self, context: Option<&JobCompletionContext>) -> bool {
        let Some(context) = context else {
            error!("A null context object was passed to the job completion handler");
            return false;
        };

        info!(
            "Entering job completion handler for orchestrator {} and JobType '{}'",
            context.orchestrator(),
            context.job_type
        );
        info!(
            "This handler's favorite animal is: {}",
            self.config.favorite_animal
        );
        trace!("The context passed is:\n[\n{}\n]", context.format_fields());
        info!(
            "Version of job-completion-handler: {}",
            env!("CARGO_PKG_VERSION")
        );

        let result = self.dispatch(context);

        trace!(
            "Exiting job completion handler for orchestrator {} and JobType '{}' with status: {}",
            context.orchestrator(),
            context.job_type,
            result
        );

        result
    }
}
