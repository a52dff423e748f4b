//! # Lifecycle Action Completer
//!
//! Acknowledges a paused autoscaling lifecycle transition with `CONTINUE` and
//! classifies any failure as retryable or terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use termination_shim::lifecycle_action::{
//!     CompleteLifecycleAction, LifecycleActionCompleter, LifecycleActionRequest,
//! };
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example(client: Arc<dyn CompleteLifecycleAction>) {
//! let completer = LifecycleActionCompleter::new(client);
//! let request = LifecycleActionRequest::new("asg-1", "tok-abc", "hook-x", "i-123");
//!
//! match completer.complete(&CancellationToken::new(), request).await {
//!     Ok(()) => println!("lifecycle action completed"),
//!     Err(e) if e.is_retryable() => println!("try again later: {e}"),
//!     Err(e) => println!("giving up: {e}"),
//! }
//! # }
//! ```

use super::error::{CompletionError, LifecycleActionError};
use super::types::{
    CompleteLifecycleActionInput, CompleteLifecycleActionOutput, LifecycleActionRequest,
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// The control plane's "complete lifecycle action" operation.
///
/// Implementations should observe `cancel` where their transport allows it; the
/// completer also aborts the call itself when the token fires.
#[async_trait]
pub trait CompleteLifecycleAction: Send + Sync {
    async fn complete_lifecycle_action(
        &self,
        cancel: &CancellationToken,
        input: CompleteLifecycleActionInput,
    ) -> Result<CompleteLifecycleActionOutput, LifecycleActionError>;
}

/// Stateless wrapper around an injected [`CompleteLifecycleAction`] client.
#[derive(Clone)]
pub struct LifecycleActionCompleter {
    client: Arc<dyn CompleteLifecycleAction>,
}

impl fmt::Debug for LifecycleActionCompleter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleActionCompleter").finish_non_exhaustive()
    }
}

impl LifecycleActionCompleter {
    pub fn new(client: Arc<dyn CompleteLifecycleAction>) -> Self {
        Self { client }
    }

    /// Signal `CONTINUE` for the pending action described by `request`.
    ///
    /// Issues exactly one call. `Ok(())` means nothing failed and there is
    /// nothing to retry. On failure the original error is returned inside a
    /// [`CompletionError`] whose `is_retryable()` is true only for structured
    /// response errors with a status other than 400.
    pub async fn complete(
        &self,
        cancel: &CancellationToken,
        request: LifecycleActionRequest,
    ) -> Result<(), CompletionError> {
        complete(cancel, self.client.as_ref(), request).await
    }
}

/// Free-function form of [`LifecycleActionCompleter::complete`].
pub async fn complete<C>(
    cancel: &CancellationToken,
    client: &C,
    request: LifecycleActionRequest,
) -> Result<(), CompletionError>
where
    C: CompleteLifecycleAction + ?Sized,
{
    let input = CompleteLifecycleActionInput::continue_action(request);

    debug!(
        auto_scaling_group_name = %input.auto_scaling_group_name,
        lifecycle_hook_name = %input.lifecycle_hook_name,
        instance_id = %input.instance_id,
        "completing lifecycle action"
    );

    // The call branch is polled first so a request is always issued, even if
    // the token was cancelled before we got here.
    let outcome = tokio::select! {
        biased;
        result = client.complete_lifecycle_action(cancel, input) => result,
        () = cancel.cancelled() => Err(LifecycleActionError::Cancelled),
    };

    outcome.map(|_| ()).map_err(CompletionError::classify)
}
