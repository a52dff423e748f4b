//! # Lifecycle Actions
//!
//! Completion of paused autoscaling lifecycle transitions. The caller supplies
//! a [`CompleteLifecycleAction`] client; this module decides what to send and
//! whether a failure is worth another attempt. Scheduling that attempt is left
//! to the caller.

pub mod completer;
pub mod error;
pub mod types;

pub use completer::{complete, CompleteLifecycleAction, LifecycleActionCompleter};
pub use error::{BoxError, CompletionError, LifecycleActionError, ResponseError};
pub use types::{
    CompleteLifecycleActionInput, CompleteLifecycleActionOutput, LifecycleActionRequest,
};
