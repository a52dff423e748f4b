//! # Event Adapters
//!
//! Typed views over already-parsed infrastructure events. Each event kind is
//! its own type implementing [`Event`], which is all a dispatcher needs: the
//! affected instances, and a `done` check that reports whether handling should
//! be attempted again.

pub mod asg_terminate;
pub mod aws_event;
pub mod state_change;

use crate::lifecycle_action::CompletionError;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use tokio_util::sync::CancellationToken;

pub use asg_terminate::{LifecycleActionDetail, TerminateLifecycleAction};
pub use aws_event::AwsEvent;
pub use state_change::{InstanceStateChangeDetail, InstanceStateChangeNotification};

/// Behaviour shared by every event kind.
#[async_trait]
pub trait Event: Send + Sync + fmt::Debug {
    /// Short label for log records.
    fn kind(&self) -> &'static str;

    /// Instances affected by this event, in event order.
    fn instance_ids(&self) -> Vec<String>;

    /// Finish whatever this event still owes the control plane.
    ///
    /// `Ok(())` means there is nothing left to retry. An `Err` carries the
    /// original failure and whether another attempt could succeed.
    async fn done(&self, cancel: &CancellationToken) -> Result<(), CompletionError>;

    /// The event's own fields, inlined for a structured log record. Never fails.
    fn log_record(&self) -> Value;
}
