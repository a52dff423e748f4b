#![allow(clippy::doc_markdown)] // Allow technical terms like EC2, EventBridge in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Termination Shim
//!
//! Event reconciliation core for autoscaling lifecycle actions and EC2 instance
//! state-change notifications.
//!
//! ## Overview
//!
//! A host process receives infrastructure events, wraps each one in the
//! adapter for its kind, and asks the adapter whether its handling is done.
//! For lifecycle-hook events that means acknowledging the paused action to the
//! autoscaling control plane with `CONTINUE`; the answer tells the host
//! whether a failed acknowledgement is worth retrying.
//!
//! Polling event sources, parsing payloads and scheduling retries are the
//! host's job. This crate provides the decision primitives.
//!
//! ## Module Organization
//!
//! - [`lifecycle_action`] - Lifecycle action completion and failure classification
//! - [`events`] - Event envelope and per-kind adapters behind the [`Event`] trait
//! - [`config`] - Layered configuration
//! - [`logging`] - Subscriber setup and event outcome records
//! - [`error`] - Crate-level error type
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use termination_shim::events::Event;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example(event: &dyn Event) {
//! match event.done(&CancellationToken::new()).await {
//!     Ok(()) => {}
//!     Err(e) if e.is_retryable() => { /* schedule another attempt */ }
//!     Err(e) => eprintln!("giving up on {:?}: {e}", event.instance_ids()),
//! }
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod lifecycle_action;
pub mod logging;

pub use config::{LogFormat, LoggingConfig, ShimConfig};
pub use error::{Result, ShimError};
pub use events::{
    AwsEvent, Event, InstanceStateChangeDetail, InstanceStateChangeNotification,
    LifecycleActionDetail, TerminateLifecycleAction,
};
pub use lifecycle_action::{
    CompleteLifecycleAction, CompletionError, LifecycleActionCompleter, LifecycleActionError,
    LifecycleActionRequest, ResponseError,
};
