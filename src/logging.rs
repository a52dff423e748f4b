//! # Structured Logging Module
//!
//! Subscriber setup for hosts embedding the shim, plus the helper hosts use to
//! record what happened to an event. The event core itself never logs failures;
//! it hands them back to the caller.

use crate::config::{LogFormat, LoggingConfig};
use crate::events::Event;
use crate::lifecycle_action::CompletionError;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging once per process.
///
/// Safe to call repeatedly; if another global subscriber is already installed
/// it is left in place.
pub fn init_structured_logging(config: &LoggingConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let level = config.effective_level();
        let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

        let layer = match config.format {
            LogFormat::Json => fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .json()
                .with_filter(filter)
                .boxed(),
            LogFormat::Pretty => fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter)
                .boxed(),
        };

        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - keeping it");
        }

        tracing::info!(
            environment = %config.environment,
            log_level = %level,
            format = ?config.format,
            "Structured logging initialized"
        );
    });
}

/// Record the result of calling [`Event::done`] on `event`.
pub fn log_event_outcome(event: &dyn Event, outcome: &Result<(), CompletionError>) {
    let instance_ids = event.instance_ids().join(",");
    let record = event.log_record();

    match outcome {
        Ok(()) => tracing::info!(
            kind = event.kind(),
            instance_ids = %instance_ids,
            event = %record,
            "Event handled"
        ),
        Err(e) if e.is_retryable() => tracing::warn!(
            kind = event.kind(),
            instance_ids = %instance_ids,
            event = %record,
            retryable = true,
            error = %e.error(),
            "Event handling failed, will retry"
        ),
        Err(e) => tracing::error!(
            kind = event.kind(),
            instance_ids = %instance_ids,
            event = %record,
            retryable = false,
            error = %e.error(),
            status_code = e.error().http_status_code(),
            "Event handling failed permanently"
        ),
    }
}
