//! # Lifecycle Action Error Types
//!
//! Failures of the outbound "complete lifecycle action" call, and the retry
//! classification attached to them.

use crate::constants::TERMINAL_STATUS_CODE;
use std::error::Error as StdError;
use thiserror::Error;

/// Boxed error used for transport-level causes supplied by the client.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A structured rejection from the control plane's transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("response error: http status {status_code}: {message}")]
pub struct ResponseError {
    pub status_code: u16,
    pub message: String,
}

impl ResponseError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    pub const fn http_status_code(&self) -> u16 {
        self.status_code
    }
}

/// Everything that can go wrong while completing a lifecycle action.
#[derive(Debug, Error)]
pub enum LifecycleActionError {
    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("lifecycle action completion cancelled")]
    Cancelled,
}

impl LifecycleActionError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    pub fn transport_with_source(
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Extract the HTTP status of a structured response error, looking through
    /// wrapped causes. `None` means the failure carries no status at all.
    pub fn http_status_code(&self) -> Option<u16> {
        if let Self::Response(response) = self {
            return Some(response.http_status_code());
        }

        let mut cause: Option<&(dyn StdError + 'static)> = StdError::source(self);
        while let Some(err) = cause {
            if let Some(code) = status_code_of(err) {
                return Some(code);
            }
            cause = err.source();
        }
        None
    }

    /// Retryable only when a status code is present and it is not the terminal
    /// one. Errors without a status (network faults, cancellation) are not.
    pub fn is_retryable(&self) -> bool {
        self.http_status_code()
            .is_some_and(|code| code != TERMINAL_STATUS_CODE)
    }
}

/// Status carried by a single cause, without following its `source()`.
///
/// `io::Error` hides its payload from `source()`, so it is opened explicitly.
fn status_code_of(err: &(dyn StdError + 'static)) -> Option<u16> {
    if let Some(response) = err.downcast_ref::<ResponseError>() {
        return Some(response.http_status_code());
    }
    if let Some(nested) = err.downcast_ref::<LifecycleActionError>() {
        return nested.http_status_code();
    }
    if let Some(io) = err.downcast_ref::<std::io::Error>() {
        let inner: &(dyn StdError + 'static) = io.get_ref()?;
        return status_code_of(inner);
    }
    None
}

/// A failed completion together with its retry classification.
#[derive(Debug, Error)]
#[error("lifecycle action completion failed")]
pub struct CompletionError {
    retryable: bool,
    #[source]
    source: LifecycleActionError,
}

impl CompletionError {
    pub fn classify(source: LifecycleActionError) -> Self {
        Self {
            retryable: source.is_retryable(),
            source,
        }
    }

    pub const fn is_retryable(&self) -> bool {
        self.retryable
    }

    pub const fn error(&self) -> &LifecycleActionError {
        &self.source
    }

    /// The original error, unmodified.
    pub fn into_source(self) -> LifecycleActionError {
        self.source
    }

    pub fn into_parts(self) -> (bool, LifecycleActionError) {
        (self.retryable, self.source)
    }
}

impl From<LifecycleActionError> for CompletionError {
    fn from(source: LifecycleActionError) -> Self {
        Self::classify(source)
    }
}
