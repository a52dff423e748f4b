use thiserror::Error;

/// Errors raised while setting up the shim around the event core.
///
/// Failures of the remote lifecycle call are not represented here; they travel
/// as [`crate::lifecycle_action::CompletionError`] so their retry
/// classification stays attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShimError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl ShimError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError(message.into())
    }
}

impl From<::config::ConfigError> for ShimError {
    fn from(error: ::config::ConfigError) -> Self {
        Self::ConfigurationError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShimError>;
