//! Mock autoscaling client
//!
//! Implements the "complete lifecycle action" capability with scripted
//! behaviour and records every call it receives.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use termination_shim::lifecycle_action::{
    CompleteLifecycleAction, CompleteLifecycleActionInput, CompleteLifecycleActionOutput,
    LifecycleActionError, ResponseError,
};
use tokio_util::sync::CancellationToken;

/// What the mock does when called
#[derive(Debug, Clone)]
pub enum MockBehavior {
    Succeed,
    Reject { status_code: u16, message: String },
    TransportFailure { message: String },
    /// Transport failure whose cause is a structured rejection buried in an
    /// `io::Error`
    WrappedReject { status_code: u16 },
    MalformedResponse { message: String },
    /// Never answers; only cancellation ends the call
    Hang,
    /// Answers successfully after a delay
    Delay(Duration),
}

#[derive(Debug, Default)]
struct MockState {
    calls: Vec<CompleteLifecycleActionInput>,
}

#[derive(Debug, Clone)]
pub struct MockAutoScaling {
    behavior: MockBehavior,
    state: Arc<Mutex<MockState>>,
}

impl MockAutoScaling {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(MockBehavior::Succeed)
    }

    pub fn rejecting(status_code: u16, message: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reject {
            status_code,
            message: message.into(),
        })
    }

    pub fn failing_transport(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::TransportFailure {
            message: message.into(),
        })
    }

    pub fn calls(&self) -> Vec<CompleteLifecycleActionInput> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }
}

#[async_trait]
impl CompleteLifecycleAction for MockAutoScaling {
    async fn complete_lifecycle_action(
        &self,
        _cancel: &CancellationToken,
        input: CompleteLifecycleActionInput,
    ) -> Result<CompleteLifecycleActionOutput, LifecycleActionError> {
        self.state.lock().unwrap().calls.push(input);

        match &self.behavior {
            MockBehavior::Succeed => Ok(CompleteLifecycleActionOutput::default()),
            MockBehavior::Reject {
                status_code,
                message,
            } => Err(ResponseError::new(*status_code, message.clone()).into()),
            MockBehavior::TransportFailure { message } => {
                Err(LifecycleActionError::transport(message.clone()))
            }
            MockBehavior::WrappedReject { status_code } => {
                Err(LifecycleActionError::transport_with_source(
                    "send request",
                    std::io::Error::other(ResponseError::new(*status_code, "rejected")),
                ))
            }
            MockBehavior::MalformedResponse { message } => {
                Err(LifecycleActionError::malformed_response(message.clone()))
            }
            MockBehavior::Hang => std::future::pending().await,
            MockBehavior::Delay(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(CompleteLifecycleActionOutput::default())
            }
        }
    }
}
