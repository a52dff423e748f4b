//! EC2 instance state-change notifications.
//!
//! These are observations only. There is no lifecycle hook behind them, so
//! `done` never asks for another attempt and never calls out.

use super::{AwsEvent, Event};
use crate::constants::kinds;
use crate::lifecycle_action::CompletionError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InstanceStateChangeDetail {
    pub instance_id: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceStateChangeNotification(pub AwsEvent<InstanceStateChangeDetail>);

impl InstanceStateChangeNotification {
    pub fn new(event: AwsEvent<InstanceStateChangeDetail>) -> Self {
        Self(event)
    }

    pub fn event(&self) -> &AwsEvent<InstanceStateChangeDetail> {
        &self.0
    }

    pub fn state(&self) -> &str {
        &self.0.detail.state
    }
}

impl From<AwsEvent<InstanceStateChangeDetail>> for InstanceStateChangeNotification {
    fn from(event: AwsEvent<InstanceStateChangeDetail>) -> Self {
        Self(event)
    }
}

#[async_trait]
impl Event for InstanceStateChangeNotification {
    fn kind(&self) -> &'static str {
        kinds::INSTANCE_STATE_CHANGE
    }

    fn instance_ids(&self) -> Vec<String> {
        vec![self.0.detail.instance_id.clone()]
    }

    async fn done(&self, _cancel: &CancellationToken) -> Result<(), CompletionError> {
        Ok(())
    }

    fn log_record(&self) -> Value {
        self.0.log_record()
    }
}
