//! Autoscaling "instance-terminate lifecycle action" events.
//!
//! The group pauses the instance on a lifecycle hook until the action is
//! completed, so `done` is where the `CONTINUE` is sent.

use super::{AwsEvent, Event};
use crate::constants::{kinds, LIFECYCLE_TRANSITION_TERMINATING};
use crate::lifecycle_action::{CompletionError, LifecycleActionCompleter, LifecycleActionRequest};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LifecycleActionDetail {
    pub auto_scaling_group_name: String,
    #[serde(rename = "EC2InstanceId")]
    pub ec2_instance_id: String,
    pub lifecycle_action_token: String,
    pub lifecycle_hook_name: String,
    pub lifecycle_transition: String,
}

impl LifecycleActionDetail {
    pub fn to_request(&self) -> LifecycleActionRequest {
        LifecycleActionRequest::new(
            self.auto_scaling_group_name.clone(),
            self.lifecycle_action_token.clone(),
            self.lifecycle_hook_name.clone(),
            self.ec2_instance_id.clone(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct TerminateLifecycleAction {
    event: AwsEvent<LifecycleActionDetail>,
    completer: LifecycleActionCompleter,
}

impl TerminateLifecycleAction {
    pub fn new(
        event: AwsEvent<LifecycleActionDetail>,
        completer: LifecycleActionCompleter,
    ) -> Self {
        Self { event, completer }
    }

    pub fn event(&self) -> &AwsEvent<LifecycleActionDetail> {
        &self.event
    }

    pub fn is_terminating(&self) -> bool {
        self.event.detail.lifecycle_transition == LIFECYCLE_TRANSITION_TERMINATING
    }
}

#[async_trait]
impl Event for TerminateLifecycleAction {
    fn kind(&self) -> &'static str {
        kinds::TERMINATE_LIFECYCLE_ACTION
    }

    fn instance_ids(&self) -> Vec<String> {
        vec![self.event.detail.ec2_instance_id.clone()]
    }

    async fn done(&self, cancel: &CancellationToken) -> Result<(), CompletionError> {
        self.completer
            .complete(cancel, self.event.detail.to_request())
            .await
    }

    fn log_record(&self) -> Value {
        self.event.log_record()
    }
}
