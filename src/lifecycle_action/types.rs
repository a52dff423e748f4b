use crate::constants::LIFECYCLE_ACTION_RESULT_CONTINUE;
use serde::{Deserialize, Serialize};

/// Identifies one outstanding lifecycle action.
///
/// Built by the caller from event data right before completion. The fields are
/// not checked locally; a mismatched set is rejected by the control plane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleActionRequest {
    pub auto_scaling_group_name: String,
    pub lifecycle_action_token: String,
    pub lifecycle_hook_name: String,
    pub ec2_instance_id: String,
}

impl LifecycleActionRequest {
    pub fn new(
        auto_scaling_group_name: impl Into<String>,
        lifecycle_action_token: impl Into<String>,
        lifecycle_hook_name: impl Into<String>,
        ec2_instance_id: impl Into<String>,
    ) -> Self {
        Self {
            auto_scaling_group_name: auto_scaling_group_name.into(),
            lifecycle_action_token: lifecycle_action_token.into(),
            lifecycle_hook_name: lifecycle_hook_name.into(),
            ec2_instance_id: ec2_instance_id.into(),
        }
    }
}

/// Payload of the outbound "complete lifecycle action" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompleteLifecycleActionInput {
    pub auto_scaling_group_name: String,
    pub lifecycle_action_result: String,
    pub lifecycle_hook_name: String,
    pub lifecycle_action_token: String,
    pub instance_id: String,
}

impl CompleteLifecycleActionInput {
    pub fn continue_action(request: LifecycleActionRequest) -> Self {
        Self {
            auto_scaling_group_name: request.auto_scaling_group_name,
            lifecycle_action_result: LIFECYCLE_ACTION_RESULT_CONTINUE.to_string(),
            lifecycle_hook_name: request.lifecycle_hook_name,
            lifecycle_action_token: request.lifecycle_action_token,
            instance_id: request.ec2_instance_id,
        }
    }
}

/// The operation returns no data on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteLifecycleActionOutput {}
