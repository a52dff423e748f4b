//! Event builders for integration tests

use chrono::{TimeZone, Utc};
use std::sync::Arc;
use termination_shim::constants::events::{
    DETAIL_TYPE_INSTANCE_STATE_CHANGE, DETAIL_TYPE_TERMINATE_LIFECYCLE_ACTION, SOURCE_AUTOSCALING,
    SOURCE_EC2,
};
use termination_shim::constants::LIFECYCLE_TRANSITION_TERMINATING;
use termination_shim::events::{
    AwsEvent, InstanceStateChangeDetail, InstanceStateChangeNotification, LifecycleActionDetail,
    TerminateLifecycleAction,
};
use termination_shim::lifecycle_action::{
    CompleteLifecycleAction, LifecycleActionCompleter, LifecycleActionRequest,
};

pub const GROUP: &str = "asg-1";
pub const TOKEN: &str = "tok-abc";
pub const HOOK: &str = "hook-x";
pub const INSTANCE: &str = "i-123";

pub fn sample_request() -> LifecycleActionRequest {
    LifecycleActionRequest::new(GROUP, TOKEN, HOOK, INSTANCE)
}

pub fn state_change(instance_id: &str, state: &str) -> InstanceStateChangeNotification {
    AwsEvent::new(
        "7bf73129-1428-4cd3-a780-95db273d1602",
        SOURCE_EC2,
        DETAIL_TYPE_INSTANCE_STATE_CHANGE,
        InstanceStateChangeDetail {
            instance_id: instance_id.to_string(),
            state: state.to_string(),
        },
    )
    .with_account("123456789012")
    .with_region("us-east-1")
    .with_time(Utc.with_ymd_and_hms(2022, 6, 1, 12, 0, 0).unwrap())
    .with_resources(vec![format!(
        "arn:aws:ec2:us-east-1:123456789012:instance/{instance_id}"
    )])
    .into()
}

pub fn terminate_action(client: Arc<dyn CompleteLifecycleAction>) -> TerminateLifecycleAction {
    let event = AwsEvent::new(
        "12345678-1234-1234-1234-123456789012",
        SOURCE_AUTOSCALING,
        DETAIL_TYPE_TERMINATE_LIFECYCLE_ACTION,
        LifecycleActionDetail {
            auto_scaling_group_name: GROUP.to_string(),
            ec2_instance_id: INSTANCE.to_string(),
            lifecycle_action_token: TOKEN.to_string(),
            lifecycle_hook_name: HOOK.to_string(),
            lifecycle_transition: LIFECYCLE_TRANSITION_TERMINATING.to_string(),
        },
    )
    .with_account("123456789012")
    .with_region("us-east-1");

    TerminateLifecycleAction::new(event, LifecycleActionCompleter::new(client))
}
