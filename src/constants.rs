//! # Shared Constants
//!
//! Wire-level strings and status codes shared by the lifecycle completer and the
//! event adapters.

/// The only lifecycle action result this crate ever signals.
pub const LIFECYCLE_ACTION_RESULT_CONTINUE: &str = "CONTINUE";

/// HTTP status the control plane uses for semantic rejections (stale token,
/// already-completed action, unknown hook). Never worth retrying.
pub const TERMINAL_STATUS_CODE: u16 = 400;

pub const LIFECYCLE_TRANSITION_TERMINATING: &str = "autoscaling:EC2_INSTANCE_TERMINATING";

/// Event envelope sources and detail types
pub mod events {
    pub const SOURCE_AUTOSCALING: &str = "aws.autoscaling";
    pub const SOURCE_EC2: &str = "aws.ec2";

    pub const DETAIL_TYPE_TERMINATE_LIFECYCLE_ACTION: &str =
        "EC2 Instance-terminate Lifecycle Action";
    pub const DETAIL_TYPE_INSTANCE_STATE_CHANGE: &str = "EC2 Instance State-change Notification";
}

/// Event kind labels used in log records
pub mod kinds {
    pub const TERMINATE_LIFECYCLE_ACTION: &str = "asg_terminate_lifecycle_action";
    pub const INSTANCE_STATE_CHANGE: &str = "instance_state_change";
}
