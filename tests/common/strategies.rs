//! Proptest strategies for event and request fields

use proptest::prelude::*;

pub fn instance_id_strategy() -> impl Strategy<Value = String> {
    "i-[0-9a-f]{8}([0-9a-f]{9})?"
}

pub fn instance_state_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("pending".to_string()),
        Just("running".to_string()),
        Just("stopping".to_string()),
        Just("stopped".to_string()),
        Just("shutting-down".to_string()),
        Just("terminated".to_string()),
    ]
}

/// Any HTTP status the control plane could plausibly answer with
pub fn status_code_strategy() -> impl Strategy<Value = u16> {
    prop_oneof![Just(400u16), 100u16..600u16]
}

pub fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{0,32}"
}
