#![allow(dead_code)]

pub mod builders;
pub mod mock_autoscaling;
pub mod strategies;

pub use builders::*;
pub use mock_autoscaling::*;
