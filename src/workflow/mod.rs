//! The linear workflow: train, resolve artifact, register model, resolve
//! the latest model, transform. Each step consumes the prior step's typed
//! output; nothing is retried.

pub mod resolve;
pub mod steps;

pub use resolve::{resolve_latest_model, resolve_training_artifact};
pub use steps::{register_model, run_pipeline, submit_training, submit_transform, PipelineOutcome};
