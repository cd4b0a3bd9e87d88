pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod platform;
pub mod workflow;

pub use adapters::SageMakerClient;
pub use config::AppConfig;
pub use error::{Result, SmflowError};
pub use platform::ControlPlane;
