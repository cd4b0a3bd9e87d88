use thiserror::Error;

/// Main error type for the workflow CLI.
///
/// One variant per remote failure category; nothing is retried locally,
/// every error propagates to the caller.
#[derive(Error, Debug)]
pub enum SmflowError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Authentication errors (bad/missing profile, expired or denied credentials)
    #[error("Authentication error: {0}")]
    Auth(String),

    // Resource-conflict errors (duplicate job/model name)
    #[error("{resource} already exists: {name}")]
    Conflict { resource: &'static str, name: String },

    // Resource-not-found errors
    #[error("{resource} not found: {name}")]
    NotFound { resource: &'static str, name: String },

    // The job exists but has not produced an artifact (distinct from NotFound)
    #[error("training job '{job}' has no model artifact (status: {status})")]
    ArtifactUnavailable { job: String, status: String },

    // Validation errors (malformed parameter record, quota exceeded)
    #[error("Validation failed: {0}")]
    Validation(String),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid request parameter: {0}")]
    InvalidParameter(#[from] aws_sdk_sagemaker::error::BuildError),

    // Transient network/service errors
    #[error("SageMaker API error during {operation}: {message}")]
    Api {
        operation: &'static str,
        message: String,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for SmflowError
pub type Result<T> = std::result::Result<T, SmflowError>;
