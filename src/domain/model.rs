use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameter record for registering a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub name: String,
    pub execution_role_arn: String,
    /// Serving container image
    pub image: String,
    /// S3 location of the trained artifact backing this model
    pub artifact_url: String,
}

/// One entry from the platform's model listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub name: String,
    pub arn: String,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement for a registered model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelRegistration {
    pub model_name: String,
    pub model_arn: String,
}
