//! Capability interface over the remote control-plane API.

use async_trait::async_trait;

use crate::domain::{
    ModelRegistration, ModelSpec, ModelSummary, TrainingJobDescription, TrainingJobSpec,
    TrainingSubmission, TransformJobSpec, TransformSubmission,
};
use crate::error::Result;

/// The five remote calls this tool needs, expressed over domain types.
///
/// Everything downstream (resolvers, pipeline, CLI handlers) depends on
/// this trait rather than the vendor SDK, so a test double can stand in
/// for the platform without network access.
#[async_trait]
pub trait ControlPlane: Send + Sync {
    /// Submit a training job. Fails with `Conflict` if the name is taken.
    async fn submit_training_job(&self, spec: &TrainingJobSpec) -> Result<TrainingSubmission>;

    /// Describe an existing training job. Fails with `NotFound` for an
    /// unknown name.
    async fn describe_training_job(&self, job_name: &str) -> Result<TrainingJobDescription>;

    /// Register a model. Fails with `Conflict` if the name is taken.
    async fn create_model(&self, spec: &ModelSpec) -> Result<ModelRegistration>;

    /// List models whose name contains `name_contains`, newest first.
    async fn list_models(&self, name_contains: &str) -> Result<Vec<ModelSummary>>;

    /// Submit a batch transform job referencing an existing model.
    async fn submit_transform_job(&self, spec: &TransformJobSpec) -> Result<TransformSubmission>;
}
