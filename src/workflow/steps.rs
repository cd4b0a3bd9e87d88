use serde::Serialize;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{
    ModelRegistration, ModelSpec, TrainingJobSpec, TrainingSubmission, TransformJobSpec,
    TransformSubmission,
};
use crate::error::Result;
use crate::platform::ControlPlane;
use crate::workflow::{resolve_latest_model, resolve_training_artifact};

/// Submit one training job. The new remote job starts executing; no local
/// state is retained beyond the acknowledgement.
pub async fn submit_training(
    api: &dyn ControlPlane,
    spec: &TrainingJobSpec,
) -> Result<TrainingSubmission> {
    info!(job = %spec.name, image = %spec.training_image, "submitting training job");
    let ack = api.submit_training_job(spec).await?;
    info!(arn = %ack.job_arn, "training job accepted");
    Ok(ack)
}

/// Register a model pointing at a resolved artifact location.
pub async fn register_model(api: &dyn ControlPlane, spec: &ModelSpec) -> Result<ModelRegistration> {
    info!(model = %spec.name, artifact = %spec.artifact_url, "registering model");
    let ack = api.create_model(spec).await?;
    info!(arn = %ack.model_arn, "model registered");
    Ok(ack)
}

/// Submit one batch transform job referencing an existing model.
pub async fn submit_transform(
    api: &dyn ControlPlane,
    spec: &TransformJobSpec,
) -> Result<TransformSubmission> {
    info!(job = %spec.name, model = %spec.model_name, "submitting transform job");
    let ack = api.submit_transform_job(spec).await?;
    info!(arn = %ack.job_arn, "transform job accepted");
    Ok(ack)
}

/// What a full pipeline run produced, step by step.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub training_job: Option<TrainingSubmission>,
    pub artifact_url: String,
    pub model: ModelRegistration,
    pub transform: TransformSubmission,
}

/// Run the whole dependency chain as an explicit sequence of typed steps:
/// job name -> artifact URL -> model name -> transform job.
///
/// With `skip_train` the chain starts from the already-configured training
/// job instead of submitting a new one. The artifact resolve step requires
/// the platform to have completed that job; if it has not, the run aborts
/// with `ArtifactUnavailable` and nothing downstream is submitted.
pub async fn run_pipeline(
    api: &dyn ControlPlane,
    config: &AppConfig,
    skip_train: bool,
) -> Result<PipelineOutcome> {
    let (training_job, source_job) = if skip_train {
        (None, config.model.training_job.clone())
    } else {
        let ack = submit_training(api, &config.training.to_spec()).await?;
        let name = ack.job_name.clone();
        (Some(ack), name)
    };

    let artifact_url = resolve_training_artifact(api, &source_job).await?;
    let model = register_model(api, &config.model.to_spec(&artifact_url)).await?;

    let model_name = resolve_latest_model(api, &config.transform.model_filter).await?;
    let transform = submit_transform(api, &config.transform.to_spec(&model_name)).await?;

    Ok(PipelineOutcome {
        training_job,
        artifact_url,
        model,
        transform,
    })
}
