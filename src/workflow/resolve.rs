use tracing::info;

use crate::domain::{ModelSummary, TrainingJobState};
use crate::error::{Result, SmflowError};
use crate::platform::ControlPlane;

/// Look up the S3 location of a completed training job's artifact.
///
/// An unknown job name surfaces as `NotFound`; a job that exists but has
/// not completed (or reports no artifact) surfaces as `ArtifactUnavailable`.
pub async fn resolve_training_artifact(
    api: &dyn ControlPlane,
    job_name: &str,
) -> Result<String> {
    let description = api.describe_training_job(job_name).await?;

    if description.status != TrainingJobState::Completed {
        return Err(SmflowError::ArtifactUnavailable {
            job: job_name.to_string(),
            status: description.status.to_string(),
        });
    }

    let artifact = description.artifact_location.ok_or_else(|| {
        SmflowError::ArtifactUnavailable {
            job: job_name.to_string(),
            status: description.status.to_string(),
        }
    })?;

    info!(job = %job_name, artifact = %artifact, "resolved training artifact");
    Ok(artifact)
}

/// Pick the most recently created model whose name contains `filter`.
///
/// The listing's order is treated as a hint only; the maximum creation
/// timestamp is selected locally, with ties broken by listing position.
/// Zero matches is a defined failure, never a default name.
pub async fn resolve_latest_model(api: &dyn ControlPlane, filter: &str) -> Result<String> {
    let models = api.list_models(filter).await?;

    let mut latest: Option<ModelSummary> = None;
    for model in models.into_iter().filter(|m| m.name.contains(filter)) {
        let newer = match &latest {
            Some(current) => model.created_at > current.created_at,
            None => true,
        };
        if newer {
            latest = Some(model);
        }
    }

    let latest = latest.ok_or_else(|| SmflowError::NotFound {
        resource: "model",
        name: filter.to_string(),
    })?;

    info!(model = %latest.name, created_at = %latest.created_at, "resolved latest model");
    Ok(latest.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ModelRegistration, ModelSpec, TrainingJobDescription, TrainingJobSpec, TrainingSubmission,
        TransformJobSpec, TransformSubmission,
    };
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};

    struct FakePlane {
        models: Vec<ModelSummary>,
        describe: Option<TrainingJobDescription>,
    }

    impl FakePlane {
        fn with_models(models: Vec<ModelSummary>) -> Self {
            Self {
                models,
                describe: None,
            }
        }

        fn with_description(describe: TrainingJobDescription) -> Self {
            Self {
                models: Vec::new(),
                describe: Some(describe),
            }
        }
    }

    #[async_trait]
    impl ControlPlane for FakePlane {
        async fn submit_training_job(&self, spec: &TrainingJobSpec) -> Result<TrainingSubmission> {
            Ok(TrainingSubmission {
                job_name: spec.name.clone(),
                job_arn: "arn:test".to_string(),
            })
        }

        async fn describe_training_job(&self, job_name: &str) -> Result<TrainingJobDescription> {
            self.describe
                .clone()
                .ok_or_else(|| SmflowError::NotFound {
                    resource: "training job",
                    name: job_name.to_string(),
                })
        }

        async fn create_model(&self, spec: &ModelSpec) -> Result<ModelRegistration> {
            Ok(ModelRegistration {
                model_name: spec.name.clone(),
                model_arn: "arn:test".to_string(),
            })
        }

        async fn list_models(&self, name_contains: &str) -> Result<Vec<ModelSummary>> {
            Ok(self
                .models
                .iter()
                .filter(|m| m.name.contains(name_contains))
                .cloned()
                .collect())
        }

        async fn submit_transform_job(
            &self,
            spec: &TransformJobSpec,
        ) -> Result<TransformSubmission> {
            Ok(TransformSubmission {
                job_name: spec.name.clone(),
                job_arn: "arn:test".to_string(),
            })
        }
    }

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn summary(name: &str, secs: i64) -> ModelSummary {
        ModelSummary {
            name: name.to_string(),
            arn: format!("arn:aws:sagemaker:us-west-2:000000000000:model/{}", name),
            created_at: ts(secs),
        }
    }

    #[tokio::test]
    async fn latest_model_picks_max_creation_time_among_matches() {
        let api = FakePlane::with_models(vec![
            summary("sample-model1", 1),
            summary("sample-model2", 3),
            summary("other", 5),
        ]);

        let name = resolve_latest_model(&api, "sample-model").await.unwrap();
        assert_eq!(name, "sample-model2");
    }

    #[tokio::test]
    async fn latest_model_keeps_first_listed_on_timestamp_tie() {
        let api = FakePlane::with_models(vec![
            summary("sample-model-a", 7),
            summary("sample-model-b", 7),
        ]);

        let name = resolve_latest_model(&api, "sample-model").await.unwrap();
        assert_eq!(name, "sample-model-a");
    }

    #[tokio::test]
    async fn latest_model_with_no_match_is_not_found() {
        let api = FakePlane::with_models(vec![summary("other", 5)]);

        match resolve_latest_model(&api, "sample-model").await {
            Err(SmflowError::NotFound { resource, name }) => {
                assert_eq!(resource, "model");
                assert_eq!(name, "sample-model");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn artifact_resolves_for_completed_job() {
        let api = FakePlane::with_description(TrainingJobDescription {
            name: "sample-training18".to_string(),
            status: TrainingJobState::Completed,
            artifact_location: Some("s3://bucket/path/model.tar.gz".to_string()),
            failure_reason: None,
        });

        let url = resolve_training_artifact(&api, "sample-training18")
            .await
            .unwrap();
        assert_eq!(url, "s3://bucket/path/model.tar.gz");
    }

    #[tokio::test]
    async fn artifact_for_running_job_is_unavailable_not_missing() {
        let api = FakePlane::with_description(TrainingJobDescription {
            name: "sample-training18".to_string(),
            status: TrainingJobState::InProgress,
            artifact_location: None,
            failure_reason: None,
        });

        match resolve_training_artifact(&api, "sample-training18").await {
            Err(SmflowError::ArtifactUnavailable { job, status }) => {
                assert_eq!(job, "sample-training18");
                assert_eq!(status, "InProgress");
            }
            other => panic!("expected ArtifactUnavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn artifact_for_unknown_job_is_not_found() {
        let api = FakePlane::with_models(Vec::new());

        match resolve_training_artifact(&api, "no-such-job").await {
            Err(SmflowError::NotFound { resource, .. }) => {
                assert_eq!(resource, "training job");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn completed_job_without_artifact_is_unavailable() {
        let api = FakePlane::with_description(TrainingJobDescription {
            name: "sample-training18".to_string(),
            status: TrainingJobState::Completed,
            artifact_location: None,
            failure_reason: None,
        });

        assert!(matches!(
            resolve_training_artifact(&api, "sample-training18").await,
            Err(SmflowError::ArtifactUnavailable { .. })
        ));
    }
}
