//! SageMaker control-plane adapter built on the official AWS SDK.
//!
//! Credential resolution stays inside the SDK: the client is bound to a
//! named local profile and a region for the process lifetime, and auth
//! failures surface on the first remote call.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sagemaker::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_sagemaker::primitives::DateTime as SdkDateTime;
use aws_sdk_sagemaker::types as sm;
use aws_sdk_sagemaker::Client;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{
    InputChannel, ModelRegistration, ModelSpec, ModelSummary, TrainingJobDescription,
    TrainingJobSpec, TrainingJobState, TrainingSubmission, TransformJobSpec, TransformSubmission,
};
use crate::error::{Result, SmflowError};
use crate::platform::ControlPlane;

/// Authenticated handle to the SageMaker control plane.
#[derive(Clone)]
pub struct SageMakerClient {
    client: Client,
    region: String,
}

impl SageMakerClient {
    /// Build a client from a named credential profile and a region.
    ///
    /// An absent or expired profile is not detected here; the SDK reports
    /// it as an auth error on the first call.
    pub async fn connect(profile: &str, region: &str) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .region(Region::new(region.to_string()))
            .load()
            .await;

        info!(profile = %profile, region = %region, "SageMaker client initialized");
        Self {
            client: Client::new(&shared),
            region: region.to_string(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    fn channel_to_sdk(channel: &InputChannel) -> Result<sm::Channel> {
        let s3 = sm::S3DataSource::builder()
            .s3_data_type(sm::S3DataType::from(channel.s3_data_type.as_str()))
            .s3_uri(&channel.s3_uri)
            .build();

        Ok(sm::Channel::builder()
            .channel_name(&channel.name)
            .data_source(sm::DataSource::builder().s3_data_source(s3).build())
            .build())
    }
}

/// Translate a service error into the local taxonomy by its error code.
///
/// DescribeTrainingJob reports unknown job names as a ValidationException,
/// so that code is inspected for a not-found message before being treated
/// as a validation failure.
fn classify_api_error(
    operation: &'static str,
    resource: &'static str,
    name: &str,
    code: &str,
    message: &str,
    full: String,
) -> SmflowError {
    match code {
        "ResourceInUse" => SmflowError::Conflict {
            resource,
            name: name.to_string(),
        },
        "ResourceNotFound" => SmflowError::NotFound {
            resource,
            name: name.to_string(),
        },
        "ValidationException"
            if message.contains("not found") || message.contains("does not exist") =>
        {
            SmflowError::NotFound {
                resource,
                name: name.to_string(),
            }
        }
        "ValidationException" | "ResourceLimitExceeded" => {
            SmflowError::Validation(format!("{}: {}", operation, message))
        }
        "UnrecognizedClientException"
        | "InvalidClientTokenId"
        | "ExpiredTokenException"
        | "AccessDeniedException" => SmflowError::Auth(format!("{}: {}", operation, message)),
        _ => SmflowError::Api {
            operation,
            message: full,
        },
    }
}

fn map_sdk_error<E>(
    operation: &'static str,
    resource: &'static str,
    name: &str,
    err: SdkError<E>,
) -> SmflowError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let code = err.meta().code().unwrap_or_default().to_string();
    let message = err.meta().message().unwrap_or_default().to_string();
    let full = format!("{} ({})", err, message);
    classify_api_error(operation, resource, name, &code, &message, full)
}

fn to_chrono(value: &SdkDateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(value.secs(), value.subsec_nanos()).unwrap_or_default()
}

fn map_training_status(status: &sm::TrainingJobStatus) -> TrainingJobState {
    match status {
        sm::TrainingJobStatus::InProgress => TrainingJobState::InProgress,
        sm::TrainingJobStatus::Completed => TrainingJobState::Completed,
        sm::TrainingJobStatus::Failed => TrainingJobState::Failed,
        sm::TrainingJobStatus::Stopping => TrainingJobState::Stopping,
        sm::TrainingJobStatus::Stopped => TrainingJobState::Stopped,
        _ => TrainingJobState::Unknown,
    }
}

#[async_trait]
impl ControlPlane for SageMakerClient {
    async fn submit_training_job(&self, spec: &TrainingJobSpec) -> Result<TrainingSubmission> {
        let algorithm = sm::AlgorithmSpecification::builder()
            .training_image(&spec.training_image)
            .training_input_mode(sm::TrainingInputMode::from(spec.input_mode.as_str()))
            .build();

        let resources = sm::ResourceConfig::builder()
            .instance_type(sm::TrainingInstanceType::from(
                spec.resources.instance_type.as_str(),
            ))
            .instance_count(spec.resources.instance_count)
            .volume_size_in_gb(spec.resources.volume_size_gb)
            .build();

        let stopping = sm::StoppingCondition::builder()
            .max_runtime_in_seconds(spec.max_runtime_secs)
            .build();

        let mut request = self
            .client
            .create_training_job()
            .training_job_name(&spec.name)
            .algorithm_specification(algorithm)
            .role_arn(&spec.role_arn)
            .output_data_config(
                sm::OutputDataConfig::builder()
                    .s3_output_path(&spec.output_s3_path)
                    .build(),
            )
            .resource_config(resources)
            .stopping_condition(stopping);

        for (key, value) in &spec.hyperparameters {
            request = request.hyper_parameters(key, value);
        }
        for channel in &spec.channels {
            request = request.input_data_config(Self::channel_to_sdk(channel)?);
        }

        debug!(job = %spec.name, "sending CreateTrainingJob");
        let output = request
            .send()
            .await
            .map_err(|e| map_sdk_error("CreateTrainingJob", "training job", &spec.name, e))?;

        Ok(TrainingSubmission {
            job_name: spec.name.clone(),
            job_arn: output.training_job_arn().unwrap_or_default().to_string(),
        })
    }

    async fn describe_training_job(&self, job_name: &str) -> Result<TrainingJobDescription> {
        let output = self
            .client
            .describe_training_job()
            .training_job_name(job_name)
            .send()
            .await
            .map_err(|e| map_sdk_error("DescribeTrainingJob", "training job", job_name, e))?;

        let location = output
            .model_artifacts()
            .and_then(|artifacts| artifacts.s3_model_artifacts())
            .unwrap_or_default()
            .to_string();

        Ok(TrainingJobDescription {
            name: output.training_job_name().unwrap_or_default().to_string(),
            status: output
                .training_job_status()
                .map(map_training_status)
                .unwrap_or(TrainingJobState::Unknown),
            artifact_location: if location.is_empty() {
                None
            } else {
                Some(location)
            },
            failure_reason: output.failure_reason().map(ToString::to_string),
        })
    }

    async fn create_model(&self, spec: &ModelSpec) -> Result<ModelRegistration> {
        let container = sm::ContainerDefinition::builder()
            .image(&spec.image)
            .model_data_url(&spec.artifact_url)
            .build();

        debug!(model = %spec.name, artifact = %spec.artifact_url, "sending CreateModel");
        let output = self
            .client
            .create_model()
            .model_name(&spec.name)
            .execution_role_arn(&spec.execution_role_arn)
            .primary_container(container)
            .send()
            .await
            .map_err(|e| map_sdk_error("CreateModel", "model", &spec.name, e))?;

        Ok(ModelRegistration {
            model_name: spec.name.clone(),
            model_arn: output.model_arn().unwrap_or_default().to_string(),
        })
    }

    async fn list_models(&self, name_contains: &str) -> Result<Vec<ModelSummary>> {
        let mut out = Vec::new();
        let mut next_token: Option<String> = None;

        // Follow NextToken so the caller sees every match, not one page.
        loop {
            let mut request = self
                .client
                .list_models()
                .name_contains(name_contains)
                .sort_by(sm::ModelSortKey::CreationTime)
                .sort_order(sm::OrderKey::Descending);
            if let Some(token) = &next_token {
                request = request.next_token(token);
            }

            let page = request
                .send()
                .await
                .map_err(|e| map_sdk_error("ListModels", "model", name_contains, e))?;

            for summary in page.models() {
                out.push(ModelSummary {
                    name: summary.model_name().unwrap_or_default().to_string(),
                    arn: summary.model_arn().unwrap_or_default().to_string(),
                    created_at: summary.creation_time().map(to_chrono).unwrap_or_default(),
                });
            }

            match page.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }

        Ok(out)
    }

    async fn submit_transform_job(&self, spec: &TransformJobSpec) -> Result<TransformSubmission> {
        let s3_source = sm::TransformS3DataSource::builder()
            .s3_data_type(sm::S3DataType::from(spec.input.s3_data_type.as_str()))
            .s3_uri(&spec.input.s3_uri)
            .build();

        let input = sm::TransformInput::builder()
            .data_source(
                sm::TransformDataSource::builder()
                    .s3_data_source(s3_source)
                    .build(),
            )
            .set_content_type(spec.input.content_type.clone())
            .split_type(sm::SplitType::from(spec.input.split.as_str()))
            .build();

        let resources = sm::TransformResources::builder()
            .instance_type(sm::TransformInstanceType::from(
                spec.resources.instance_type.as_str(),
            ))
            .instance_count(spec.resources.instance_count)
            .build();

        debug!(job = %spec.name, model = %spec.model_name, "sending CreateTransformJob");
        let output = self
            .client
            .create_transform_job()
            .transform_job_name(&spec.name)
            .model_name(&spec.model_name)
            .max_concurrent_transforms(spec.max_concurrent)
            .max_payload_in_mb(spec.max_payload_mb)
            .batch_strategy(sm::BatchStrategy::from(spec.strategy.as_str()))
            .transform_input(input)
            .transform_output(
                sm::TransformOutput::builder()
                    .s3_output_path(&spec.output_s3_path)
                    .build(),
            )
            .transform_resources(resources)
            .send()
            .await
            .map_err(|e| map_sdk_error("CreateTransformJob", "transform job", &spec.name, e))?;

        Ok(TransformSubmission {
            job_name: spec.name.clone(),
            job_arn: output.transform_job_arn().unwrap_or_default().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(code: &str, message: &str) -> SmflowError {
        classify_api_error(
            "CreateTrainingJob",
            "training job",
            "sample-training15",
            code,
            message,
            message.to_string(),
        )
    }

    #[test]
    fn duplicate_name_maps_to_conflict() {
        match classify("ResourceInUse", "Training job already exists") {
            SmflowError::Conflict { resource, name } => {
                assert_eq!(resource, "training job");
                assert_eq!(name, "sample-training15");
            }
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[test]
    fn missing_resource_maps_to_not_found() {
        assert!(matches!(
            classify("ResourceNotFound", "no such job"),
            SmflowError::NotFound { .. }
        ));
    }

    #[test]
    fn validation_not_found_message_maps_to_not_found() {
        // DescribeTrainingJob shape: unknown names come back as ValidationException.
        assert!(matches!(
            classify("ValidationException", "Requested resource not found"),
            SmflowError::NotFound { .. }
        ));
    }

    #[test]
    fn quota_maps_to_validation() {
        assert!(matches!(
            classify("ResourceLimitExceeded", "account limit reached"),
            SmflowError::Validation(_)
        ));
    }

    #[test]
    fn expired_credentials_map_to_auth() {
        assert!(matches!(
            classify("ExpiredTokenException", "The security token is expired"),
            SmflowError::Auth(_)
        ));
    }

    #[test]
    fn unrecognized_code_stays_api_error() {
        assert!(matches!(
            classify("InternalFailure", "oops"),
            SmflowError::Api { .. }
        ));
    }
}
