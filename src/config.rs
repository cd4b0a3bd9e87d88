use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::{
    BatchingStrategy, ComputeShape, InputChannel, InputMode, ModelSpec, S3DataKind, SplitMode,
    TrainingJobSpec, TransformInputSpec, TransformJobSpec, TransformShape,
};

/// Main configuration structure.
///
/// Everything the submitters send is held here by name instead of being
/// embedded as literals, so values can be substituted per environment and
/// in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub aws: AwsSettings,
    pub training: TrainingSettings,
    pub model: ModelSettings,
    pub transform: TransformSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsSettings {
    /// Named local credential profile resolved by the SDK
    #[serde(default = "default_profile")]
    pub profile: String,
    pub region: String,
}

fn default_profile() -> String {
    "default".to_string()
}

/// Parameters for one training job submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSettings {
    pub job_name: String,
    #[serde(default)]
    pub hyperparameters: BTreeMap<String, String>,
    /// Algorithm container image URI
    pub image: String,
    #[serde(default)]
    pub input_mode: InputMode,
    pub role_arn: String,
    pub channels: Vec<InputChannel>,
    pub output_s3_path: String,
    pub instance_type: String,
    #[serde(default = "default_instance_count")]
    pub instance_count: i32,
    #[serde(default = "default_volume_size_gb")]
    pub volume_size_gb: i32,
    #[serde(default = "default_max_runtime_secs")]
    pub max_runtime_secs: i32,
}

fn default_instance_count() -> i32 {
    1
}

fn default_volume_size_gb() -> i32 {
    10
}

fn default_max_runtime_secs() -> i32 {
    60 * 60
}

impl TrainingSettings {
    pub fn to_spec(&self) -> TrainingJobSpec {
        TrainingJobSpec {
            name: self.job_name.clone(),
            hyperparameters: self.hyperparameters.clone(),
            training_image: self.image.clone(),
            input_mode: self.input_mode,
            role_arn: self.role_arn.clone(),
            channels: self.channels.clone(),
            output_s3_path: self.output_s3_path.clone(),
            resources: ComputeShape {
                instance_type: self.instance_type.clone(),
                instance_count: self.instance_count,
                volume_size_gb: self.volume_size_gb,
            },
            max_runtime_secs: self.max_runtime_secs,
        }
    }
}

/// Parameters for model registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    pub name: String,
    /// Training job whose artifact backs the model
    pub training_job: String,
    pub role_arn: String,
    /// Serving container image URI
    pub image: String,
}

impl ModelSettings {
    pub fn to_spec(&self, artifact_url: &str) -> ModelSpec {
        ModelSpec {
            name: self.name.clone(),
            execution_role_arn: self.role_arn.clone(),
            image: self.image.clone(),
            artifact_url: artifact_url.to_string(),
        }
    }
}

/// Parameters for one batch transform submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformSettings {
    pub job_name: String,
    /// Substring filter used to resolve the most recent model
    pub model_filter: String,
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: i32,
    #[serde(default = "default_max_payload_mb")]
    pub max_payload_mb: i32,
    #[serde(default)]
    pub batch_strategy: BatchingStrategy,
    #[serde(default)]
    pub input_s3_data_type: S3DataKind,
    pub input_s3_uri: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub split_type: SplitMode,
    pub output_s3_path: String,
    pub instance_type: String,
    #[serde(default = "default_instance_count")]
    pub instance_count: i32,
}

fn default_max_concurrent() -> i32 {
    2
}

fn default_max_payload_mb() -> i32 {
    50
}

impl TransformSettings {
    pub fn to_spec(&self, model_name: &str) -> TransformJobSpec {
        TransformJobSpec {
            name: self.job_name.clone(),
            model_name: model_name.to_string(),
            max_concurrent: self.max_concurrent,
            max_payload_mb: self.max_payload_mb,
            strategy: self.batch_strategy,
            input: TransformInputSpec {
                s3_data_type: self.input_s3_data_type,
                s3_uri: self.input_s3_uri.clone(),
                content_type: self.content_type.clone(),
                split: self.split_type,
            },
            output_s3_path: self.output_s3_path.clone(),
            resources: TransformShape {
                instance_type: self.instance_type.clone(),
                instance_count: self.instance_count,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            .set_default("aws.profile", "default")?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Environment-specific file (e.g. config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("SMFLOW_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Environment overrides (SMFLOW_AWS__REGION, etc.)
            .add_source(
                Environment::with_prefix("SMFLOW")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Default configuration matching the sample workflow.
    pub fn default_config() -> Self {
        Self {
            aws: AwsSettings {
                profile: "default".to_string(),
                region: "us-west-2".to_string(),
            },
            training: TrainingSettings {
                job_name: "sample-training15".to_string(),
                hyperparameters: BTreeMap::from([
                    ("objective".to_string(), "multiclass".to_string()),
                    ("num_class".to_string(), "3".to_string()),
                ]),
                image: "562998738767.dkr.ecr.us-west-2.amazonaws.com/test-sagemaker:latest"
                    .to_string(),
                input_mode: InputMode::File,
                role_arn: "arn:aws:iam::562998738767:role/dev-sagemaker".to_string(),
                channels: vec![InputChannel {
                    name: "training".to_string(),
                    s3_data_type: S3DataKind::S3Prefix,
                    s3_uri: "s3://test-ubuntu-sagemaker/input-data/iris5.csv".to_string(),
                }],
                output_s3_path: "s3://test-ubuntu-sagemaker/output-data/".to_string(),
                instance_type: "ml.m4.xlarge".to_string(),
                instance_count: 1,
                volume_size_gb: 10,
                max_runtime_secs: 60 * 60,
            },
            model: ModelSettings {
                name: "sample-model4".to_string(),
                training_job: "sample-training18".to_string(),
                role_arn: "arn:aws:iam::562998738767:role/dev-sagemaker".to_string(),
                image: "562998738767.dkr.ecr.us-west-2.amazonaws.com/test-sagemaker:latest"
                    .to_string(),
            },
            transform: TransformSettings {
                job_name: "sample-transform2".to_string(),
                model_filter: "sample-model".to_string(),
                max_concurrent: 2,
                max_payload_mb: 50,
                batch_strategy: BatchingStrategy::MultiRecord,
                input_s3_data_type: S3DataKind::S3Prefix,
                input_s3_uri: "s3://test-ubuntu-sagemaker/input-data-prediction/".to_string(),
                content_type: Some("text/csv".to_string()),
                split_type: SplitMode::Line,
                output_s3_path: "s3://test-ubuntu-sagemaker/output-data-prediction/".to_string(),
                instance_type: "ml.c4.xlarge".to_string(),
                instance_count: 1,
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Validate configuration values before any remote call is made.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.aws.region.is_empty() {
            errors.push("aws.region must not be empty".to_string());
        }

        if self.training.job_name.is_empty() {
            errors.push("training.job_name must not be empty".to_string());
        }
        if self.training.channels.is_empty() {
            errors.push("training requires at least one input channel".to_string());
        }
        for channel in &self.training.channels {
            if !channel.s3_uri.starts_with("s3://") {
                errors.push(format!(
                    "training channel '{}' location must be an s3:// URI",
                    channel.name
                ));
            }
        }
        if !self.training.output_s3_path.starts_with("s3://") {
            errors.push("training.output_s3_path must be an s3:// URI".to_string());
        }
        if self.training.instance_count < 1 {
            errors.push("training.instance_count must be at least 1".to_string());
        }
        if self.training.max_runtime_secs <= 0 {
            errors.push("training.max_runtime_secs must be positive".to_string());
        }

        if self.model.name.is_empty() {
            errors.push("model.name must not be empty".to_string());
        }
        if self.model.training_job.is_empty() {
            errors.push("model.training_job must not be empty".to_string());
        }

        if self.transform.job_name.is_empty() {
            errors.push("transform.job_name must not be empty".to_string());
        }
        if self.transform.model_filter.is_empty() {
            errors.push("transform.model_filter must not be empty".to_string());
        }
        if !self.transform.input_s3_uri.starts_with("s3://") {
            errors.push("transform.input_s3_uri must be an s3:// URI".to_string());
        }
        if !self.transform.output_s3_path.starts_with("s3://") {
            errors.push("transform.output_s3_path must be an s3:// URI".to_string());
        }
        if self.transform.instance_count < 1 {
            errors.push("transform.instance_count must be at least 1".to_string());
        }
        if self.transform.max_payload_mb <= 0 {
            errors.push("transform.max_payload_mb must be positive".to_string());
        }
        if self.transform.max_concurrent < 1 {
            errors.push("transform.max_concurrent must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
