use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How training data is delivered into the algorithm container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    #[default]
    File,
    Pipe,
    FastFile,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Pipe => "Pipe",
            Self::FastFile => "FastFile",
        }
    }
}

/// How an S3 URI is interpreted by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum S3DataKind {
    #[default]
    S3Prefix,
    ManifestFile,
}

impl S3DataKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S3Prefix => "S3Prefix",
            Self::ManifestFile => "ManifestFile",
        }
    }
}

/// Named training data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputChannel {
    /// Channel name the algorithm sees (e.g. "training")
    pub name: String,
    #[serde(default)]
    pub s3_data_type: S3DataKind,
    pub s3_uri: String,
}

/// Compute shape for a training job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeShape {
    /// Instance type (e.g. "ml.m4.xlarge")
    pub instance_type: String,
    pub instance_count: i32,
    pub volume_size_gb: i32,
}

/// Full parameter record for one training job submission.
///
/// Every field maps 1:1 onto the outbound CreateTrainingJob call; the
/// adapter never defaults or drops anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingJobSpec {
    pub name: String,
    pub hyperparameters: BTreeMap<String, String>,
    pub training_image: String,
    pub input_mode: InputMode,
    pub role_arn: String,
    pub channels: Vec<InputChannel>,
    pub output_s3_path: String,
    pub resources: ComputeShape,
    pub max_runtime_secs: i32,
}

/// Remote lifecycle state of a training job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingJobState {
    InProgress,
    Completed,
    Failed,
    Stopping,
    Stopped,
    Unknown,
}

impl std::fmt::Display for TrainingJobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Stopping => "Stopping",
            Self::Stopped => "Stopped",
            Self::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// What the platform reports for an existing training job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingJobDescription {
    pub name: String,
    pub status: TrainingJobState,
    /// S3 location of the trained artifact, once one exists
    pub artifact_location: Option<String>,
    pub failure_reason: Option<String>,
}

/// Acknowledgement for an accepted training job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingSubmission {
    pub job_name: String,
    pub job_arn: String,
}
