use serde::{Deserialize, Serialize};

use super::S3DataKind;

/// How input records are grouped into transform requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BatchingStrategy {
    #[default]
    MultiRecord,
    SingleRecord,
}

impl BatchingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultiRecord => "MultiRecord",
            Self::SingleRecord => "SingleRecord",
        }
    }
}

/// How input objects are split into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SplitMode {
    None,
    #[default]
    Line,
    RecordIo,
    Tfrecord,
}

impl SplitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Line => "Line",
            Self::RecordIo => "RecordIO",
            Self::Tfrecord => "TFRecord",
        }
    }
}

/// Input data location and format for a transform job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformInputSpec {
    #[serde(default)]
    pub s3_data_type: S3DataKind,
    pub s3_uri: String,
    pub content_type: Option<String>,
    #[serde(default)]
    pub split: SplitMode,
}

/// Compute shape for a transform job (no attached volume).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformShape {
    pub instance_type: String,
    pub instance_count: i32,
}

/// Full parameter record for one batch transform submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformJobSpec {
    pub name: String,
    /// Name of an existing registered model
    pub model_name: String,
    pub max_concurrent: i32,
    pub max_payload_mb: i32,
    pub strategy: BatchingStrategy,
    pub input: TransformInputSpec,
    pub output_s3_path: String,
    pub resources: TransformShape,
}

/// Acknowledgement for an accepted transform job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformSubmission {
    pub job_name: String,
    pub job_arn: String,
}
