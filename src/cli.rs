use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::error::Result;
use crate::platform::ControlPlane;
use crate::workflow::{
    register_model, resolve_latest_model, resolve_training_artifact, run_pipeline,
    submit_training, submit_transform,
};

#[derive(Parser)]
#[command(name = "smflow")]
#[command(version = "0.1.0")]
#[command(about = "SageMaker batch training and transform workflow", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory
    #[arg(short, long, default_value = "config")]
    pub config: String,

    /// AWS credential profile override
    #[arg(long)]
    pub profile: Option<String>,

    /// AWS region override
    #[arg(long)]
    pub region: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit the configured training job
    Train,
    /// Register a model from a completed training job's artifact
    CreateModel {
        /// Training job to take the artifact from (defaults to model.training_job)
        #[arg(long)]
        training_job: Option<String>,
    },
    /// Submit a batch transform job against the latest matching model
    Transform {
        /// Use this model name instead of resolving the latest match
        #[arg(long)]
        model: Option<String>,
    },
    /// Run train -> create-model -> transform as one sequence
    Pipeline {
        /// Start from the configured training job instead of submitting a new one
        #[arg(long)]
        skip_train: bool,
    },
    /// Print the effective configuration
    ShowConfig,
}

pub async fn run_train(api: &dyn ControlPlane, config: &AppConfig) -> Result<()> {
    let ack = submit_training(api, &config.training.to_spec()).await?;
    println!("Training job submitted: {}", ack.job_name);
    println!("  ARN: {}", ack.job_arn);
    Ok(())
}

pub async fn run_create_model(
    api: &dyn ControlPlane,
    config: &AppConfig,
    training_job: Option<&str>,
) -> Result<()> {
    let source_job = training_job.unwrap_or(&config.model.training_job);
    let artifact_url = resolve_training_artifact(api, source_job).await?;
    println!("Artifact for {}: {}", source_job, artifact_url);

    let ack = register_model(api, &config.model.to_spec(&artifact_url)).await?;
    println!("Model registered: {}", ack.model_name);
    println!("  ARN: {}", ack.model_arn);
    Ok(())
}

pub async fn run_transform(
    api: &dyn ControlPlane,
    config: &AppConfig,
    model: Option<&str>,
) -> Result<()> {
    let model_name = match model {
        Some(name) => name.to_string(),
        None => resolve_latest_model(api, &config.transform.model_filter).await?,
    };
    println!("Using model: {}", model_name);

    let ack = submit_transform(api, &config.transform.to_spec(&model_name)).await?;
    println!("Transform job submitted: {}", ack.job_name);
    println!("  ARN: {}", ack.job_arn);
    Ok(())
}

pub async fn run_workflow(
    api: &dyn ControlPlane,
    config: &AppConfig,
    skip_train: bool,
) -> Result<()> {
    let outcome = run_pipeline(api, config, skip_train).await?;

    if let Some(training) = &outcome.training_job {
        println!("Training job:  {}", training.job_name);
    }
    println!("Artifact:      {}", outcome.artifact_url);
    println!("Model:         {}", outcome.model.model_name);
    println!("Transform job: {}", outcome.transform.job_name);
    println!("  ARN: {}", outcome.transform.job_arn);
    Ok(())
}

pub fn show_config(config: &AppConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
