use clap::Parser;
use smflow::adapters::SageMakerClient;
use smflow::cli::{self, Cli, Commands};
use smflow::config::{AppConfig, LoggingConfig};
use smflow::error::{Result, SmflowError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match AppConfig::load_from(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            init_logging(&LoggingConfig::default());
            warn!("Failed to load configuration: {} - using defaults", e);
            AppConfig::default_config()
        }
    };

    // CLI flags override the config file
    if let Some(profile) = &cli.profile {
        config.aws.profile = profile.clone();
    }
    if let Some(region) = &cli.region {
        config.aws.region = region.clone();
    }

    init_logging(&config.logging);

    if let Err(errors) = config.validate() {
        return Err(SmflowError::Validation(errors.join("; ")));
    }

    if let Commands::ShowConfig = cli.command {
        cli::show_config(&config)?;
        return Ok(());
    }

    info!(
        profile = %config.aws.profile,
        region = %config.aws.region,
        "connecting to SageMaker control plane"
    );
    let client = SageMakerClient::connect(&config.aws.profile, &config.aws.region).await;

    match cli.command {
        Commands::Train => cli::run_train(&client, &config).await?,
        Commands::CreateModel { training_job } => {
            cli::run_create_model(&client, &config, training_job.as_deref()).await?
        }
        Commands::Transform { model } => {
            cli::run_transform(&client, &config, model.as_deref()).await?
        }
        Commands::Pipeline { skip_train } => {
            cli::run_workflow(&client, &config, skip_train).await?
        }
        Commands::ShowConfig => unreachable!("handled above"),
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},aws_config=warn,aws_smithy_runtime=warn,hyper=warn",
            config.level
        ))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if config.json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}
