use anyhow::{Context, Result, bail};
use churn_predict::artifacts::ArtifactPaths;
use churn_predict::config::Config;
use churn_predict::inference::InferenceService;
use churn_predict::logging::init_tracing;
use churn_predict::ui::cli::drivers::InquireDriver;
use churn_predict::ui::cli::run_session;
use inquire::InquireError;
use std::process::ExitCode;
use tracing::error;

fn run() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config.logging);

    let paths = ArtifactPaths::from(&config.artifacts);
    let service = match InferenceService::load(&paths) {
        Ok(service) => service,
        Err(e) if e.is_missing() => {
            error!(error = %e, "cannot start without model artifacts");
            bail!("Model files not found. Please run the training script first.");
        }
        Err(e) => return Err(e).context("failed to load model artifacts"),
    };

    let mut stdout = std::io::stdout().lock();
    run_session(&service, &InquireDriver, &mut stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<InquireError>() {
            Some(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                ExitCode::SUCCESS
            }
            _ => {
                eprintln!("✗ {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}
