//! `dottie` - classify one assessment from the command line.
//!
//! Reads a JSON assessment from stdin and prints the pattern result as
//! pretty JSON. Exit code 2 means the required answer was missing or
//! unknown; 1 covers every other failure. Logs go to stderr.

use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dottie::adapters::InMemoryAssessmentRepository;
use dottie::application::{CreateAssessmentCommand, CreateAssessmentHandler};
use dottie::config::{AppConfig, LoggingConfig};
use dottie::domain::assessment::{AssessmentError, RawAssessmentInput};
use dottie::domain::foundation::UserId;

const LOCAL_USER: &str = "local";

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn read_input() -> Result<RawAssessmentInput, String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    serde_json::from_str(&buffer).map_err(|e| format!("invalid assessment JSON: {}", e))
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            return ExitCode::from(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("configuration error: {}", e);
        return ExitCode::from(1);
    }

    init_tracing(&config.logging);
    info!(environment = ?config.environment, "dottie starting");

    let input = match read_input() {
        Ok(input) => input,
        Err(message) => {
            error!(%message, "Could not read assessment");
            return ExitCode::from(1);
        }
    };

    let user_id = match UserId::new(LOCAL_USER) {
        Ok(id) => id,
        Err(e) => {
            error!(error = %e, "Invalid local user id");
            return ExitCode::from(1);
        }
    };

    let handler = CreateAssessmentHandler::new(Arc::new(InMemoryAssessmentRepository::new()));
    let result = match handler.handle(CreateAssessmentCommand::new(user_id, input)).await {
        Ok(result) => result,
        Err(AssessmentError::InvalidInput(err)) => {
            error!(field = err.field, "{}", err);
            return ExitCode::from(2);
        }
        Err(e) => {
            error!(code = ?e.code(), "{}", e);
            return ExitCode::from(1);
        }
    };

    match serde_json::to_string_pretty(result.assessment.result()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to serialize result");
            ExitCode::from(1)
        }
    }
}
