pub mod config;
pub mod error;
pub mod services;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Cli, Command};
use crate::services::validate::ValidationOptions;

pub fn run() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            exams_dir,
            output_dir,
        } => {
            tracing::info!("Converting exams from {}", exams_dir.display());
            let summary = services::convert::convert_directory(&exams_dir, &output_dir)?;
            tracing::info!(
                "Converted {} files ({} questions)",
                summary.files,
                summary.questions
            );
        }
        Command::Validate {
            parsed_dir,
            collect_all,
        } => {
            let options = ValidationOptions::new(collect_all);
            let summary = services::validate::validate_directory(&parsed_dir, options)?;
            tracing::info!(
                "Validated {} files: {} passed, {} failed",
                summary.total(),
                summary.passed,
                summary.failed.len()
            );
            if summary.has_errors() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Manifest { parsed_dir } => {
            let files = services::manifest::write_manifest(&parsed_dir)?;
            tracing::info!("Manifest lists {} exams", files.len());
        }
        Command::MergeExplanations {
            exam,
            explanations,
            output,
        } => {
            let output = output.unwrap_or_else(|| services::explanations::default_output(&exam));
            let updated = services::explanations::merge_files(&exam, &explanations, &output)?;
            tracing::info!("Wrote {} ({} explanations merged)", output.display(), updated);
        }
    }

    Ok(ExitCode::SUCCESS)
}
