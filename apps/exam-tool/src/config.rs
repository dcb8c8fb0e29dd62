//! Command line configuration.
//!
//! Directory arguments fall back to environment variables, which may also be
//! supplied through a `.env` file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_EXAMS_DIR: &str = "public/exams";
pub const DEFAULT_PARSED_DIR: &str = "public/parsed-exams";

#[derive(Parser, Debug)]
#[command(version, about = "Convert markdown exams to JSON and validate the results")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse every markdown exam and write one JSON file per exam.
    Convert {
        /// Directory holding the `.md` sources.
        #[arg(long, env = "EXAMS_DIR", default_value = DEFAULT_EXAMS_DIR)]
        exams_dir: PathBuf,

        /// Directory receiving the JSON output and the manifest.
        #[arg(long, env = "PARSED_EXAMS_DIR", default_value = DEFAULT_PARSED_DIR)]
        output_dir: PathBuf,
    },

    /// Check every exam JSON file; exits non-zero if any file fails.
    Validate {
        #[arg(long, env = "PARSED_EXAMS_DIR", default_value = DEFAULT_PARSED_DIR)]
        parsed_dir: PathBuf,

        /// Report every failing question instead of stopping at the first.
        #[arg(long)]
        collect_all: bool,
    },

    /// Rewrite the `exams.json` manifest.
    Manifest {
        #[arg(long, env = "PARSED_EXAMS_DIR", default_value = DEFAULT_PARSED_DIR)]
        parsed_dir: PathBuf,
    },

    /// Copy explanations from a `[{id, explanation}]` file into an exam.
    MergeExplanations {
        #[arg(long)]
        exam: PathBuf,

        #[arg(long)]
        explanations: PathBuf,

        /// Defaults to `<exam>_with_explanations.json` next to the exam.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
