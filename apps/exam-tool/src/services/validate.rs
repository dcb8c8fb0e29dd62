//! Validation of every exam JSON file in a directory.

use crate::error::{Result, ToolError};
use crate::services::files;
use exam_core::{validate_document, ExamDocument, ValidationMode, ValidationReport};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationOptions {
    pub mode: ValidationMode,
}

impl ValidationOptions {
    pub fn new(collect_all: bool) -> Self {
        let mode = if collect_all {
            ValidationMode::CollectAll
        } else {
            ValidationMode::FirstFailure
        };
        Self { mode }
    }
}

/// A file that failed, with one message per reported problem.
#[derive(Debug)]
pub struct FileFailure {
    pub file: String,
    pub messages: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ValidationSummary {
    pub passed: usize,
    pub failed: Vec<FileFailure>,
}

impl ValidationSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Validate each exam file in `dir`. A failing file is logged and the
/// batch moves on to the next one.
pub fn validate_directory(dir: &Path, options: ValidationOptions) -> Result<ValidationSummary> {
    let mut summary = ValidationSummary::default();

    for path in files::exam_json_files(dir)? {
        let file = files::file_name(&path);
        tracing::info!("Testing {}...", file);

        let messages = match validate_file(&path, options) {
            Ok(report) if report.is_valid() => {
                tracing::info!("{} passed ({} questions)", file, report.checked);
                summary.passed += 1;
                continue;
            }
            Ok(report) => report.failures.iter().map(ToString::to_string).collect(),
            Err(e) => vec![e.to_string()],
        };

        for message in &messages {
            tracing::error!("Error in {}: {}", file, message);
        }
        summary.failed.push(FileFailure { file, messages });
    }

    Ok(summary)
}

/// Load and validate a single exam file.
pub fn validate_file(path: &Path, options: ValidationOptions) -> Result<ValidationReport> {
    let text = files::read_text(path)?;
    let document = ExamDocument::from_json_str(&text).map_err(|source| ToolError::Document {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(validate_document(&document, options.mode))
}
