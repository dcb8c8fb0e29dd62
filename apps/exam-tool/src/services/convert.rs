//! Markdown to JSON conversion.

use crate::error::{Result, ToolError};
use crate::services::{files, manifest};
use exam_core::{parser, Exam};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct ConvertSummary {
    pub files: usize,
    pub questions: usize,
    /// Sources that produced no questions at all.
    pub empty: Vec<String>,
}

/// Convert every `.md` file in `exams_dir` and refresh the manifest.
pub fn convert_directory(exams_dir: &Path, output_dir: &Path) -> Result<ConvertSummary> {
    fs::create_dir_all(output_dir).map_err(|e| ToolError::write(output_dir, e))?;

    let mut summary = ConvertSummary::default();
    for source in files::list_files(exams_dir, "md")? {
        let (target, exam) = convert_file(&source, output_dir)?;
        tracing::info!(
            "Converted {} -> {} ({} questions)",
            files::file_name(&source),
            target.display(),
            exam.len()
        );

        if exam.is_empty() {
            tracing::warn!("{} produced no questions", files::file_name(&source));
            summary.empty.push(files::file_name(&source));
        }
        summary.files += 1;
        summary.questions += exam.len();
    }

    manifest::write_manifest(output_dir)?;
    Ok(summary)
}

/// Convert one source file; the exam title is the file stem.
pub fn convert_file(source: &Path, output_dir: &Path) -> Result<(PathBuf, Exam)> {
    let content = files::read_text(source)?;
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| parser::DEFAULT_TITLE.to_string());

    let exam = parser::parse(&content, Some(&stem));
    let target = output_dir.join(format!("{}.json", stem));
    files::write_json(&target, &exam)?;

    Ok((target, exam))
}
