//! Merge separately authored explanations into an exam file.
//!
//! The explanations file is a JSON array of `{ "id": n, "explanation": "..." }`.
//! Exams are handled as raw JSON so fields this tool does not know about
//! survive the merge.

use crate::error::{Result, ToolError};
use crate::services::files;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct ExplanationEntry {
    pub id: u64,
    pub explanation: String,
}

/// `exam19.json` -> `exam19_with_explanations.json`
pub fn default_output(exam: &Path) -> PathBuf {
    let stem = exam
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    exam.with_file_name(format!("{}_with_explanations.json", stem))
}

/// Replace the explanation of every question whose id has an entry.
/// Returns the number of questions updated.
pub fn merge(exam: &mut Value, entries: &[ExplanationEntry]) -> usize {
    let lookup: HashMap<u64, &str> = entries
        .iter()
        .map(|e| (e.id, e.explanation.as_str()))
        .collect();

    let Some(questions) = exam.get_mut("questions").and_then(Value::as_array_mut) else {
        return 0;
    };

    let mut updated = 0;
    for question in questions {
        let Some(id) = question.get("id").and_then(Value::as_u64) else {
            continue;
        };
        if let (Some(text), Some(object)) = (lookup.get(&id), question.as_object_mut()) {
            object.insert("explanation".to_string(), Value::String(text.to_string()));
            updated += 1;
        }
    }
    updated
}

pub fn merge_files(exam_path: &Path, explanations_path: &Path, output: &Path) -> Result<usize> {
    let mut exam: Value = serde_json::from_str(&files::read_text(exam_path)?)
        .map_err(|e| ToolError::json(exam_path, e))?;
    let entries: Vec<ExplanationEntry> =
        serde_json::from_str(&files::read_text(explanations_path)?)
            .map_err(|e| ToolError::json(explanations_path, e))?;

    let updated = merge(&mut exam, &entries);
    if updated < entries.len() {
        tracing::warn!(
            "{} explanations did not match any question",
            entries.len() - updated
        );
    }

    files::write_json(output, &exam)?;
    Ok(updated)
}
