//! File helpers shared by the batch operations.

use crate::error::{Result, ToolError};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest listing the exam JSON files available to the UI.
pub const MANIFEST_FILE: &str = "exams.json";

/// JSON files that live next to the exams but are not exam documents.
pub const AUXILIARY_FILES: [&str; 2] = ["explanations.json", MANIFEST_FILE];

/// List files in `dir` with the given extension, sorted by file name.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| ToolError::ListDirectory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ToolError::read(dir, e))?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == extension) {
            files.push(path);
        }
    }

    files.sort_by_key(|path| file_name(path));
    Ok(files)
}

/// Exam JSON files in `dir`, skipping auxiliary files.
pub fn exam_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let files = list_files(dir, "json")?;
    Ok(files
        .into_iter()
        .filter(|path| !AUXILIARY_FILES.contains(&file_name(path).as_str()))
        .collect())
}

/// Read a UTF-8 file, dropping a leading byte-order mark.
pub fn read_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| ToolError::read(path, e))?;
    Ok(match content.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// Write `value` as pretty-printed JSON (two-space indent).
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| ToolError::json(path, e))?;
    fs::write(path, json).map_err(|e| ToolError::write(path, e))
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
