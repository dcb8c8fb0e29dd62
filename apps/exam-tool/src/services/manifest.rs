//! The `exams.json` manifest consumed by the quiz UI.

use crate::error::Result;
use crate::services::files::{self, MANIFEST_FILE};
use std::path::Path;

/// File names of every exam document in `dir`.
pub fn exam_names(dir: &Path) -> Result<Vec<String>> {
    Ok(files::exam_json_files(dir)?
        .iter()
        .map(|path| files::file_name(path))
        .collect())
}

/// Rewrite `<dir>/exams.json` and return the names it lists.
pub fn write_manifest(dir: &Path) -> Result<Vec<String>> {
    let names = exam_names(dir)?;
    files::write_json(&dir.join(MANIFEST_FILE), &names)?;
    tracing::debug!("Wrote manifest with {} entries", names.len());
    Ok(names)
}
