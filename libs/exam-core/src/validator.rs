//! Structural validation of decoded exam documents.
//!
//! Documents are normalized once when loaded: every question keeps its raw
//! object plus a sanitized copy whose keys have non-word characters removed,
//! so stray punctuation in upstream keys (`"explanation:"`) still resolves.
//! The presence check runs against the raw object, every later check against
//! the sanitized one.

use crate::error::{Result, ValidationError};
use serde_json::{Map, Value};

const REQUIRED_FIELDS: [&str; 3] = ["question", "options", "correctAnswers"];

/// Minimum number of characters in a trimmed explanation.
pub const MIN_EXPLANATION_CHARS: usize = 5;

/// How much of a document to check once a question fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Stop at the first failing question.
    #[default]
    FirstFailure,
    /// Check every question and report each one that fails.
    CollectAll,
}

/// One entry of the `questions` array.
#[derive(Debug, Clone)]
pub struct QuestionRecord {
    position: usize,
    raw: Map<String, Value>,
    sanitized: Map<String, Value>,
}

impl QuestionRecord {
    /// Build a record for the entry at `position` (1-based). Entries that are
    /// not objects are kept as empty records and fail the presence check.
    pub fn new(position: usize, value: &Value) -> Self {
        let raw = value.as_object().cloned().unwrap_or_default();
        let sanitized = sanitize_keys(&raw);
        Self {
            position,
            raw,
            sanitized,
        }
    }

    /// Label used in error messages: the sanitized `id` when truthy,
    /// otherwise the 1-based position.
    pub fn label(&self) -> String {
        match self.sanitized.get("id") {
            Some(id) if is_truthy(Some(id)) => display_value(id),
            _ => self.position.to_string(),
        }
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn sanitized(&self) -> &Map<String, Value> {
        &self.sanitized
    }

    /// Run every rule in order and return the first violation.
    pub fn check(&self) -> Result<()> {
        let question = self.label();

        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !is_truthy(self.raw.get(*field)))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields {
                question,
                fields: missing,
            });
        }

        if !is_truthy(self.sanitized.get("question")) {
            return Err(ValidationError::EmptyQuestionText { question });
        }

        let explanation_ok = self
            .sanitized
            .get("explanation")
            .and_then(Value::as_str)
            .map_or(false, |text| {
                text.trim().chars().count() >= MIN_EXPLANATION_CHARS
            });
        if !explanation_ok {
            return Err(ValidationError::ExplanationTooShort { question });
        }

        let answers = match self.sanitized.get("correctAnswers").and_then(Value::as_array) {
            Some(answers) if !answers.is_empty() => answers,
            _ => return Err(ValidationError::NoCorrectAnswers { question }),
        };

        let options = self
            .sanitized
            .get("options")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for answer in answers {
            if !options.iter().any(|option| option.get("letter") == Some(answer)) {
                return Err(ValidationError::DanglingAnswer {
                    question,
                    letter: display_value(answer),
                });
            }
        }

        Ok(())
    }
}

/// A decoded exam document ready for validation.
#[derive(Debug, Clone)]
pub struct ExamDocument {
    pub title: Option<String>,
    pub questions: Vec<QuestionRecord>,
}

impl ExamDocument {
    /// Decode JSON text, tolerating a leading byte-order mark and
    /// surrounding whitespace.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let text = text.trim().trim_start_matches('\u{feff}').trim();
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject)?;
        let questions = object
            .get("questions")
            .and_then(Value::as_array)
            .ok_or(ValidationError::MissingQuestions)?;

        Ok(Self {
            title: object
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_string),
            questions: questions
                .iter()
                .enumerate()
                .map(|(idx, q)| QuestionRecord::new(idx + 1, q))
                .collect(),
        })
    }
}

/// Outcome of validating one document.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Number of questions whose checks ran.
    pub checked: usize,
    pub failures: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Convert to a result carrying the first failure, if any.
    pub fn into_result(self) -> Result<()> {
        match self.failures.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Validate every question of a document.
pub fn validate_document(document: &ExamDocument, mode: ValidationMode) -> ValidationReport {
    let mut report = ValidationReport::default();

    for record in &document.questions {
        report.checked += 1;
        if let Err(error) = record.check() {
            report.failures.push(error);
            if mode == ValidationMode::FirstFailure {
                break;
            }
        }
    }

    report
}

/// Validate a document, returning the first violated rule.
pub fn validate(document: &ExamDocument) -> Result<()> {
    validate_document(document, ValidationMode::FirstFailure).into_result()
}

/// Keys that collide after cleaning resolve to the one appearing last.
fn sanitize_keys(object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .map(|(key, value)| {
            let clean: String = key
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect();
            (clean, value.clone())
        })
        .collect()
}

/// JSON truthiness: null, false, 0 and "" are falsy; arrays and objects
/// are truthy even when empty.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
