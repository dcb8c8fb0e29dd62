//! Error types for exam-core.

use thiserror::Error;

/// Result type alias using ValidationError.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised while loading or validating an exam document.
///
/// Per-question variants carry a `question` label: the record's `id` when it
/// has a truthy one, otherwise its 1-based position in the `questions` array.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("exam document must be a JSON object")]
    NotAnObject,

    #[error("questions field should be an array")]
    MissingQuestions,

    #[error("Question ID {question}: Missing fields: {}", .fields.join(", "))]
    MissingFields {
        question: String,
        fields: Vec<&'static str>,
    },

    #[error("Question {question}: Missing basic fields")]
    EmptyQuestionText { question: String },

    #[error("Question {question}: Explanation missing or too short")]
    ExplanationTooShort { question: String },

    #[error("Question {question} does not have correct answer")]
    NoCorrectAnswers { question: String },

    #[error("Question {question}: The correct answer '{letter}' does not exist in the options")]
    DanglingAnswer { question: String, letter: String },
}
