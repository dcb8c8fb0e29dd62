//! Core types for exam documents.

use serde::{Deserialize, Serialize};

/// One lettered choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub letter: char,
    pub text: String,
}

impl AnswerOption {
    pub fn new(letter: char, text: impl Into<String>) -> Self {
        Self {
            letter,
            text: text.into(),
        }
    }
}

/// Question parsed from markdown.
///
/// The prompt is stored as `text` but serialized under the `question` key,
/// which is what downstream consumers read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u64,
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<AnswerOption>,
    /// Uppercased answer letters as written; checked against `options` downstream.
    pub correct_answers: Vec<String>,
    #[serde(default)]
    pub explanation: String,
    /// Set when the prompt asks for more than one answer ("(Choose TWO)").
    #[serde(default)]
    pub multiple: bool,
}

/// A titled, ordered collection of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub title: String,
    pub questions: Vec<Question>,
}

impl Exam {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
