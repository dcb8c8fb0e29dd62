//! Core exam library shared by the conversion and validation tooling.
//!
//! Provides:
//! - Markdown parser for exam files (numbered questions, lettered options)
//! - Structural validator for decoded exam JSON documents
//! - Shared types (Exam, Question, AnswerOption)

pub mod error;
pub mod parser;
pub mod types;
pub mod validator;

pub use error::{Result, ValidationError};
pub use parser::{parse, DEFAULT_TITLE};
pub use types::{AnswerOption, Exam, Question};
pub use validator::{
    validate, validate_document, ExamDocument, QuestionRecord, ValidationMode, ValidationReport,
};
