//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

/// Generate markdown with `num_questions` well-formed questions.
///
/// # Arguments
/// * `num_questions` - Number of question blocks to generate
/// * `first_id` - Id of the first question; ids increase by one
pub fn sample_md_content(num_questions: usize, first_id: u64) -> String {
    (0..num_questions)
        .map(|i| {
            let id = first_id + i as u64;
            format!(
                "{id}. Question {id}?\n- A. Right {id}\n- B. Wrong {id}\nCorrect Answer: A\nExplanation:\n- Option A is right for question {id}.\n"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Exam JSON document with valid questions.
pub fn valid_exam(title: &str, ids: &[u64]) -> Value {
    json!({
        "title": title,
        "questions": ids.iter().map(|&id| valid_question(id)).collect::<Vec<_>>(),
    })
}

pub fn valid_question(id: u64) -> Value {
    json!({
        "id": id,
        "question": format!("Question {}?", id),
        "options": [
            { "letter": "A", "text": "Right" },
            { "letter": "B", "text": "Wrong" }
        ],
        "correctAnswers": ["A"],
        "explanation": "Option A is right.",
        "multiple": false
    })
}
