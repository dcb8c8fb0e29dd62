//! Markdown parser for exam files.
//!
//! # Format
//! ```markdown
//! 1. Which services store objects? (Choose TWO)
//! - A. Amazon S3
//! - B. Amazon EC2
//! - C. Amazon Glacier
//! Correct Answer: A, C
//! Explanation:
//! - S3 and Glacier are object stores.
//! EC2 is compute.
//!
//! 2. Next question
//! ```
//!
//! Parsing is lenient: a block that ends up without options or without a
//! correct answer is dropped instead of reported.

use crate::types::{AnswerOption, Exam, Question};

/// Title used when the caller does not supply one.
pub const DEFAULT_TITLE: &str = "Untitled Exam";

const MULTIPLE_MARKER: &str = "(choose two)";

/// Parse markdown content into an exam.
pub fn parse(content: &str, title: Option<&str>) -> Exam {
    let mut parser = Parser::new();

    for line in content.split('\n') {
        parser.process_line(line.trim_end());
    }

    Exam {
        title: title.unwrap_or(DEFAULT_TITLE).to_string(),
        questions: parser.finish(),
    }
}

struct QuestionBuilder {
    id: u64,
    text: String,
    options: Vec<AnswerOption>,
    correct_answers: Vec<String>,
    explanation: Option<String>,
    multiple: bool,
}

impl QuestionBuilder {
    fn new(id: u64, prompt: &str) -> Self {
        let text = prompt.trim().to_string();
        let multiple = text.to_ascii_lowercase().contains(MULTIPLE_MARKER);
        Self {
            id,
            text,
            options: Vec::new(),
            correct_answers: Vec::new(),
            explanation: None,
            multiple,
        }
    }

    fn build(self) -> Option<Question> {
        if self.id == 0
            || self.text.is_empty()
            || self.options.is_empty()
            || self.correct_answers.is_empty()
        {
            return None;
        }

        Some(Question {
            id: self.id,
            text: self.text,
            options: self.options,
            correct_answers: self.correct_answers,
            explanation: self.explanation.unwrap_or_default(),
            multiple: self.multiple,
        })
    }
}

/// Whether explanation text is being collected.
#[derive(Debug, PartialEq)]
enum Mode {
    Scanning,
    Explaining(Vec<String>),
}

struct Parser {
    questions: Vec<Question>,
    current: Option<QuestionBuilder>,
    mode: Mode,
}

impl Parser {
    fn new() -> Self {
        Self {
            questions: Vec::new(),
            current: None,
            mode: Mode::Scanning,
        }
    }

    fn process_line(&mut self, line: &str) {
        match Self::parse_line(line) {
            LineType::Header { id, prompt } => self.handle_header(id, prompt),
            LineType::Choice { letter, text } if self.current.is_some() => {
                self.handle_option(letter, text)
            }
            LineType::CorrectAnswer(list) if self.current.is_some() => {
                self.handle_correct_answer(list)
            }
            LineType::ExplanationStart => {
                if self.mode == Mode::Scanning {
                    self.mode = Mode::Explaining(Vec::new());
                }
            }
            LineType::Empty => self.close_explanation(),
            _ => {
                if let Mode::Explaining(ref mut buffer) = self.mode {
                    buffer.push(strip_bullet(line).to_string());
                }
            }
        }
    }

    fn parse_line(line: &str) -> LineType<'_> {
        if let Some((id, prompt)) = parse_header(line) {
            LineType::Header { id, prompt }
        } else if let Some((letter, text)) = parse_option(line) {
            LineType::Choice { letter, text }
        } else if let Some(list) = parse_correct_answer(line) {
            LineType::CorrectAnswer(list)
        } else if strip_prefix_ignore_case(line.trim_start(), "explanation:").is_some() {
            LineType::ExplanationStart
        } else if line.is_empty() {
            LineType::Empty
        } else {
            LineType::Text
        }
    }

    /// A header closes any open explanation, flushes the previous question
    /// and opens a new one.
    fn handle_header(&mut self, id: u64, prompt: &str) {
        self.close_explanation();
        self.flush_question();
        self.current = Some(QuestionBuilder::new(id, prompt));
    }

    fn handle_option(&mut self, letter: char, text: &str) {
        if let Some(ref mut question) = self.current {
            question.options.push(AnswerOption::new(letter, text.trim()));
        }
    }

    fn handle_correct_answer(&mut self, list: &str) {
        if let Some(ref mut question) = self.current {
            question.correct_answers = parse_letters(list);
        }
    }

    fn close_explanation(&mut self) {
        if let Mode::Explaining(lines) = std::mem::replace(&mut self.mode, Mode::Scanning) {
            if let Some(ref mut question) = self.current {
                question.explanation = Some(lines.join(" ").trim().to_string());
            }
        }
    }

    fn flush_question(&mut self) {
        if let Some(question) = self.current.take().and_then(QuestionBuilder::build) {
            self.questions.push(question);
        }
        self.mode = Mode::Scanning;
    }

    fn finish(mut self) -> Vec<Question> {
        self.close_explanation();
        self.flush_question();
        self.questions
    }
}

enum LineType<'a> {
    Header { id: u64, prompt: &'a str },
    Choice { letter: char, text: &'a str },
    CorrectAnswer(&'a str),
    ExplanationStart,
    Empty,
    Text,
}

/// `<digits>.<whitespace><prompt>`
fn parse_header(line: &str) -> Option<(u64, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let rest = line[digits..].strip_prefix('.')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    // Ids that overflow are treated like a missing id and dropped on flush.
    let id = line[..digits].parse::<u64>().unwrap_or(0);
    Some((id, rest.trim()))
}

/// `- <letter>. <text>`, letter case-folded to uppercase.
fn parse_option(line: &str) -> Option<(char, &str)> {
    let rest = line.trim_start().strip_prefix('-')?.trim_start();

    let mut chars = rest.chars();
    let letter = chars.next().filter(char::is_ascii_alphabetic)?;
    let text = chars.as_str().strip_prefix('.')?;
    if !text.starts_with(char::is_whitespace) {
        return None;
    }

    Some((letter.to_ascii_uppercase(), text.trim()))
}

/// `Correct Answer: <list>` with a case-insensitive label.
fn parse_correct_answer(line: &str) -> Option<&str> {
    let rest = strip_prefix_ignore_case(line.trim_start(), "correct")?;
    let rest = strip_prefix_ignore_case(rest.trim_start(), "answer:")?;
    Some(rest.trim_start())
}

/// Comma-separated letters, each piece trimmed and uppercased. Malformed
/// pieces are kept so the validator can report them.
fn parse_letters(list: &str) -> Vec<String> {
    list.split(',')
        .map(|piece| piece.trim().to_uppercase())
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim_start();
    trimmed.strip_prefix('-').unwrap_or(trimmed).trim()
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_single_question() {
        let input = "1. What is S3? (Choose TWO)\n- A. Storage\n- B. Compute\nCorrect Answer: a, B\nExplanation:\n- It stores objects.\n";
        let exam = parse(input, None);

        assert_eq!(exam.title, DEFAULT_TITLE);
        assert_eq!(
            exam.questions,
            vec![Question {
                id: 1,
                text: "What is S3? (Choose TWO)".to_string(),
                options: vec![
                    AnswerOption::new('A', "Storage"),
                    AnswerOption::new('B', "Compute"),
                ],
                correct_answers: vec!["A".to_string(), "B".to_string()],
                explanation: "It stores objects.".to_string(),
                multiple: true,
            }]
        );
    }

    #[test]
    fn drop_block_without_options_or_answer() {
        let exam = parse("1. Lonely question\n\nSome stray text\n", Some("Empty"));
        assert_eq!(exam.title, "Empty");
        assert!(exam.questions.is_empty());
    }

    #[test]
    fn drop_block_without_correct_answer() {
        let input = "1. Has options\n- A. one\n- B. two\n\n2. Complete\n- A. x\nCorrect Answer: A\n";
        let exam = parse(input, None);
        assert_eq!(exam.questions.len(), 1);
        assert_eq!(exam.questions[0].id, 2);
    }

    #[test]
    fn header_ends_explanation_and_opens_next_question() {
        let input = "1. First\n- A. a\nCorrect Answer: A\nExplanation:\nBecause of reasons.\n2. Second\n- B. b\nCorrect Answer: B\nExplanation:\nAlso reasons.";
        let exam = parse(input, None);

        assert_eq!(exam.questions.len(), 2);
        assert_eq!(exam.questions[0].id, 1);
        assert_eq!(exam.questions[0].explanation, "Because of reasons.");
        assert_eq!(exam.questions[1].id, 2);
        assert_eq!(exam.questions[1].explanation, "Also reasons.");
    }

    #[test]
    fn multiline_explanation_joined_with_spaces() {
        let input = "3. Q\n- A. a\nCorrect Answer: A\nExplanation:\n- First line.\n  second line  \n-third line\n";
        let exam = parse(input, None);
        assert_eq!(
            exam.questions[0].explanation,
            "First line. second line third line"
        );
    }

    #[test]
    fn blank_line_ends_explanation() {
        let input = "1. Q\n- A. a\nCorrect Answer: A\nExplanation:\nKept.\n\nIgnored stray text.\n";
        let exam = parse(input, None);
        assert_eq!(exam.questions[0].explanation, "Kept.");
    }

    #[test]
    fn whitespace_only_line_counts_as_blank() {
        let input = "1. Q\n- A. a\nCorrect Answer: A\nExplanation:\nKept.\n   \nIgnored.\n";
        let exam = parse(input, None);
        assert_eq!(exam.questions[0].explanation, "Kept.");
    }

    #[test]
    fn missing_explanation_is_empty_string() {
        let exam = parse("1. Q\n- A. a\nCorrect Answer: A", None);
        assert_eq!(exam.questions[0].explanation, "");
    }

    #[test]
    fn letters_uppercased_and_need_not_be_sequential() {
        let input = "9. Q\n- b. second\n  - d. fourth\nCorrect Answer: d\n";
        let exam = parse(input, None);
        let question = &exam.questions[0];

        assert_eq!(question.id, 9);
        assert_eq!(
            question.options,
            vec![AnswerOption::new('B', "second"), AnswerOption::new('D', "fourth")]
        );
        assert_eq!(question.correct_answers, vec!["D"]);
    }

    #[test]
    fn second_correct_answer_line_replaces_first() {
        let input = "1. Q\n- A. a\n- B. b\nCorrect Answer: A\ncorrect answer: b, a\n";
        let exam = parse(input, None);
        assert_eq!(exam.questions[0].correct_answers, vec!["B", "A"]);
    }

    #[test]
    fn answer_pieces_kept_verbatim() {
        let input = "1. Q\n- A. a\n- B. b\nCorrect Answer: A, bc\n\n2. R\n- A. a\nCorrect Answer: AB\n";
        let exam = parse(input, None);
        assert_eq!(exam.questions.len(), 2);
        assert_eq!(exam.questions[0].correct_answers, vec!["A", "BC"]);
        assert_eq!(exam.questions[1].correct_answers, vec!["AB"]);
    }

    #[test]
    fn empty_answer_list_yields_blank_piece() {
        let input = "1. Q\n- A. a\nCorrect Answer:\n\n2. R\n- A. a\nCorrect Answer: A, ,\n";
        let exam = parse(input, None);
        assert_eq!(exam.questions.len(), 2);
        assert_eq!(exam.questions[0].correct_answers, vec![""]);
        assert_eq!(exam.questions[1].correct_answers, vec!["A", "", ""]);
    }

    #[test]
    fn duplicate_letters_kept() {
        let input = "1. Q\n- A. first\n- A. again\nCorrect Answer: A\n";
        let exam = parse(input, None);
        assert_eq!(exam.questions[0].options.len(), 2);
    }

    #[test]
    fn multiple_flag_is_case_insensitive() {
        let input = "1. Pick (choose two)\n- A. a\n- B. b\nCorrect Answer: A,B\n\n2. Pick one\n- A. a\nCorrect Answer: A\n";
        let exam = parse(input, None);
        assert!(exam.questions[0].multiple);
        assert!(!exam.questions[1].multiple);
    }

    #[test]
    fn multiple_flag_only_checks_header_prompt() {
        let input = "1. Pick one\n(Choose TWO)\n- A. a\nCorrect Answer: A\n";
        let exam = parse(input, None);
        assert!(!exam.questions[0].multiple);
    }

    #[test]
    fn zero_id_is_dropped() {
        let exam = parse("0. Q\n- A. a\nCorrect Answer: A\n", None);
        assert!(exam.questions.is_empty());
    }

    #[test]
    fn header_needs_whitespace_after_period() {
        let exam = parse("1.Q\n- A. a\nCorrect Answer: A\n", None);
        assert!(exam.questions.is_empty());
    }

    #[test]
    fn options_before_any_question_are_ignored() {
        let input = "- A. orphan\nCorrect Answer: A\n1. Q\n- B. b\nCorrect Answer: B\n";
        let exam = parse(input, None);
        assert_eq!(exam.questions.len(), 1);
        assert_eq!(exam.questions[0].options, vec![AnswerOption::new('B', "b")]);
    }

    #[test]
    fn crlf_line_endings() {
        let input = "1. Q\r\n- A. a\r\nCorrect Answer: A\r\nExplanation:\r\n- Windows text.\r\n\r\n";
        let exam = parse(input, None);
        assert_eq!(exam.questions[0].text, "Q");
        assert_eq!(exam.questions[0].explanation, "Windows text.");
    }

    #[test]
    fn option_shaped_line_inside_explanation_is_an_option() {
        let input = "1. Q\n- A. a\nCorrect Answer: A\nExplanation:\nIntro.\n- B. late option\nOutro.\n";
        let exam = parse(input, None);
        let question = &exam.questions[0];
        assert_eq!(question.options.len(), 2);
        assert_eq!(question.explanation, "Intro. Outro.");
    }

    #[test]
    fn ids_preserved_in_source_order() {
        let input = "10. a\n- A. x\nCorrect Answer: A\n\n3. b\n- A. x\nCorrect Answer: A\n\n7. c\n- A. x\nCorrect Answer: A\n";
        let ids: Vec<u64> = parse(input, None).questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![10, 3, 7]);
    }

    #[test]
    fn mode_transitions() {
        let mut parser = Parser::new();
        parser.process_line("1. Q");
        parser.process_line("- A. a");
        parser.process_line("Correct Answer: A");
        assert_eq!(parser.mode, Mode::Scanning);

        parser.process_line("  EXPLANATION: trailing label text");
        assert_eq!(parser.mode, Mode::Explaining(Vec::new()));

        parser.process_line("- reason");
        assert_eq!(parser.mode, Mode::Explaining(vec!["reason".to_string()]));

        parser.process_line("");
        assert_eq!(parser.mode, Mode::Scanning);

        let questions = parser.finish();
        assert_eq!(questions[0].explanation, "reason");
    }

    #[test]
    fn line_classification() {
        assert!(matches!(
            Parser::parse_line("12. Prompt"),
            LineType::Header { id: 12, prompt: "Prompt" }
        ));
        assert!(matches!(
            Parser::parse_line("  -  c.  text"),
            LineType::Choice { letter: 'C', text: "text" }
        ));
        assert!(matches!(
            Parser::parse_line("CorrectAnswer: A"),
            LineType::CorrectAnswer("A")
        ));
        assert!(matches!(Parser::parse_line("- AB. no"), LineType::Text));
        assert!(matches!(Parser::parse_line(""), LineType::Empty));
    }
}
