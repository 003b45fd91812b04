//! Practice question formatting.
//!
//! Splits raw generated text into a list of tagged practice items. Total:
//! never fails and never returns an empty list.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRACTICE_QUESTION: &str =
    "Describe one key idea from the lesson in your own words.";

/// Rough classification of a practice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeKind {
    Concept,
    Applied,
    Code,
}

/// One practice question with its kind tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeItem {
    pub question: String,
    pub kind: PracticeKind,

    /// Reserved for graded practice; the model is not asked for answers yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Strip a leading numbering prefix like "1) ", "2. ", or "10 ".
///
/// Same rule as a character-set lstrip: removes any leading run of digits,
/// ')', '.', and spaces.
fn strip_numbering(line: &str) -> &str {
    line.trim_start_matches(|c: char| c.is_ascii_digit() || c == ')' || c == '.' || c == ' ')
}

/// Keyword classification of a question line.
fn classify(question: &str) -> PracticeKind {
    let lower = question.to_lowercase();
    if lower.contains("code") {
        PracticeKind::Code
    } else if lower.contains("apply") || lower.contains("scenario") {
        PracticeKind::Applied
    } else {
        PracticeKind::Concept
    }
}

/// Split raw generated text into tagged practice items.
pub fn format_practice(raw: &str) -> Vec<PracticeItem> {
    let mut items: Vec<PracticeItem> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(strip_numbering)
        .filter(|q| !q.is_empty())
        .map(|question| PracticeItem {
            question: question.to_string(),
            kind: classify(question),
            answer: None,
        })
        .collect();

    if items.is_empty() {
        items.push(PracticeItem {
            question: DEFAULT_PRACTICE_QUESTION.to_string(),
            kind: PracticeKind::Concept,
            answer: None,
        });
    }

    items
}
