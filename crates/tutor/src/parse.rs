//! Lesson output parsing.
//!
//! Splits the model's free-form text into (step, checkpoint, recap) using
//! marker-keyword heuristics. Total: never fails, always returns three
//! non-empty trimmed strings, substituting fixed defaults when a marker is
//! missing or the step would be empty.
//!
//! Segment rule, including the out-of-order case: the step is every line
//! before whichever marker occurs first, and each marker's segment runs
//! from its own line to the nearest *following* marker line (exclusive) or
//! the end of text. So for recap-before-checkpoint input, recap stops at
//! the checkpoint line and checkpoint runs to the end — neither segment
//! swallows the other.

const CHECKPOINT_MARKER: &str = "checkpoint:";
const RECAP_MARKER: &str = "recap:";

pub const DEFAULT_STEP: &str = "Let's continue learning...";
pub const DEFAULT_CHECKPOINT: &str = "Checkpoint: What is one key idea here?";
pub const DEFAULT_RECAP: &str = "Recap: Quick recap: key idea in one line.";

/// One teaching step split into its three labeled segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLesson {
    /// The explanation; internal line breaks preserved.
    pub step: String,
    /// The checkpoint question, marker included, joined to one line.
    pub checkpoint: String,
    /// The recap, marker included, joined to one line.
    pub recap: String,
}

/// Case-insensitive prefix check that tolerates multi-byte text.
fn starts_with_marker(line: &str, marker: &str) -> bool {
    line.get(..marker.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(marker))
}

/// A marker's segment: from its line up to the nearest following marker
/// line, or the end of text. Lines are joined with single spaces.
fn segment(lines: &[&str], start: usize, other: Option<usize>) -> String {
    let end = match other {
        Some(o) if o > start => o,
        _ => lines.len(),
    };
    lines[start..end].join(" ").trim().to_string()
}

/// Split raw lesson text into (step, checkpoint, recap).
pub fn parse_lesson(raw: &str) -> ParsedLesson {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    // Two-pass scan: first occurrence of each marker, independently.
    let checkpoint_idx = lines
        .iter()
        .position(|l| starts_with_marker(l, CHECKPOINT_MARKER));
    let recap_idx = lines.iter().position(|l| starts_with_marker(l, RECAP_MARKER));

    let first_marker = match (checkpoint_idx, recap_idx) {
        (Some(c), Some(r)) => c.min(r),
        (Some(c), None) => c,
        (None, Some(r)) => r,
        (None, None) => lines.len(),
    };

    let step = lines[..first_marker].join("\n").trim().to_string();
    let step = if step.is_empty() {
        DEFAULT_STEP.to_string()
    } else {
        step
    };

    let checkpoint = checkpoint_idx
        .map(|i| segment(&lines, i, recap_idx))
        .unwrap_or_else(|| DEFAULT_CHECKPOINT.to_string());

    let recap = recap_idx
        .map(|i| segment(&lines, i, checkpoint_idx))
        .unwrap_or_else(|| DEFAULT_RECAP.to_string());

    ParsedLesson {
        step,
        checkpoint,
        recap,
    }
}
