//! Deterministic offline fallback texts.
//!
//! Substituted when no provider is configured or the generation call fails,
//! so the API keeps its shape during local development and outages. The
//! lesson text carries well-formed markers and the practice text mixes all
//! three question kinds, so the downstream shaping still produces fully
//! structured output.

use mentora_core::provider::Purpose;

const LESSON_TEXT: &str = "\
Let's learn this concept step by step.

Start with the basics - understanding the foundation is key.

Checkpoint: What is one thing you understand so far?

Recap: Building knowledge one step at a time.";

const PRACTICE_TEXT: &str = "\
1) What is the main concept you learned?
2) How would you apply this concept in a real scenario?
3) Try writing a simple code example.
4) How would you explain this to a friend?
5) What questions do you still have?";

/// The fallback text for a given generation purpose.
pub fn text(purpose: Purpose) -> &'static str {
    match purpose {
        Purpose::Lesson => LESSON_TEXT,
        Purpose::Practice => PRACTICE_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_lesson;
    use crate::practice::{PracticeKind, format_practice};

    #[test]
    fn lesson_fallback_parses_fully_structured() {
        let parsed = parse_lesson(text(Purpose::Lesson));
        assert!(parsed.step.contains("step by step"));
        assert!(parsed.checkpoint.starts_with("Checkpoint:"));
        assert!(parsed.recap.starts_with("Recap:"));
        assert_ne!(parsed.step, crate::parse::DEFAULT_STEP);
        assert_ne!(parsed.checkpoint, crate::parse::DEFAULT_CHECKPOINT);
        assert_ne!(parsed.recap, crate::parse::DEFAULT_RECAP);
    }

    #[test]
    fn practice_fallback_mixes_all_kinds() {
        let items = format_practice(text(Purpose::Practice));
        assert_eq!(items.len(), 5);
        let kinds: Vec<_> = items.iter().map(|i| i.kind).collect();
        assert!(kinds.contains(&PracticeKind::Concept));
        assert!(kinds.contains(&PracticeKind::Applied));
        assert!(kinds.contains(&PracticeKind::Code));
    }
}
