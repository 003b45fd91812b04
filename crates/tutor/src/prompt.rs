//! Prompt assembly.
//!
//! Pure functions that build the ordered turn list sent to the provider:
//! system instructions + prior transcript + the new user turn + a final
//! instruction turn fixing the expected output shape.

use crate::types::{LessonStepRequest, PracticeRequest};
use mentora_core::session::Turn;

/// The teaching persona and approach, sent as the system turn.
pub const SYSTEM_PROMPT: &str = "\
You are an AI Teaching Assistant focused on making complex concepts easy to understand.

Teaching Approach:
1. Start with a simple, real-world example that illustrates the concept
2. Explain the core idea in plain language
3. Break down the concept into small, digestible steps
4. Use analogies related to everyday life
5. Provide a clear, practical example
6. End with a simple question to check understanding

Rules:
- Use simple, conversational language
- Keep explanations brief and to the point
- Avoid technical jargon
- Focus on understanding, not memorization
- Adapt to the student's level (beginner/intermediate)
- If the student is confused, try a different example";

const LESSON_INSTRUCTION: &str = "\
Provide exactly one teaching step with a clear, step-by-step explanation and a \
real-world example. End with exactly one line starting with 'Checkpoint:' \
containing a question to check understanding, followed by exactly one line \
starting with 'Recap:' summarizing the step.";

/// The new user turn for a lesson request.
///
/// Fixed field order: subject, topic, level, then (when present) known
/// misconceptions, the learner's previous answer, and the confusion
/// re-explain instruction.
pub fn lesson_note(req: &LessonStepRequest) -> String {
    let mut note = format!(
        "Subject: {}. Topic: {}. Level: {}.",
        req.subject, req.topic, req.level
    );

    if let Some(misconceptions) = &req.misconceptions
        && !misconceptions.is_empty()
    {
        note.push_str(&format!(
            " Known misconceptions: {}.",
            misconceptions.join(", ")
        ));
    }

    if let Some(last_answer) = &req.last_answer {
        note.push_str(&format!(" Learner previous answer: {last_answer}."));
    }

    if req.confusion {
        note.push_str(" Learner is confused; re-explain with a different analogy.");
    }

    note
}

/// Build the turns for a lesson-step generation.
pub fn lesson_turns(req: &LessonStepRequest, history: &[Turn]) -> Vec<Turn> {
    let mut turns = Vec::with_capacity(history.len() + 3);
    turns.push(Turn::system(SYSTEM_PROMPT));
    turns.extend_from_slice(history);
    turns.push(Turn::user(lesson_note(req)));
    turns.push(Turn::user(LESSON_INSTRUCTION));
    turns
}

/// Build the turns for a practice-set generation.
pub fn practice_turns(req: &PracticeRequest) -> Vec<Turn> {
    let prompt = format!(
        "Create 5 practice questions for subject {}, topic {}, level {}. \
         Mix conceptual, applied, and one small code or worked example. \
         Return numbered items.",
        req.subject, req.topic, req.level
    );
    vec![Turn::system(SYSTEM_PROMPT), Turn::user(prompt)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentora_core::session::Role;

    fn lesson_request() -> LessonStepRequest {
        LessonStepRequest {
            subject: "Java".into(),
            topic: "Classes and Objects".into(),
            level: "beginner".into(),
            session_id: None,
            last_answer: None,
            confusion: false,
            misconceptions: None,
        }
    }

    #[test]
    fn note_has_fixed_field_order() {
        let req = LessonStepRequest {
            last_answer: Some("a blueprint".into()),
            confusion: true,
            misconceptions: Some(vec!["classes are objects".into(), "new copies code".into()]),
            ..lesson_request()
        };
        let note = lesson_note(&req);

        let subject = note.find("Subject: Java").unwrap();
        let misconceptions = note
            .find("Known misconceptions: classes are objects, new copies code")
            .unwrap();
        let answer = note.find("Learner previous answer: a blueprint").unwrap();
        let confused = note.find("re-explain with a different analogy").unwrap();
        assert!(subject < misconceptions);
        assert!(misconceptions < answer);
        assert!(answer < confused);
    }

    #[test]
    fn optional_fields_are_omitted() {
        let note = lesson_note(&lesson_request());
        assert_eq!(note, "Subject: Java. Topic: Classes and Objects. Level: beginner.");
    }

    #[test]
    fn empty_misconception_list_is_omitted() {
        let req = LessonStepRequest {
            misconceptions: Some(vec![]),
            ..lesson_request()
        };
        assert!(!lesson_note(&req).contains("misconceptions"));
    }

    #[test]
    fn lesson_turns_sandwich_history() {
        let history = vec![Turn::user("earlier question"), Turn::assistant("earlier answer")];
        let turns = lesson_turns(&lesson_request(), &history);

        assert_eq!(turns.len(), 5);
        assert_eq!(turns[0].role, Role::System);
        assert_eq!(turns[1].content, "earlier question");
        assert_eq!(turns[2].content, "earlier answer");
        assert!(turns[3].content.starts_with("Subject:"));
        assert!(turns[4].content.contains("Checkpoint:"));
        assert!(turns[4].content.contains("Recap:"));
    }

    #[test]
    fn practice_turns_ask_for_five_numbered_items() {
        let req = PracticeRequest {
            subject: "Python".into(),
            topic: "Loops".into(),
            level: "intermediate".into(),
            session_id: None,
        };
        let turns = practice_turns(&req);

        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::System);
        assert!(turns[1].content.contains("5 practice questions"));
        assert!(turns[1].content.contains("topic Loops"));
        assert!(turns[1].content.contains("numbered"));
    }
}
