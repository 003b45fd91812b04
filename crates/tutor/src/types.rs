//! Request and response types for the tutor operations.
//!
//! These mirror the wire shapes the gateway exposes; the gateway
//! deserializes straight into them.

use crate::practice::PracticeItem;
use serde::{Deserialize, Serialize};

/// Request for one teaching step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonStepRequest {
    /// e.g. "Java", "Logical Reasoning"
    pub subject: String,

    /// e.g. "Classes and Objects"
    pub topic: String,

    /// "beginner" or "intermediate"
    #[serde(default = "default_level")]
    pub level: String,

    /// Existing session id (omit to start a new session)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// The learner's answer to the previous checkpoint question
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_answer: Option<String>,

    /// Set when the learner reported being confused
    #[serde(default)]
    pub confusion: bool,

    /// Known misconceptions to address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub misconceptions: Option<Vec<String>>,
}

pub(crate) fn default_level() -> String {
    "beginner".into()
}

/// One structured teaching step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonStepResponse {
    pub session_id: String,
    pub step: String,
    pub checkpoint_question: String,
    pub recap: String,
}

/// Request for a set of practice questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeRequest {
    pub subject: String,
    pub topic: String,

    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// A set of tagged practice questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeResponse {
    pub session_id: String,
    pub practice: Vec<PracticeItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_request_minimal_json() {
        let req: LessonStepRequest =
            serde_json::from_str(r#"{"subject": "Java", "topic": "Classes"}"#).unwrap();
        assert_eq!(req.level, "beginner");
        assert!(req.session_id.is_none());
        assert!(!req.confusion);
        assert!(req.misconceptions.is_none());
    }

    #[test]
    fn lesson_request_full_json() {
        let req: LessonStepRequest = serde_json::from_str(
            r#"{
                "subject": "Java",
                "topic": "Classes",
                "level": "intermediate",
                "session_id": "abc",
                "last_answer": "a blueprint",
                "confusion": true,
                "misconceptions": ["classes are objects"]
            }"#,
        )
        .unwrap();
        assert_eq!(req.level, "intermediate");
        assert_eq!(req.session_id.as_deref(), Some("abc"));
        assert!(req.confusion);
        assert_eq!(req.misconceptions.unwrap().len(), 1);
    }

    #[test]
    fn practice_request_defaults_level() {
        let req: PracticeRequest =
            serde_json::from_str(r#"{"subject": "Python", "topic": "Loops"}"#).unwrap();
        assert_eq!(req.level, "beginner");
    }
}
