//! Provider trait — the abstraction over LLM backends.
//!
//! A Provider knows how to send an ordered list of turns to an LLM and get
//! free-form text back. The tutor service calls `complete()` without knowing
//! which backend is configured — and substitutes a deterministic offline
//! text when no backend is configured at all.

use crate::error::ProviderError;
use crate::session::Turn;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// What the generated text will be shaped into downstream.
///
/// Passed as a hint alongside the turns; also selects the offline fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    /// One teaching step with a checkpoint question and a recap line.
    Lesson,
    /// Five numbered practice questions.
    Practice,
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Purpose::Lesson => write!(f, "lesson"),
            Purpose::Practice => write!(f, "practice"),
        }
    }
}

/// Configuration for a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The model to use (e.g., "gpt-4o-mini")
    pub model: String,

    /// The ordered conversation turns
    pub turns: Vec<Turn>,

    /// Temperature (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

fn default_temperature() -> f32 {
    0.6
}

/// A complete response from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The generated text
    pub content: String,

    /// Which model actually responded (may differ from requested)
    pub model: String,
}

/// The core Provider trait.
///
/// Every LLM backend implements this. The tutor service calls `complete()`
/// through `dyn Provider` — pure polymorphism.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "openai").
    fn name(&self) -> &str;

    /// Send the turns and get the generated text back.
    async fn complete(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GenerationResponse, ProviderError>;

    /// Health check — can we reach the provider?
    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_defaults() {
        let req = GenerationRequest {
            model: "gpt-4o-mini".into(),
            turns: vec![],
            temperature: default_temperature(),
            max_tokens: None,
        };
        assert!((req.temperature - 0.6).abs() < f32::EPSILON);
        assert!(req.max_tokens.is_none());
    }

    #[test]
    fn purpose_display() {
        assert_eq!(Purpose::Lesson.to_string(), "lesson");
        assert_eq!(Purpose::Practice.to_string(), "practice");
    }
}
