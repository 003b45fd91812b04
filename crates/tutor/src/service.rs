//! The tutor service — the two operations the gateway exposes.
//!
//! Control flow per request: resolve/create the session → snapshot its
//! transcript (lock released) → assemble turns → generate → shape the raw
//! text → append the new turns → respond. Generation failures degrade into
//! deterministic offline text; they never surface as errors.

use crate::types::{LessonStepRequest, LessonStepResponse, PracticeRequest, PracticeResponse};
use crate::{offline, parse, practice, prompt, store::SessionStore};
use mentora_core::error::Result;
use mentora_core::provider::{GenerationRequest, Provider, Purpose};
use mentora_core::session::Turn;
use std::sync::Arc;
use tracing::{info, warn};

/// The tutoring engine.
///
/// `provider` is `None` when no API key is configured; the service then
/// runs entirely on offline fallback text.
pub struct Tutor {
    provider: Option<Arc<dyn Provider>>,
    store: Arc<SessionStore>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl Tutor {
    pub fn new(
        provider: Option<Arc<dyn Provider>>,
        store: Arc<SessionStore>,
        model: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            provider,
            store,
            model: model.into(),
            temperature,
            max_tokens,
        }
    }

    /// Whether a generation backend is configured.
    pub fn provider_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// The shared session store.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Call the provider, substituting deterministic offline text when no
    /// provider is configured or the call fails. No retries.
    async fn generate(&self, turns: Vec<Turn>, purpose: Purpose) -> String {
        let Some(provider) = &self.provider else {
            info!(purpose = %purpose, "No provider configured, serving offline fallback");
            return offline::text(purpose).to_string();
        };

        let request = GenerationRequest {
            model: self.model.clone(),
            turns,
            temperature: self.temperature,
            max_tokens: Some(self.max_tokens),
        };

        match provider.complete(request).await {
            Ok(response) => response.content,
            Err(e) => {
                warn!(error = %e, purpose = %purpose, "Generation failed, serving offline fallback");
                offline::text(purpose).to_string()
            }
        }
    }

    /// Produce one teaching step for the request's subject/topic/level.
    pub async fn lesson_step(&self, req: LessonStepRequest) -> Result<LessonStepResponse> {
        let session_id = self.store.resolve_or_create(req.session_id.as_deref()).await;
        info!(
            session = %session_id,
            subject = %req.subject,
            topic = %req.topic,
            level = %req.level,
            "lesson-step request"
        );

        // Snapshot the transcript; the store lock is not held across the
        // provider call.
        let history = self.store.history(&session_id).await;
        let note = prompt::lesson_note(&req);
        let turns = prompt::lesson_turns(&req, &history);

        let raw = self.generate(turns, Purpose::Lesson).await;
        let parsed = parse::parse_lesson(&raw);

        self.store.append(&session_id, Turn::user(note)).await;
        self.store.append(&session_id, Turn::assistant(&raw)).await;

        let step = format!("{}\n\n{}\n\n{}", parsed.step, parsed.checkpoint, parsed.recap);

        Ok(LessonStepResponse {
            session_id: session_id.to_string(),
            step,
            checkpoint_question: parsed.checkpoint,
            recap: parsed.recap,
        })
    }

    /// Produce a set of tagged practice questions.
    pub async fn practice(&self, req: PracticeRequest) -> Result<PracticeResponse> {
        let session_id = self.store.resolve_or_create(req.session_id.as_deref()).await;
        info!(
            session = %session_id,
            subject = %req.subject,
            topic = %req.topic,
            level = %req.level,
            "practice request"
        );

        let turns = prompt::practice_turns(&req);
        let raw = self.generate(turns, Purpose::Practice).await;
        let items = practice::format_practice(&raw);

        self.store.append(&session_id, Turn::assistant(&raw)).await;

        Ok(PracticeResponse {
            session_id: session_id.to_string(),
            practice: items,
        })
    }
}
