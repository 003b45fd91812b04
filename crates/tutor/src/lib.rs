//! # Mentora Tutor
//!
//! The tutoring engine: per-session conversation state, prompt assembly,
//! and the text post-processing that shapes free-form model output into
//! structured lesson fields or tagged practice questions.
//!
//! The engine is deliberately forgiving: a missing API key, a failed
//! generation call, or marker-less model output all degrade into
//! deterministic substitutes — callers never see those as errors.

pub mod offline;
pub mod parse;
pub mod practice;
pub mod prompt;
pub mod service;
pub mod store;
pub mod types;

pub use parse::ParsedLesson;
pub use practice::{PracticeItem, PracticeKind};
pub use service::Tutor;
pub use store::SessionStore;
pub use types::{LessonStepRequest, LessonStepResponse, PracticeRequest, PracticeResponse};
