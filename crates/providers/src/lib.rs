//! LLM provider implementations for Mentora.
//!
//! All providers implement the `mentora_core::Provider` trait.
//! `build_from_config` wires the configured backend, or none when no
//! API key is available (the tutor then runs on offline fallbacks).

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;

use mentora_core::Provider;
use std::sync::Arc;

/// Build the configured provider, if any.
///
/// Returns `None` when no API key is configured; the tutor service treats
/// that as "generation unavailable" and serves deterministic offline text.
pub fn build_from_config(config: &mentora_config::AppConfig) -> Option<Arc<dyn Provider>> {
    let api_key = config.api_key.as_deref()?;

    Some(Arc::new(OpenAiCompatProvider::new(
        "openai",
        &config.base_url,
        api_key,
    )))
}
