//! # Mentora Core
//!
//! Domain types, traits, and error definitions for the Mentora tutoring
//! backend. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The generation backend is defined as a trait here; implementations live
//! in `mentora-providers`. This enables:
//! - Swapping LLM backends via configuration
//! - Easy testing with mock/stub providers
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod provider;
pub mod session;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result};
pub use provider::{GenerationRequest, GenerationResponse, Provider, Purpose};
pub use session::{Role, SessionId, Transcript, Turn};
