//! AI Concierge
//!
//! Two features backed by a generative-text API:
//!
//! - **client**: the `TextGenerator` seam and its HTTP implementation
//! - **consultation**: photo + description in, structured grooming advice out
//! - **chat**: a menu-aware chat assistant
//! - **error**: Error types
//!
//! Neither feature retries. A failed call shows a localized fallback message
//! and leaves the feature idle so the visitor can try again.

pub mod chat;
pub mod client;
pub mod consultation;
pub mod error;

pub use chat::{concierge_prompt, service_context, ChatMessage, ChatRole, ConciergeChat};
pub use client::{
    GeminiClient, GeminiConfig, GenerationRequest, InlineImage, TextGenerator, DEFAULT_BASE_URL,
    DEFAULT_MODEL,
};
pub use consultation::{
    consultation_prompt, consultation_schema, Consultant, ConsultationInput, ConsultationResult,
    ConsultationSession,
};
pub use error::{ConciergeError, ConciergeResult};
