//! Text Generation Boundary
//!
//! The section drafter's interface to a chat-completion model. The boundary
//! deliberately never errors: every call resolves to a [`GenerationOutcome`],
//! either generated text or an unavailability reason, and the drafter branches
//! on that to assign confidence. An unconfigured or failing model therefore
//! degrades draft quality instead of failing the run.
//!
//! # Architecture
//!
//! - [`TextGenerator`] - The core trait the drafter calls
//! - [`GeneratorProvider`] - Runtime provider selection
//! - [`huggingface`](crate::llm::huggingface) - Hugging Face router client

/// Core text-generation trait and provider selection.
pub mod client;
/// Hugging Face chat-completion client.
pub mod huggingface;

pub use client::{GenerationOutcome, GenerationParams, GeneratorProvider, TextGenerator};
