// src/llm/mod.rs
// LLM capability: the completion seam and the Gemini implementation.

mod gemini;

pub use gemini::{GeminiClient, DEFAULT_GEMINI_BASE_URL};

use async_trait::async_trait;
use thiserror::Error;

/// Sampling temperature for both categorization and translation calls.
/// Low on purpose: folder paths should be deterministic.
pub const COMPLETION_TEMPERATURE: f32 = 0.1;
/// Output budget for a categorization call (a short folder path).
pub const CATEGORIZE_MAX_TOKENS: u32 = 200;
/// Output budget for a translation call.
pub const TRANSLATE_MAX_TOKENS: u32 = 100;

#[derive(Debug, Error)]
pub enum LlmError {
    /// The provider answered with a non-success status.
    #[error("Gemini API error: {status} - {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Transport succeeded but the response carried no usable text.
    #[error("invalid response format from Gemini API")]
    MalformedResponse,

    #[error("Gemini request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A remote text-completion capability: send a prompt, receive text.
///
/// The categorizer only depends on this trait, so tests can substitute a
/// scripted provider for the real Gemini client.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the trimmed text of the first candidate.
    async fn complete(&self, prompt: &str, max_output_tokens: u32) -> Result<String, LlmError>;
}
