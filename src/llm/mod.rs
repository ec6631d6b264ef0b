//! Text generation client layer.
//!
//! Defines the provider-neutral surface the handlers talk to: a [`Turn`]
//! of conversation, a finite forward-only stream of [`StreamEvent`]s, and
//! the [`Generator`] trait implemented by the Gemini client. Tests swap in
//! a deterministic stub behind the same trait.

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// One role-tagged message sent upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub role: String,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            text: text.into(),
        }
    }
}

/// Incremental events produced while draining a generation stream.
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// A fragment of generated text, in arrival order.
    TextDelta(String),
    /// The stream failed mid-flight; no further fragments will arrive.
    Error(String),
    /// End of stream.
    Done,
}

/// Failures from the upstream generation call. Nothing here is retried;
/// callers decide what to surface.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream API error: {status} - {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("stream error: {0}")]
    Stream(String),
}

/// A handle to a hosted text-generation model.
///
/// The returned stream is finite and not restartable; callers must drain
/// it fully (see [`collect_text`]) before using the result.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn stream_generate(
        &self,
        turns: Vec<Turn>,
        max_output_tokens: u32,
    ) -> Result<mpsc::Receiver<StreamEvent>, GenerationError>;
}

/// Drain a generation stream, concatenating fragments in arrival order.
///
/// An `Error` event aborts the drain and surfaces as a [`GenerationError`];
/// fragment boundaries carry no meaning, only the final concatenation.
pub async fn collect_text(
    mut rx: mpsc::Receiver<StreamEvent>,
) -> Result<String, GenerationError> {
    let mut full = String::new();
    while let Some(event) = rx.recv().await {
        match event {
            StreamEvent::TextDelta(text) => full.push_str(&text),
            StreamEvent::Error(message) => return Err(GenerationError::Stream(message)),
            StreamEvent::Done => break,
        }
    }
    Ok(full)
}
