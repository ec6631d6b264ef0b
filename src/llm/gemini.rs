//! Gemini streaming client.
//!
//! Posts to the `streamGenerateContent` endpoint with SSE transport and
//! forwards text fragments over an mpsc channel as they arrive.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;

use super::{GenerationError, Generator, StreamEvent, Turn};
use crate::config::Config;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Process-wide handle to one fixed Gemini model. Immutable after
/// construction; shared across requests behind an `Arc`.
pub struct GeminiClient {
    client: HttpClient,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        Self {
            client: HttpClient::new(),
            api_key,
            model,
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            Duration::from_secs(config.gemini_timeout_secs),
        )
    }

    fn stream_url(&self) -> String {
        format!(
            "{}/{}:streamGenerateContent?alt=sse&key={}",
            GEMINI_API_BASE, self.model, self.api_key
        )
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn stream_generate(
        &self,
        turns: Vec<Turn>,
        max_output_tokens: u32,
    ) -> Result<mpsc::Receiver<StreamEvent>, GenerationError> {
        let api_request = GeminiRequest {
            contents: turns
                .into_iter()
                .map(|turn| GeminiContent {
                    role: turn.role,
                    parts: vec![GeminiTextPart { text: turn.text }],
                })
                .collect(),
            generation_config: GeminiGenerationConfig { max_output_tokens },
        };

        let response = self
            .client
            .post(self.stream_url())
            .json(&api_request)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Upstream { status, body });
        }

        let (tx, rx) = mpsc::channel(100);

        tokio::spawn(async move {
            let mut stream = response.bytes_stream();
            let mut buffer = String::new();

            while let Some(chunk) = stream.next().await {
                match chunk {
                    Ok(bytes) => {
                        buffer.push_str(&String::from_utf8_lossy(&bytes));

                        // Parse SSE events line by line
                        while let Some(line_end) = buffer.find('\n') {
                            let line = buffer[..line_end].trim().to_string();
                            buffer = buffer[line_end + 1..].to_string();

                            if let Some(data) = line.strip_prefix("data: ") {
                                if let Ok(chunk) =
                                    serde_json::from_str::<GeminiStreamChunk>(data)
                                {
                                    if let Some(error) = chunk.error {
                                        let _ = tx
                                            .send(StreamEvent::Error(error.message))
                                            .await;
                                        return;
                                    }
                                    for candidate in chunk.candidates.unwrap_or_default() {
                                        let parts = candidate
                                            .content
                                            .and_then(|c| c.parts)
                                            .unwrap_or_default();
                                        for part in parts {
                                            if let Some(text) = part.text {
                                                let _ = tx
                                                    .send(StreamEvent::TextDelta(text))
                                                    .await;
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                        return;
                    }
                }
            }

            let _ = tx.send(StreamEvent::Done).await;
        });

        Ok(rx)
    }
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiTextPart>,
}

#[derive(Serialize)]
struct GeminiTextPart {
    text: String,
}

#[derive(Serialize)]
struct GeminiGenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GeminiStreamChunk {
    candidates: Option<Vec<GeminiStreamCandidate>>,
    error: Option<GeminiApiError>,
}

#[derive(Deserialize)]
struct GeminiStreamCandidate {
    content: Option<GeminiStreamContent>,
}

#[derive(Deserialize)]
struct GeminiStreamContent {
    parts: Option<Vec<GeminiStreamPart>>,
}

#[derive(Deserialize)]
struct GeminiStreamPart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiApiError {
    message: String,
}
