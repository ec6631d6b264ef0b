//! Request and response bodies for the HTTP surface.

use serde::{Deserialize, Serialize};

use crate::llm::Turn;
use crate::template::TemplateBundle;

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    pub prompts: [String; 2],
    #[serde(rename = "uiPrompt")]
    pub ui_prompt: [String; 1],
}

impl From<TemplateBundle> for TemplateResponse {
    fn from(bundle: TemplateBundle) -> Self {
        Self {
            prompts: bundle.prompts,
            ui_prompt: bundle.ui_prompt,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateErrorBody {
    pub error: String,
    #[serde(rename = "modelResponse")]
    pub model_response: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl From<ChatMessage> for Turn {
    fn from(message: ChatMessage) -> Self {
        Turn {
            role: message.role,
            text: message.content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_response_uses_ui_prompt_key() {
        let response = TemplateResponse {
            prompts: ["a".to_string(), "b".to_string()],
            ui_prompt: ["c".to_string()],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["prompts"][0], "a");
        assert_eq!(json["uiPrompt"][0], "c");
        assert!(json.get("ui_prompt").is_none());
    }

    #[test]
    fn template_error_body_uses_model_response_key() {
        let body = TemplateErrorBody {
            error: "Unrecognized model response".to_string(),
            model_response: "raw text".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["modelResponse"], "raw text");
    }

    #[test]
    fn chat_message_converts_to_turn_unchanged() {
        let message = ChatMessage {
            role: "model".to_string(),
            content: "previous reply".to_string(),
        };
        let turn = Turn::from(message);
        assert_eq!(turn.role, "model");
        assert_eq!(turn.text, "previous reply");
    }
}
