//! Chat relay.
//!
//! Prepends the fixed instruction block to the caller's conversation and
//! returns the model's streamed reply as one concatenated string. No
//! parsing of the reply's file/code-block structure happens here; that
//! belongs to the consumer.

use crate::llm::{GenerationError, Generator, Turn, collect_text};
use crate::prompt;

/// Output budget for a full scaffold reply.
const CHAT_MAX_OUTPUT_TOKENS: u32 = 8000;

/// Relay `history` to the generation model behind the instruction turn.
///
/// Caller turns are forwarded unchanged: no reordering, no filtering, no
/// role translation.
pub async fn relay(
    generator: &dyn Generator,
    history: Vec<Turn>,
) -> Result<String, GenerationError> {
    let mut turns = Vec::with_capacity(history.len() + 1);
    turns.push(Turn::user(prompt::chat_instruction()));
    turns.extend(history);

    let rx = generator
        .stream_generate(turns, CHAT_MAX_OUTPUT_TOKENS)
        .await?;
    collect_text(rx).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::StreamEvent;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::mpsc;

    struct RecordingGenerator {
        reply: Vec<&'static str>,
        calls: Mutex<Vec<(Vec<Turn>, u32)>>,
    }

    impl RecordingGenerator {
        fn new(reply: Vec<&'static str>) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Generator for RecordingGenerator {
        async fn stream_generate(
            &self,
            turns: Vec<Turn>,
            max_output_tokens: u32,
        ) -> Result<mpsc::Receiver<StreamEvent>, GenerationError> {
            self.calls.lock().unwrap().push((turns, max_output_tokens));
            let (tx, rx) = mpsc::channel(16);
            for fragment in &self.reply {
                tx.send(StreamEvent::TextDelta(fragment.to_string()))
                    .await
                    .unwrap();
            }
            tx.send(StreamEvent::Done).await.unwrap();
            Ok(rx)
        }
    }

    #[tokio::test]
    async fn relay_prepends_instruction_turn() {
        let stub = RecordingGenerator::new(vec!["ok"]);
        let history = vec![Turn::user("build a todo app")];

        relay(&stub, history).await.unwrap();

        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (turns, max_tokens) = &calls[0];
        assert_eq!(turns.len(), 2, "instruction turn + 1 caller turn");
        assert_eq!(turns[0].role, "user");
        assert_eq!(turns[0].text, prompt::chat_instruction());
        assert_eq!(turns[1].text, "build a todo app");
        assert_eq!(*max_tokens, 8000);
    }

    #[tokio::test]
    async fn relay_preserves_history_order_and_roles() {
        let stub = RecordingGenerator::new(vec!["ok"]);
        let history = vec![
            Turn {
                role: "user".to_string(),
                text: "first".to_string(),
            },
            Turn {
                role: "model".to_string(),
                text: "second".to_string(),
            },
            Turn {
                role: "user".to_string(),
                text: "third".to_string(),
            },
        ];

        relay(&stub, history.clone()).await.unwrap();

        let calls = stub.calls.lock().unwrap();
        let (turns, _) = &calls[0];
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[1..], history[..]);
    }

    #[tokio::test]
    async fn relay_returns_concatenation_verbatim() {
        let stub = RecordingGenerator::new(vec!["package.json\n", "```json\n", "{}\n", "```"]);

        let response = relay(&stub, vec![Turn::user("go")]).await.unwrap();
        assert_eq!(response, "package.json\n```json\n{}\n```");
    }

    #[tokio::test]
    async fn relay_is_idempotent_against_deterministic_model() {
        let stub = RecordingGenerator::new(vec!["same ", "answer"]);
        let history = vec![Turn::user("build a todo app")];

        let first = relay(&stub, history.clone()).await.unwrap();
        let second = relay(&stub, history).await.unwrap();
        assert_eq!(first, second);
    }
}
