//! Template classification.
//!
//! Sends the user's initial prompt to the generation model, classifies the
//! reply as a react or node project by substring match, and builds the
//! canned prompt bundle for that project type.

pub mod boilerplate;

use thiserror::Error;

use crate::llm::{GenerationError, Generator, Turn, collect_text};
use crate::prompt::BASE_PROMPT;
use boilerplate::{NODE_BASE, REACT_BASE};

/// Output budget for the classification call. The reply only needs to name
/// a project type, never a full scaffold.
const CLASSIFY_MAX_OUTPUT_TOKENS: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    React,
    Node,
}

impl ProjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectKind::React => "react",
            ProjectKind::Node => "node",
        }
    }

    fn base_body(self) -> &'static str {
        match self {
            ProjectKind::React => REACT_BASE,
            ProjectKind::Node => NODE_BASE,
        }
    }
}

/// Classify the model's reply by substring containment. Case-sensitive,
/// unanchored; "react" is checked before "node", so a reply containing
/// both is React.
pub fn classify_response(text: &str) -> Option<ProjectKind> {
    if text.contains("react") {
        Some(ProjectKind::React)
    } else if text.contains("node") {
        Some(ProjectKind::Node)
    } else {
        None
    }
}

/// Prompt bundle for a recognized project type. Built fresh per request.
#[derive(Debug, Clone)]
pub struct TemplateBundle {
    pub prompts: [String; 2],
    pub ui_prompt: [String; 1],
}

#[derive(Debug, Error)]
pub enum TemplateError {
    /// The reply named neither project type. Carries the raw model text so
    /// the caller can surface it instead of silently defaulting.
    #[error("unrecognized model response")]
    Unrecognized { model_response: String },

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

fn artifact_prompt(body: &str) -> String {
    format!(
        "Here is an artifact that contains all files of the project visible to you.\nConsider the contents of ALL files in the project.\n\n{}\n\nHere is a list of files that exist on the file system but are not being shown to you:\n\n  - .gitignore\n  - package-lock.json\n",
        body
    )
}

pub fn bundle_for(kind: ProjectKind) -> TemplateBundle {
    let body = kind.base_body();
    TemplateBundle {
        prompts: [BASE_PROMPT.to_string(), artifact_prompt(body)],
        ui_prompt: [body.to_string()],
    }
}

/// Classify `prompt` via the generation model and build the matching bundle.
pub async fn resolve(
    generator: &dyn Generator,
    prompt: &str,
) -> Result<TemplateBundle, TemplateError> {
    let rx = generator
        .stream_generate(vec![Turn::user(prompt)], CLASSIFY_MAX_OUTPUT_TOKENS)
        .await?;
    let full_response = collect_text(rx).await?;

    match classify_response(&full_response) {
        Some(kind) => {
            tracing::info!("classified prompt as {}", kind.as_str());
            Ok(bundle_for(kind))
        }
        None => Err(TemplateError::Unrecognized {
            model_response: full_response,
        }),
    }
}
