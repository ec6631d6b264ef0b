// src/prompt/mod.rs
// Fixed prompt text sent alongside every generation request.
//
// CHAT_INSTRUCTION_BLOCK is parsed by downstream consumers that split the
// model output on file paths and fenced code blocks; its wording, file
// list, and fence examples must not drift.

/// Base prompt returned as the first element of every template bundle.
pub const BASE_PROMPT: &str = "For all designs I ask you to make, have them be beautiful, not cookie cutter. Make webpages that are fully featured and worthy for production.\n\nBy default, this template supports JSX syntax with Tailwind CSS classes, React hooks, and Lucide React for icons. Do not install other packages for UI themes, icons, etc unless absolutely necessary or I request them.\n\nUse icons from lucide-react for logos.\n\nUse stock photos from unsplash where appropriate, only valid URLs you know exist. Do not download the images, only link to them in image tags.\n\n";

/// Mandatory-commands and output-format block prepended to every `/chat`
/// conversation as a synthetic leading user turn.
pub const CHAT_INSTRUCTION_BLOCK: &str = r#"The following commands are required and must be included:
- npm install
- npm run dev
- npm run build

Also include how to install dependencies like:
- tailwindcss
- eslint
- typescript
- @vitejs/plugin-react

Do not skip any of these commands. They are mandatory.

      Provide the content for each file clearly, using markdown code blocks.

      Mandatory files :
      - .gitignore
      - package.json
      - index.html
      - postcss.config.js
      - eslint.config.js
      - src/App.tsx
      - src/main.tsx
      - src/index.css
      - tsconfig.json
      - tsconfig.app.json
      - tsconfig.node.json
      - vite.config.ts


      For each file, start with its full path (e.g., '.gitignore') followed by a markdown code block.
      Example:

      .gitignore
      ```
      /node_modules
      /dist
      ```

      package.json
      ```json
      {
        "name": "my-project",
        "version": "0.0.0"
      }
      ```"#;

/// General system prompt appended after the instruction block.
pub const SYSTEM_PROMPT: &str = "You are an expert full-stack developer working inside an in-browser development environment. You generate complete, runnable projects from user instructions.\n\nConstraints of the environment: there is no cloud VM; code runs in the browser with a Node.js-compatible runtime. Prefer Vite for web servers and npm scripts for tooling. Native binaries and compiled addons are not available.\n\nAlways respond with every file required for the project to run, each given as its full path followed by a fenced code block containing the complete file contents. Never truncate files or reference earlier versions; emit the full content every time.";

/// Full text of the synthetic leading chat turn. Constant across requests.
pub fn chat_instruction() -> String {
    format!("{} {} ", CHAT_INSTRUCTION_BLOCK, SYSTEM_PROMPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_block_lists_mandatory_commands() {
        for command in ["npm install", "npm run dev", "npm run build"] {
            assert!(CHAT_INSTRUCTION_BLOCK.contains(command));
        }
    }

    #[test]
    fn instruction_block_lists_mandatory_files() {
        for file in [
            ".gitignore",
            "package.json",
            "index.html",
            "postcss.config.js",
            "eslint.config.js",
            "src/App.tsx",
            "src/main.tsx",
            "src/index.css",
            "tsconfig.json",
            "tsconfig.app.json",
            "tsconfig.node.json",
            "vite.config.ts",
        ] {
            assert!(CHAT_INSTRUCTION_BLOCK.contains(file), "missing {}", file);
        }
    }

    #[test]
    fn chat_instruction_is_stable_across_calls() {
        assert_eq!(chat_instruction(), chat_instruction());
        assert!(chat_instruction().starts_with(CHAT_INSTRUCTION_BLOCK));
        assert!(chat_instruction().contains(SYSTEM_PROMPT));
    }
}
