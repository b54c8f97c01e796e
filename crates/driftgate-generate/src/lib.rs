//! Generation collaborator: asks an Ollama-style backend to add docstrings
//! and comments to undocumented Python code.
//!
//! This crate is a boundary, not part of the verification contract. The only
//! guarantee the core relies on is that whatever text comes back is treated
//! as untrusted "after" input and passed through the verification engine
//! before being written anywhere durable.

use std::io::Read;
use std::time::Duration;

use driftgate_core::config::GeneratorConfig;

const SYSTEM_PROMPT: &str = "You are a coding assistant. You help coders documenting their code, \
     by providing detailed docstrings and comments. You use type annotations \
     and google style docstrings.";

pub const GOOGLE_DOCSTRING_TEMPLATE: &str = r#"[Description]:

    Args:
        param1 (type): The first parameter description.
        param2 (type): The second parameter description.

    Returns:
        type: The return value description."#;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("request to {url} failed: {reason}")]
    Http { url: String, reason: String },
    #[error("malformed backend response: {0}")]
    Decode(String),
    #[error("backend response has no `response` field")]
    MissingField,
}

/// Client for the documentation-generation backend.
pub struct GenerateClient {
    agent: ureq::Agent,
    base_url: String,
    model: String,
    temperature: f64,
    system_prompt: String,
}

impl GenerateClient {
    pub fn from_config(cfg: &GeneratorConfig) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .timeout_global(Some(Duration::from_secs(120)))
                .build(),
        );
        Self {
            agent,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            model: cfg.model.clone(),
            temperature: cfg.temperature,
            system_prompt: cfg
                .system_prompt
                .clone()
                .unwrap_or_else(|| SYSTEM_PROMPT.to_string()),
        }
    }

    /// Request a documented version of `undoc_code`. Returns the annotated
    /// text verbatim — callers must verify it before accepting it.
    pub fn generate_comments(
        &self,
        undoc_code: &str,
        inline: bool,
    ) -> Result<String, GenerateError> {
        let url = format!("{}/generate", self.base_url);
        let payload = serde_json::json!({
            "model": self.model,
            "system": self.system_prompt,
            "prompt": build_prompt(undoc_code, inline),
            "stream": false,
            "options": { "temperature": self.temperature },
        });

        let resp = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send(payload.to_string().as_bytes())
            .map_err(|e| GenerateError::Http {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let mut body = String::new();
        resp.into_body()
            .into_reader()
            .read_to_string(&mut body)
            .map_err(|e| GenerateError::Decode(e.to_string()))?;

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| GenerateError::Decode(e.to_string()))?;
        value
            .get("response")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or(GenerateError::MissingField)
    }
}

fn build_prompt(undoc_code: &str, inline: bool) -> String {
    let inline_comments = if inline {
        "Add inline comments to the method body where it makes sense."
    } else {
        ""
    };
    format!(
        "Add detailed docstrings and comments to the following python methods:\n{undoc_code}\n.\n\
         The docstrings should describe what the methods do. {inline_comments}\n\
         Use type annotations.\n\
         Use google style docstrings with is {GOOGLE_DOCSTRING_TEMPLATE}\n\
         Apart from types annotations, comments and docstrings, do not alter code.\n\
         Do not include any explanations in your response.\n"
    )
}
