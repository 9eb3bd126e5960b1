//! Gemini API client.
//!
//! One blocking request per generation: send the whole prompt, receive the
//! whole completion. No retry, no streaming, no partial-result salvage.

use serde::{Deserialize, Serialize};

use crate::error::{GenesisError, Result};

/// Model used for README generation.
pub const MODEL_NAME: &str = "gemini-2.0-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const USER_AGENT: &str = concat!("readme-genesis/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    // Absent when the candidate was filtered before producing content.
    content: Option<Content>,
}

/// Client for the `generateContent` endpoint.
pub struct GeminiClient {
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: MODEL_NAME.to_string(),
        }
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Send `prompt` and return the completion text.
    ///
    /// Transport and service failures surface unmodified as
    /// [`GenesisError::Request`]; an answer without completion text is
    /// [`GenesisError::EmptyCompletion`].
    pub fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/{}:generateContent", API_BASE, self.model);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt.to_string() }],
            }],
        };

        let response = ureq::post(&url)
            .set("x-goog-api-key", &self.api_key)
            .set("User-Agent", USER_AGENT)
            .send_json(&request)?;

        let parsed: GenerateContentResponse = response.into_json()?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
            .filter(|t| !t.is_empty())
            .ok_or(GenesisError::EmptyCompletion)?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parses_candidate_text() {
        let raw = r##"{
            "candidates": [
                {"content": {"parts": [{"text": "# Hello"}, {"text": " World"}], "role": "model"}}
            ]
        }"##;

        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap();
        assert_eq!(text, "# Hello World");
    }

    #[test]
    fn test_response_without_candidates_parses() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
