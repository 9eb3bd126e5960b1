//! Document producer.
//!
//! Composes the generation prompt, performs the single service call and
//! guarantees the centered-header marker on whatever comes back.

use crate::analyzer::{ProjectContext, TemplateKind};
use crate::error::Result;

pub mod client;
pub mod prompt;

pub use client::{GeminiClient, MODEL_NAME};
pub use prompt::compose_prompt;

/// Marker every produced document is guaranteed to contain.
pub const CENTERED_HEADER_MARKER: &str = "<div align=\"center\">";

/// Generate the README markdown for `context` using the chosen blueprint.
pub fn generate_readme(
    client: &GeminiClient,
    context: &ProjectContext,
    template: TemplateKind,
) -> Result<String> {
    let prompt = compose_prompt(context, template);
    tracing::debug!(chars = prompt.chars().count(), "composed generation prompt");

    let markdown = client.generate(&prompt)?;
    Ok(ensure_centered_header(&markdown, &context.name))
}

/// Prepend a synthetic centered header when the generated text lacks one.
/// No other structural validation is performed.
pub fn ensure_centered_header(markdown: &str, project_name: &str) -> String {
    if markdown.contains(CENTERED_HEADER_MARKER) {
        markdown.trim().to_string()
    } else {
        format!(
            "{}\n# 🚀 {}\n</div>\n\n---\n\n{}",
            CENTERED_HEADER_MARKER, project_name, markdown
        )
        .trim()
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_passes_through_when_present() {
        let markdown = "<div align=\"center\">\n# Already Centered\n</div>\n\nBody.";
        let result = ensure_centered_header(markdown, "demo");
        assert_eq!(result, markdown.trim());
    }

    #[test]
    fn test_header_is_prepended_when_absent() {
        let result = ensure_centered_header("# Plain Title\n\nBody.", "demo");
        assert!(result.starts_with(CENTERED_HEADER_MARKER));
        assert!(result.contains("# 🚀 demo"));
        assert!(result.contains("# Plain Title"));
    }

    #[test]
    fn test_header_marker_always_present() {
        for markdown in ["", "text", "<div align=\"center\">x</div>"] {
            let result = ensure_centered_header(markdown, "p");
            assert!(result.contains(CENTERED_HEADER_MARKER));
        }
    }
}
