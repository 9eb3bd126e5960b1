//! Bounded snippet extraction from likely entry points.
//!
//! Selects up to [`SNIPPET_LIMIT`] files whose basenames look like entry
//! points, caps each at [`MAX_SNIPPET_CHARS`] characters, and concatenates
//! them with a per-file header. Collection is best-effort: an unreadable
//! candidate is recorded as skipped and never fails the pass.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of snippet files included in the prompt.
pub const SNIPPET_LIMIT: usize = 12;

/// Per-file character cap before truncation.
pub const MAX_SNIPPET_CHARS: usize = 2000;

/// Marker appended when a snippet is cut at the cap.
pub const TRUNCATION_MARKER: &str = "\n... [Content Truncated for AI Context] ...";

static ENTRY_POINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(index|app|server|config|firebase|prisma|tailwind|routes|main)\.(js|ts|jsx|tsx|py|cpp)$")
        .unwrap()
});

/// Outcome of one snippet candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetOutcome {
    /// Snippet captured, possibly truncated at the character cap.
    Extracted { path: String, truncated: bool },
    /// Candidate could not be read; collection continued without it.
    Skipped { path: String },
    /// The candidate limit was hit; this many matches were not read.
    LimitReached { skipped: usize },
}

/// Concatenated snippet text plus the per-candidate outcomes.
#[derive(Debug, Clone, Default)]
pub struct SnippetReport {
    pub text: String,
    pub outcomes: Vec<SnippetOutcome>,
}

impl SnippetReport {
    pub fn extracted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SnippetOutcome::Extracted { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SnippetOutcome::Skipped { .. }))
            .count()
    }
}

/// Extract snippets from the entry-point candidates in `files`, resolved
/// against `root`.
pub fn extract_snippets(root: &Path, files: &[String]) -> SnippetReport {
    let candidates: Vec<&String> = files.iter().filter(|f| ENTRY_POINT.is_match(f)).collect();

    let mut report = SnippetReport::default();
    for path in candidates.iter().take(SNIPPET_LIMIT) {
        match std::fs::read_to_string(root.join(path.as_str())) {
            Ok(content) => {
                let (body, truncated) = cap_content(&content);
                report.text.push_str("\n--- SOURCE: ");
                report.text.push_str(path);
                report.text.push_str(" ---\n");
                report.text.push_str(&body);
                report.text.push('\n');
                report.outcomes.push(SnippetOutcome::Extracted {
                    path: (*path).clone(),
                    truncated,
                });
            }
            Err(err) => {
                tracing::debug!("skipping unreadable candidate {}: {}", path, err);
                report
                    .outcomes
                    .push(SnippetOutcome::Skipped { path: (*path).clone() });
            }
        }
    }

    if candidates.len() > SNIPPET_LIMIT {
        report.outcomes.push(SnippetOutcome::LimitReached {
            skipped: candidates.len() - SNIPPET_LIMIT,
        });
    }

    report
}

/// Cap `content` at [`MAX_SNIPPET_CHARS`] characters, appending the
/// truncation marker when cut. Counts characters, not bytes, so the cut
/// never lands inside a UTF-8 sequence.
fn cap_content(content: &str) -> (String, bool) {
    match content.char_indices().nth(MAX_SNIPPET_CHARS) {
        Some((byte_offset, _)) => {
            let mut capped = content[..byte_offset].to_string();
            capped.push_str(TRUNCATION_MARKER);
            (capped, true)
        }
        None => (content.to_string(), false),
    }
}
