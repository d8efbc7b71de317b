//! Follow-up suggestion extraction.
//!
//! Feeds a completed Q&A pair to the model through a fixed suggestion
//! prompt, then parses the raw multi-line output into a clean, bounded list.
//! Only enumerated lines count as suggestions: the model is asked for a
//! numbered or bulleted list, so unmarked lines are headers or prose noise.
//! Extraction never fails — unusable output yields an empty list.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::warn;

use dossier_core::config::FollowupConfig;

use crate::model::LanguageModel;
use crate::prompt::{truncate_chars, FOLLOWUP_PROMPT};

/// Header labels that mark a line as scaffolding rather than a suggestion.
const HEADER_LABELS: &[&str] = &[
    "follow-up",
    "followup",
    "follow up",
    "suggestion",
    "suggested",
    "here are",
];

/// Leading enumeration markers: bullets, `1.` / `2)` / `3:` numbering, `#1`.
fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:[*•\-–]+\s*|\d+\s*[.)\]:]\s*|#\d+\s*)+").expect("valid marker regex")
    })
}

/// Extracts follow-up question suggestions from model output.
pub struct FollowupExtractor {
    model: Arc<dyn LanguageModel>,
    max_suggestions: usize,
    max_answer_chars: usize,
    min_suggestion_chars: usize,
}

impl FollowupExtractor {
    /// Create an extractor over the given model.
    pub fn new(model: Arc<dyn LanguageModel>, config: &FollowupConfig) -> Self {
        Self {
            model,
            max_suggestions: config.max_suggestions,
            max_answer_chars: config.max_answer_chars,
            min_suggestion_chars: config.min_suggestion_chars,
        }
    }

    /// Suggest follow-up questions for a completed Q&A pair.
    ///
    /// The answer is cut to the configured budget before submission. Model
    /// failure or unusable output yields an empty list; this never errors.
    pub async fn extract(&self, question: &str, answer: &str) -> Vec<String> {
        let (short_answer, _) = truncate_chars(answer, self.max_answer_chars);
        let prompt = FOLLOWUP_PROMPT.render(&[("question", question), ("answer", &short_answer)]);

        match self.model.invoke(&prompt).await {
            Ok(raw) => self.parse(&raw),
            Err(e) => {
                warn!(error = %e, "Follow-up generation failed");
                Vec::new()
            }
        }
    }

    /// Parse raw model output into cleaned suggestions, in source order.
    ///
    /// Blank lines and header lines are dropped; enumeration markers and
    /// surrounding quotes are stripped; cleaned lines below the minimum
    /// length are noise. At most `max_suggestions` survive.
    pub fn parse(&self, raw: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        for line in raw.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let lower = trimmed.to_lowercase();
            if HEADER_LABELS.iter().any(|label| lower.starts_with(label)) {
                continue;
            }
            let Some(marker) = marker_pattern().find(trimmed) else {
                continue;
            };
            let cleaned = trimmed[marker.end()..]
                .trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .trim();
            if cleaned.chars().count() < self.min_suggestion_chars {
                continue;
            }
            suggestions.push(cleaned.to_string());
            if suggestions.len() == self.max_suggestions {
                break;
            }
        }
        suggestions
    }
}
