//! Prompt templates and rendering.
//!
//! Prompt construction is an explicit two-step composition: render the
//! template with its variables, then hand the text to the model. Rendering
//! is pure, so prompt assembly is testable without a model call.

/// A prompt template with `{name}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    template: &'static str,
}

impl PromptTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self { template }
    }

    /// Substitute each `(name, value)` pair into the template.
    ///
    /// Unmatched placeholders are left intact; literal text is never
    /// touched.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut out = self.template.to_string();
        for (name, value) in vars {
            out = out.replace(&format!("{{{}}}", name), value);
        }
        out
    }
}

/// Stateless question answering over retrieved context.
pub const CONTEXTUAL_PROMPT: PromptTemplate = PromptTemplate::new(
    "You are a helpful assistant answering based on the following document context.\n\
     Only respond based on the context. If unsure, say \"I don't know\".\n\
     \n\
     Context:\n\
     {context}\n\
     \n\
     Question:\n\
     {question}\n\
     \n\
     Answer:",
);

/// Memory-aware question answering: prior session turns precede the context.
pub const MEMORY_PROMPT: PromptTemplate = PromptTemplate::new(
    "You are a helpful assistant answering based on the following document context.\n\
     Only respond based on the context. If unsure, say \"I don't know\".\n\
     \n\
     Conversation so far:\n\
     {history}\n\
     \n\
     Context:\n\
     {context}\n\
     \n\
     Question:\n\
     {question}\n\
     \n\
     Answer:",
);

/// Bullet-point document summarization.
pub const SUMMARY_PROMPT: PromptTemplate = PromptTemplate::new(
    "Summarize the following document clearly and concisely in bullet points.\n\
     \n\
     Document:\n\
     {text}\n\
     \n\
     Summary:",
);

/// Follow-up suggestion generation over a completed Q&A pair.
pub const FOLLOWUP_PROMPT: PromptTemplate = PromptTemplate::new(
    "Based on the following Q&A, suggest 2-3 helpful follow-up questions the user might ask.\n\
     \n\
     Question: {question}\n\
     Answer: {answer}\n\
     \n\
     Follow-up Suggestions:",
);

/// Truncate to at most `max` characters at a character boundary.
///
/// Returns the (possibly shortened) text and whether truncation happened.
pub(crate) fn truncate_chars(text: &str, max: usize) -> (String, bool) {
    let mut char_count = 0;
    for (byte_idx, _) in text.char_indices() {
        if char_count == max {
            return (text[..byte_idx].to_string(), true);
        }
        char_count += 1;
    }
    (text.to_string(), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Rendering ----

    #[test]
    fn test_render_substitutes_placeholders() {
        let template = PromptTemplate::new("Hello {name}, you asked: {question}");
        let out = template.render(&[("name", "user"), ("question", "why?")]);
        assert_eq!(out, "Hello user, you asked: why?");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let template = PromptTemplate::new("{a} and {b}");
        let out = template.render(&[("a", "one")]);
        assert_eq!(out, "one and {b}");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        let template = PromptTemplate::new("{x}, {x} again");
        let out = template.render(&[("x", "twice")]);
        assert_eq!(out, "twice, twice again");
    }

    #[test]
    fn test_contextual_prompt_contains_context_and_question() {
        let out = CONTEXTUAL_PROMPT.render(&[
            ("context", "the mat was red"),
            ("question", "what color was the mat?"),
        ]);
        assert!(out.contains("the mat was red"));
        assert!(out.contains("what color was the mat?"));
        assert!(out.contains("If unsure, say \"I don't know\""));
        assert!(!out.contains("{context}"));
        assert!(!out.contains("{question}"));
    }

    #[test]
    fn test_memory_prompt_includes_history() {
        let out = MEMORY_PROMPT.render(&[
            ("history", "User: hi\nAssistant: hello"),
            ("context", "ctx"),
            ("question", "q"),
        ]);
        assert!(out.contains("Conversation so far:"));
        assert!(out.contains("User: hi\nAssistant: hello"));
    }

    #[test]
    fn test_summary_prompt_renders() {
        let out = SUMMARY_PROMPT.render(&[("text", "document body")]);
        assert!(out.contains("bullet points"));
        assert!(out.contains("document body"));
        assert!(out.ends_with("Summary:"));
    }

    #[test]
    fn test_followup_prompt_renders() {
        let out = FOLLOWUP_PROMPT.render(&[("question", "q?"), ("answer", "a.")]);
        assert!(out.contains("Question: q?"));
        assert!(out.contains("Answer: a."));
        assert!(out.ends_with("Follow-up Suggestions:"));
    }

    // ---- Truncation helper ----

    #[test]
    fn test_truncate_under_budget_untouched() {
        let (out, truncated) = truncate_chars("short", 100);
        assert_eq!(out, "short");
        assert!(!truncated);
    }

    #[test]
    fn test_truncate_at_exact_budget_untouched() {
        let (out, truncated) = truncate_chars("exact", 5);
        assert_eq!(out, "exact");
        assert!(!truncated);
    }

    #[test]
    fn test_truncate_over_budget() {
        let (out, truncated) = truncate_chars("a longer string", 8);
        assert_eq!(out, "a longer");
        assert!(truncated);
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let (out, truncated) = truncate_chars("ééééé", 3);
        assert_eq!(out, "ééé");
        assert!(truncated);
    }

    #[test]
    fn test_truncate_empty() {
        let (out, truncated) = truncate_chars("", 10);
        assert_eq!(out, "");
        assert!(!truncated);
    }

    #[test]
    fn test_truncate_zero_budget() {
        let (out, truncated) = truncate_chars("anything", 0);
        assert_eq!(out, "");
        assert!(truncated);
    }
}
