//! Generation client with bounded corrective retry.

use crate::extract_markup;
use std::sync::Arc;
use triptych_core::{GeneratedDocument, Turn};
use triptych_error::TriptychResult;
use triptych_interface::TextGenerator;
use tracing::{debug, instrument, warn};

/// Corrective instruction sent when a completion carries no fenced markup.
pub const CORRECTIVE_PROMPT: &str =
    "Please provide your response in HTML format, enclosed in ```html ``` tags.";

/// Generation client producing application documents from a transcript.
///
/// Wraps a [`TextGenerator`] with extraction and a single corrective
/// retry: when the first completion has no fenced markup, one corrective
/// user turn is appended to a copy of the input turns and the backend is
/// asked once more. The corrective turn never reaches the shared
/// transcript; only meaningful turns belong in the permanent log.
///
/// When both attempts fail to extract, the raw completion is returned
/// flagged as a degraded fallback rather than an extracted document. There
/// are no further retries beyond the one corrective attempt.
pub struct DocumentGenerator<D> {
    driver: Arc<D>,
    model: String,
}

impl<D> Clone for DocumentGenerator<D> {
    fn clone(&self) -> Self {
        Self {
            driver: Arc::clone(&self.driver),
            model: self.model.clone(),
        }
    }
}

impl<D: TextGenerator> DocumentGenerator<D> {
    /// Create a generation client for the given backend and model.
    pub fn new(driver: Arc<D>, model: impl Into<String>) -> Self {
        Self {
            driver,
            model: model.into(),
        }
    }

    /// Generate a document for the given conversation turns.
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` when a backend call itself fails on
    /// either attempt. A completion without extractable markup is not an
    /// error here; it surfaces as `extracted: false` on the result.
    #[instrument(skip(self, turns), fields(model = %self.model, turn_count = turns.len()))]
    pub async fn generate(&self, turns: &[Turn]) -> TriptychResult<GeneratedDocument> {
        let completion = self.driver.complete(turns, &self.model).await?;

        if let Some(markup) = extract_markup(&completion) {
            debug!(markup_len = markup.len(), "Extracted markup on first attempt");
            return Ok(GeneratedDocument::extracted(markup));
        }

        warn!("No fenced markup in completion, retrying with corrective instruction");

        let mut corrected: Vec<Turn> = turns.to_vec();
        corrected.push(Turn::user(CORRECTIVE_PROMPT));

        let retry_completion = self.driver.complete(&corrected, &self.model).await?;

        if let Some(markup) = extract_markup(&retry_completion) {
            debug!(markup_len = markup.len(), "Extracted markup on corrective retry");
            return Ok(GeneratedDocument::extracted(markup));
        }

        warn!("Both attempts produced no fenced markup, returning raw fallback");
        Ok(GeneratedDocument::raw_fallback(retry_completion))
    }

    /// The model identifier this client generates with.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use triptych_core::Role;

    /// Mock backend that replays scripted completions and records the
    /// turns of every call.
    struct ScriptedDriver {
        completions: Mutex<Vec<String>>,
        calls: Mutex<Vec<Vec<Turn>>>,
    }

    impl ScriptedDriver {
        fn new(completions: Vec<&str>) -> Self {
            Self {
                completions: Mutex::new(completions.iter().map(|s| s.to_string()).collect()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Vec<Turn>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedDriver {
        async fn complete(&self, turns: &[Turn], _model: &str) -> TriptychResult<String> {
            self.calls.lock().unwrap().push(turns.to_vec());
            let mut completions = self.completions.lock().unwrap();
            Ok(completions.remove(0))
        }

        fn provider_name(&self) -> &'static str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn first_attempt_success_makes_one_call() {
        let driver = Arc::new(ScriptedDriver::new(vec!["```html\n<p>app</p>\n```"]));
        let generator = DocumentGenerator::new(Arc::clone(&driver), "test-model");

        let document = generator
            .generate(&[Turn::user("App idea: todo list")])
            .await
            .expect("generation succeeds");

        assert!(document.extracted);
        assert_eq!(document.markup, "<p>app</p>");
        assert_eq!(driver.calls().len(), 1);
    }

    #[tokio::test]
    async fn corrective_retry_appends_to_a_copy_only() {
        let driver = Arc::new(ScriptedDriver::new(vec![
            "Sorry, here is an explanation instead.",
            "```html\n<p>second try</p>\n```",
        ]));
        let generator = DocumentGenerator::new(Arc::clone(&driver), "test-model");

        let turns = vec![Turn::user("App idea: todo list")];
        let document = generator.generate(&turns).await.expect("retry succeeds");

        assert!(document.extracted);
        assert_eq!(document.markup, "<p>second try</p>");

        let calls = driver.calls();
        assert_eq!(calls.len(), 2);
        // First call sees the original turns untouched.
        assert_eq!(calls[0], turns);
        // Retry call carries exactly one extra corrective user turn.
        assert_eq!(calls[1].len(), 2);
        assert_eq!(calls[1][1].role, Role::User);
        assert_eq!(calls[1][1].content, CORRECTIVE_PROMPT);
        // The caller's turn list was never mutated.
        assert_eq!(turns.len(), 1);
    }

    #[tokio::test]
    async fn double_extraction_failure_yields_raw_fallback() {
        let driver = Arc::new(ScriptedDriver::new(vec![
            "no markup",
            "still no markup",
        ]));
        let generator = DocumentGenerator::new(Arc::clone(&driver), "test-model");

        let document = generator
            .generate(&[Turn::user("App idea: todo list")])
            .await
            .expect("fallback is not a hard error");

        assert!(!document.extracted);
        assert_eq!(document.markup, "still no markup");
        // Bounded retry: exactly two attempts, never a third.
        assert_eq!(driver.calls().len(), 2);
    }
}
