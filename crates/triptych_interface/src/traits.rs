//! Trait definitions for generation, capture, and notification backends.

use crate::Playback;
use async_trait::async_trait;
use triptych_core::{PreviewImage, Turn};
use triptych_error::TriptychResult;

/// A text-generation backend driven by a conversation transcript.
///
/// Implementations send the ordered turns plus a model identifier and
/// return the single textual completion.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the given conversation turns.
    async fn complete(&self, turns: &[Turn], model: &str) -> TriptychResult<String>;

    /// Provider name (e.g., "openrouter").
    fn provider_name(&self) -> &'static str;
}

/// A rendering backend that captures a document as a preview image.
///
/// Capture failures are recoverable: a variation without a preview is
/// still usable.
#[async_trait]
pub trait CaptureBackend: Send + Sync {
    /// Render the document markup and return the captured image.
    async fn capture(&self, markup: &str) -> TriptychResult<PreviewImage>;
}

/// A voice-synthesis backend for short status announcements.
///
/// Playback starts as soon as the audio is available; the returned
/// [`Playback`] handle lets the caller stop it early.
#[async_trait]
pub trait Announcer: Send + Sync {
    /// Synthesize and start playing the given status text.
    async fn speak(&self, text: &str) -> TriptychResult<Playback>;
}
