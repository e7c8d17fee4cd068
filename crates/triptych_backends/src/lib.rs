//! HTTP backend clients for Triptych.
//!
//! Production implementations of the [`triptych_interface`] traits:
//!
//! - [`OpenRouterClient`] - OpenAI-compatible chat completions
//! - [`ScreenshotClient`] - document markup to PNG preview
//! - [`VoiceClient`] - status text to spoken audio
//!
//! All clients read their endpoints and credentials from the environment
//! and surface failures through the workspace error taxonomy.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openrouter;
mod screenshot;
mod voice;

pub use openrouter::{OpenRouterClient, OPENROUTER_API_KEY};
pub use screenshot::ScreenshotClient;
pub use voice::VoiceClient;
