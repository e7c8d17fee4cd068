//! Triptych - app-idea variation generation.
//!
//! Triptych turns a short natural-language app idea into three runnable
//! single-file HTML mini applications, renders a preview of each, and
//! refines them through sequential tweak rounds driven by one shared
//! append-only conversation transcript.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use triptych::{OpenRouterClient, ScreenshotClient, Session, SessionConfig, VoiceClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = Session::new(
//!         Arc::new(OpenRouterClient::new()?),
//!         Arc::new(ScreenshotClient::new()),
//!         Arc::new(VoiceClient::new()),
//!         SessionConfig::load()?,
//!     );
//!
//!     let variations = session.generate_initial_set("todo list").await?;
//!     println!("{} variations", variations.len());
//!
//!     let tweaked = session.apply_tweak("make it dark mode").await?;
//!     println!("{} tweaked variations", tweaked.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Triptych is organized as a workspace with focused crates:
//!
//! - `triptych_core` - transcript and variation data model
//! - `triptych_interface` - backend trait seams
//! - `triptych_error` - error types
//! - `triptych_backends` - HTTP clients (generation, capture, voice)
//! - `triptych_session` - the variation orchestrator
//!
//! This crate (`triptych`) re-exports everything for convenience.

#![forbid(unsafe_code)]

pub use triptych_backends::{OpenRouterClient, ScreenshotClient, VoiceClient};
pub use triptych_core::{
    GeneratedDocument, PreviewImage, Role, Transcript, Turn, Variation, Version,
};
pub use triptych_error::{
    CaptureError, CaptureErrorKind, ConfigError, GenerationError, GenerationErrorKind,
    NotificationError, NotificationErrorKind, SessionError, SessionErrorKind, TriptychError,
    TriptychErrorKind, TriptychResult,
};
pub use triptych_interface::{Announcer, CaptureBackend, Playback, TextGenerator};
pub use triptych_session::{
    extract_markup, DocumentGenerator, Session, SessionConfig, SessionState, CORRECTIVE_PROMPT,
    INITIAL_VARIATIONS, TWEAK_ROUNDS,
};
