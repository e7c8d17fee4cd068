//! Trait definitions for the backends Triptych orchestrates.
//!
//! The session orchestrator is generic over these seams, so production
//! HTTP clients and test mocks are interchangeable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod playback;
mod traits;

pub use playback::Playback;
pub use traits::{Announcer, CaptureBackend, TextGenerator};
