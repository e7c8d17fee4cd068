//! Variation orchestration core for Triptych.
//!
//! This crate coordinates transcript growth, generation with bounded
//! corrective retry, preview capture, fire-and-forget voice notifications,
//! and the version-grouped variation history:
//!
//! - [`extract_markup`] - fenced-markup extraction from raw completions
//! - [`DocumentGenerator`] - generation client with one corrective retry
//! - [`Session`] - the orchestrator exposing
//!   [`generate_initial_set`](Session::generate_initial_set) and
//!   [`apply_tweak`](Session::apply_tweak)
//! - [`SessionConfig`] - model identifiers and pacing configuration

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod extraction;
mod generation;
mod notify;
mod session;

pub use config::SessionConfig;
pub use extraction::extract_markup;
pub use generation::{DocumentGenerator, CORRECTIVE_PROMPT};
pub use session::{Session, SessionState, INITIAL_VARIATIONS, TWEAK_ROUNDS};
