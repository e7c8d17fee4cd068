//! Core data types for the Triptych variation orchestrator.
//!
//! This crate provides the conversation transcript and variation model
//! shared by the generation clients and the session orchestrator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod role;
mod transcript;
mod turn;
mod variation;
mod version;

pub use document::{GeneratedDocument, PreviewImage};
pub use role::Role;
pub use transcript::Transcript;
pub use turn::Turn;
pub use variation::Variation;
pub use version::Version;
