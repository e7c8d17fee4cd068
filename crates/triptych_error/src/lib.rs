//! Error types for the Triptych variation orchestrator.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use triptych_error::{TriptychResult, ConfigError};
//!
//! fn load_settings() -> TriptychResult<String> {
//!     Err(ConfigError::new("Missing field: document_model"))?
//! }
//!
//! match load_settings() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capture;
mod config;
mod error;
mod generation;
mod notification;
mod session;

pub use capture::{CaptureError, CaptureErrorKind};
pub use config::ConfigError;
pub use error::{TriptychError, TriptychErrorKind, TriptychResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use notification::{NotificationError, NotificationErrorKind};
pub use session::{SessionError, SessionErrorKind};
