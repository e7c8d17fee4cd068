//! Capture backend error types.

/// Capture-specific error conditions.
///
/// Capture failures are always recoverable: a variation without a preview
/// image is still usable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CaptureErrorKind {
    /// The backend HTTP call itself failed
    #[display("Capture request failed: {}", _0)]
    Request(String),

    /// The backend returned a non-success status
    #[display("Capture API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message body
        message: String,
    },

    /// The response body could not be read
    #[display("Capture response body unreadable: {}", _0)]
    Body(String),
}

/// Capture error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Capture Error: {} at {}:{}", kind, file, line)]
pub struct CaptureError {
    /// The specific error kind
    pub kind: CaptureErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl CaptureError {
    /// Create a new CaptureError from a kind at the current location.
    #[track_caller]
    pub fn new(kind: CaptureErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
