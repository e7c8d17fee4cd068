//! Voice notification error types.

/// Notification-specific error conditions.
///
/// Notification failures are always swallowed by the orchestrator; they
/// skip a status message but never abort an operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NotificationErrorKind {
    /// The voice backend HTTP call itself failed
    #[display("Voice request failed: {}", _0)]
    Request(String),

    /// The voice backend returned a non-success status
    #[display("Voice API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message body
        message: String,
    },

    /// The audio body could not be read
    #[display("Voice response body unreadable: {}", _0)]
    Body(String),

    /// Status text generation failed before synthesis
    #[display("Status message generation failed: {}", _0)]
    StatusText(String),
}

/// Notification error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Notification Error: {} at {}:{}", kind, file, line)]
pub struct NotificationError {
    /// The specific error kind
    pub kind: NotificationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl NotificationError {
    /// Create a new NotificationError from a kind at the current location.
    #[track_caller]
    pub fn new(kind: NotificationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
