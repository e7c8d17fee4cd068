//! Session orchestration error types.

/// Session-level error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionErrorKind {
    /// An initial-set request carried an empty idea
    #[display("App idea must not be empty")]
    EmptyIdea,

    /// A tweak request carried empty tweak text
    #[display("Tweak text must not be empty")]
    EmptyTweak,

    /// A tweak was requested with no variation selected
    #[display("No variation selected")]
    NoSelection,

    /// A second top-level operation was requested while one is in flight
    #[display("Session is busy with another operation")]
    Busy,
}

/// Session error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at {}:{}", kind, file, line)]
pub struct SessionError {
    /// The specific error kind
    pub kind: SessionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError from a kind at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use triptych_error::{SessionError, SessionErrorKind};
    ///
    /// let err = SessionError::new(SessionErrorKind::EmptyIdea);
    /// assert!(format!("{}", err).contains("empty"));
    /// ```
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
