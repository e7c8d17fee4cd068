//! Generation backend error types.

/// Generation-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// API key not found in environment
    #[display("Generation API key environment variable not set: {}", _0)]
    MissingApiKey(String),

    /// The backend HTTP call itself failed
    #[display("Generation request failed: {}", _0)]
    Request(String),

    /// The backend returned a non-success status
    #[display("Generation API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message body
        message: String,
    },

    /// The completion payload could not be parsed
    #[display("Generation response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// The completion contained no choices/text
    #[display("Generation response was empty")]
    EmptyCompletion,

    /// Both extraction attempts failed to find fenced markup
    #[display("No fenced markup found after {} attempts", attempts)]
    ExtractionFailed {
        /// Number of completion attempts made
        attempts: u32,
    },
}

/// Generation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at {}:{}", kind, file, line)]
pub struct GenerationError {
    /// The specific error kind
    pub kind: GenerationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError from a kind at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use triptych_error::{GenerationError, GenerationErrorKind};
    ///
    /// let err = GenerationError::new(GenerationErrorKind::EmptyCompletion);
    /// assert!(format!("{}", err).contains("empty"));
    /// ```
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
