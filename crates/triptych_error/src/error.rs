//! Top-level error wrapper types.

use crate::{
    CaptureError, ConfigError, GenerationError, NotificationError, SessionError,
};

/// The foundation error enum for the Triptych workspace.
///
/// # Examples
///
/// ```
/// use triptych_error::{TriptychError, ConfigError};
///
/// let config_err = ConfigError::new("Missing field: document_model");
/// let err: TriptychError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TriptychErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Text-generation backend error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Preview capture backend error
    #[from(CaptureError)]
    Capture(CaptureError),
    /// Voice notification backend error
    #[from(NotificationError)]
    Notification(NotificationError),
    /// Session orchestration error
    #[from(SessionError)]
    Session(SessionError),
}

/// Triptych error with kind discrimination.
///
/// # Examples
///
/// ```
/// use triptych_error::{TriptychResult, SessionError, SessionErrorKind};
///
/// fn might_fail() -> TriptychResult<()> {
///     Err(SessionError::new(SessionErrorKind::Busy))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Triptych Error: {}", _0)]
pub struct TriptychError(Box<TriptychErrorKind>);

impl TriptychError {
    /// Create a new error from a kind.
    pub fn new(kind: TriptychErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TriptychErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to TriptychErrorKind
impl<T> From<T> for TriptychError
where
    T: Into<TriptychErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Triptych operations.
///
/// # Examples
///
/// ```
/// use triptych_error::{TriptychResult, ConfigError};
///
/// fn load_settings() -> TriptychResult<String> {
///     Err(ConfigError::new("Failed to parse configuration"))?
/// }
/// ```
pub type TriptychResult<T> = std::result::Result<T, TriptychError>;
