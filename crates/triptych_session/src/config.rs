//! Session configuration.
//!
//! Configuration is layered: bundled defaults (include_str! from
//! triptych.toml), an optional user triptych.toml in the working
//! directory, and `TRIPTYCH_*` environment variables, later sources
//! taking precedence.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use triptych_error::{ConfigError, TriptychError, TriptychResult};
use tracing::debug;

/// Configuration for a variation session.
///
/// The two model identifiers separate concerns: `document_model` writes
/// the application documents, `status_model` writes the short friendly
/// status messages. Neither is hardcoded in the orchestrator.
///
/// # Examples
///
/// ```
/// use triptych_session::SessionConfig;
///
/// let config = SessionConfig::default();
/// assert!(!config.document_model.is_empty());
/// assert_ne!(config.document_model, config.status_model);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Model identifier for application-document generation
    pub document_model: String,
    /// Model identifier for status/narrative messages
    pub status_model: String,
    /// Delay between sequential tweak rounds, in milliseconds
    pub pacing_ms: u64,
    /// Whether spoken status notifications are produced
    pub voice_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            document_model: "anthropic/claude-3.5-sonnet".to_string(),
            status_model: "google/gemini-flash-1.5".to_string(),
            pacing_ms: 500,
            voice_enabled: true,
        }
    }
}

impl SessionConfig {
    /// Load configuration with precedence: env > current dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a source fails to parse or a field has
    /// the wrong type.
    pub fn load() -> TriptychResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../triptych.toml");

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name("triptych").required(false))
            .add_source(Environment::with_prefix("TRIPTYCH"))
            .build()
            .map_err(|e| {
                TriptychError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                TriptychError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// The pacing delay between tweak rounds.
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    /// A copy of this configuration with pacing disabled, for
    /// non-interactive contexts.
    pub fn without_pacing(mut self) -> Self {
        self.pacing_ms = 0;
        self
    }
}
