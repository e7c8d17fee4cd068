//! Generated document and preview image types.

use serde::{Deserialize, Serialize};

/// A generated application document.
///
/// `extracted` distinguishes a document pulled from a fenced markup block
/// from the degraded fallback case where the raw completion is carried
/// verbatim because neither generation attempt produced a fence.
///
/// # Examples
///
/// ```
/// use triptych_core::GeneratedDocument;
///
/// let doc = GeneratedDocument::extracted("<html></html>");
/// assert!(doc.extracted);
///
/// let fallback = GeneratedDocument::raw_fallback("no fence here");
/// assert!(!fallback.extracted);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    /// The document markup (or raw completion text for fallbacks)
    pub markup: String,
    /// Whether the markup came from a fenced block
    pub extracted: bool,
}

impl GeneratedDocument {
    /// A document successfully extracted from a fenced block.
    pub fn extracted(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            extracted: true,
        }
    }

    /// The raw completion carried as a degraded fallback.
    pub fn raw_fallback(raw: impl Into<String>) -> Self {
        Self {
            markup: raw.into(),
            extracted: false,
        }
    }
}

/// An opaque preview image produced by the capture backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewImage {
    /// MIME type of the image, when the backend reports one
    pub mime: Option<String>,
    /// Binary image data
    pub data: Vec<u8>,
}

impl PreviewImage {
    /// Create a preview image from backend bytes.
    pub fn new(mime: Option<String>, data: Vec<u8>) -> Self {
        Self { mime, data }
    }
}
