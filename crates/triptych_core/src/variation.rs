//! Generated application variations.

use crate::{GeneratedDocument, PreviewImage, Version};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One generated candidate application.
///
/// Variations are immutable after creation: a tweak produces a new
/// variation rather than mutating an existing one. A missing preview is
/// cosmetic only; the variation is still usable.
///
/// `children` is an owned subtree for grouping derived variations under
/// their parent. Current orchestration appends all variations to the flat
/// session list and always leaves it empty; it is an extension point for a
/// genuine tree of refinements.
///
/// # Examples
///
/// ```
/// use triptych_core::{GeneratedDocument, Variation, Version};
///
/// let variation = Variation::new(
///     1,
///     "Variation 1",
///     GeneratedDocument::extracted("<html></html>"),
///     None,
///     Version::initial(),
/// );
///
/// assert_eq!(*variation.id(), 1);
/// assert_eq!(variation.version().to_string(), "v1");
/// assert!(variation.children().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct Variation {
    /// Session-unique identifier
    id: u64,
    /// Human-readable name ("Variation 1", "Tweaked Variation 1 2", ...)
    name: String,
    /// The generated document
    document: GeneratedDocument,
    /// Rendered preview, absent when capture failed
    preview: Option<PreviewImage>,
    /// Structured version of this variation
    version: Version,
    /// Derived variations owned by this one (unused by current orchestration)
    children: Vec<Variation>,
}

impl Variation {
    /// Create a new variation with no children.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        document: GeneratedDocument,
        preview: Option<PreviewImage>,
        version: Version,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            document,
            preview,
            version,
            children: Vec::new(),
        }
    }
}
