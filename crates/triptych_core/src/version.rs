//! Structured variation versions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum characters of tweak text carried into a version label.
const SUMMARY_LIMIT: usize = 20;

/// A structured variation version.
///
/// The version carries a numeric major counter and an optional tweak
/// summary; the display label (`"v1"`, `"v3 - make it dark mode"`) is
/// derived at presentation time. Ordering is numeric by major version, so
/// `v10` sorts after `v9` rather than between `v1` and `v2`.
///
/// # Examples
///
/// ```
/// use triptych_core::Version;
///
/// let initial = Version::initial();
/// assert_eq!(initial.to_string(), "v1");
///
/// let tweaked = Version::tweak(3, "make it dark mode");
/// assert_eq!(tweaked.to_string(), "v3 - make it dark mode");
/// assert!(initial < tweaked);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    major: u32,
    tweak_summary: Option<String>,
}

impl Version {
    /// The version of an initial variation, displayed as `"v1"`.
    pub fn initial() -> Self {
        Self {
            major: 1,
            tweak_summary: None,
        }
    }

    /// A tweak-round version labelled with a summary of the tweak text.
    ///
    /// The summary is truncated to 20 characters plus an ellipsis for the
    /// label only; the full tweak text still drives the prompt.
    pub fn tweak(major: u32, tweak_text: &str) -> Self {
        let summary = if tweak_text.chars().count() > SUMMARY_LIMIT {
            let head: String = tweak_text.chars().take(SUMMARY_LIMIT).collect();
            format!("{head}...")
        } else {
            tweak_text.to_string()
        };
        Self {
            major,
            tweak_summary: Some(summary),
        }
    }

    /// The numeric major version.
    pub fn major(&self) -> u32 {
        self.major
    }

    /// The truncated tweak summary, absent for initial versions.
    pub fn tweak_summary(&self) -> Option<&str> {
        self.tweak_summary.as_deref()
    }

    /// The major version the next tweak round should use.
    pub fn next_major(&self) -> u32 {
        self.major + 1
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tweak_summary {
            Some(summary) => write!(f, "v{} - {}", self.major, summary),
            None => write!(f, "v{}", self.major),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_label() {
        assert_eq!(Version::initial().to_string(), "v1");
        assert_eq!(Version::initial().major(), 1);
    }

    #[test]
    fn short_tweak_text_is_not_truncated() {
        let version = Version::tweak(3, "make it dark mode");
        assert_eq!(version.to_string(), "v3 - make it dark mode");
    }

    #[test]
    fn long_tweak_text_is_truncated_with_ellipsis() {
        let version = Version::tweak(2, "add a very long descriptive note");
        assert_eq!(version.to_string(), "v2 - add a very long desc...");
        assert_eq!(version.tweak_summary(), Some("add a very long desc..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let version = Version::tweak(2, "ääääääääääääääääääääää");
        assert_eq!(version.tweak_summary().unwrap().chars().count(), 23);
    }

    #[test]
    fn ordering_is_numeric_not_lexicographic() {
        let v2 = Version::tweak(2, "fix colors");
        let v10 = Version::tweak(10, "polish");
        assert!(v2 < v10);

        let mut versions = vec![v10.clone(), Version::initial(), v2.clone()];
        versions.sort();
        assert_eq!(versions, vec![Version::initial(), v2, v10]);
    }

    #[test]
    fn next_major_increments() {
        assert_eq!(Version::initial().next_major(), 2);
        assert_eq!(Version::tweak(2, "fix colors").next_major(), 3);
    }
}
