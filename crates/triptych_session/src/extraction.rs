//! Fenced-markup extraction from LLM completions.
//!
//! Completions usually wrap the generated document in a ```` ```html ````
//! code fence surrounded by explanatory prose. Absence of a fence is a
//! normal outcome, not an error; it triggers the corrective retry in the
//! generation client.

use regex::Regex;
use std::sync::LazyLock;

// Non-greedy so only the first fenced block is captured when the
// completion contains several.
static HTML_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```html\s*(.*?)\s*```").expect("valid html fence pattern")
});

/// Extract the first ```` ```html ```` fenced block from a completion.
///
/// Returns the trimmed inner content, or `None` when the completion
/// contains no such fence. The fence may appear anywhere in the text.
///
/// # Examples
///
/// ```
/// use triptych_session::extract_markup;
///
/// let completion = "Here you go:\n```html\n<html></html>\n```\nEnjoy!";
/// assert_eq!(extract_markup(completion), Some("<html></html>".to_string()));
///
/// assert_eq!(extract_markup("no fence here"), None);
/// ```
pub fn extract_markup(raw: &str) -> Option<String> {
    HTML_FENCE
        .captures(raw)
        .map(|captures| captures[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_fence_anywhere_in_text() {
        let raw = "Some prose first.\n\n```html\n<!DOCTYPE html>\n<html><body>hi</body></html>\n```\n\nAnd a closing remark.";
        let markup = extract_markup(raw).expect("fence present");
        assert!(markup.starts_with("<!DOCTYPE html>"));
        assert!(markup.ends_with("</html>"));
    }

    #[test]
    fn captures_only_the_first_of_multiple_fences() {
        let raw = "```html\n<p>first</p>\n```\nmore text\n```html\n<p>second</p>\n```";
        assert_eq!(extract_markup(raw), Some("<p>first</p>".to_string()));
    }

    #[test]
    fn absence_is_none_not_an_error() {
        assert_eq!(extract_markup("I cannot help with that."), None);
        assert_eq!(extract_markup(""), None);
    }

    #[test]
    fn plain_fence_without_language_tag_is_not_matched() {
        assert_eq!(extract_markup("```\n<p>hi</p>\n```"), None);
    }

    #[test]
    fn extraction_is_idempotent() {
        let raw = "```html\n<div>app</div>\n```";
        let first = extract_markup(raw);
        let second = extract_markup(raw);
        assert_eq!(first, second);
        assert_eq!(first, Some("<div>app</div>".to_string()));
    }

    #[test]
    fn inner_content_is_trimmed() {
        let raw = "```html   \n\n  <span>x</span>  \n\n```";
        assert_eq!(extract_markup(raw), Some("<span>x</span>".to_string()));
    }
}
