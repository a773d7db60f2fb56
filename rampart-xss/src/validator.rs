use crate::error::{Result, XssError};

/// Dangerous tag openings and the reasons reported for them
const DANGEROUS_TAGS: [(&str, &str); 6] = [
    ("<script", "<script> tag"),
    ("<iframe", "<iframe> tag"),
    ("<object", "<object> tag"),
    ("<embed", "<embed> tag"),
    ("<link", "<link> tag"),
    ("<style", "<style> tag"),
];

/// Inline event handler names
const EVENT_HANDLERS: [(&str, &str); 6] = [
    ("onclick", "onclick event handler"),
    ("onerror", "onerror event handler"),
    ("onload", "onload event handler"),
    ("onmouseover", "onmouseover event handler"),
    ("onfocus", "onfocus event handler"),
    ("onblur", "onblur event handler"),
];

/// Threat classifier for untrusted text
///
/// A substring lint, not a proof of safety: a `None` result only means none
/// of the known patterns matched. The input is never modified.
pub struct ContentValidator;

impl ContentValidator {
    /// Name the first threat pattern found in the text
    pub fn classify(text: &str) -> Option<&'static str> {
        if text.is_empty() {
            return None;
        }

        let lower = text.to_lowercase();

        for (needle, reason) in DANGEROUS_TAGS {
            if lower.contains(needle) {
                return Some(reason);
            }
        }

        for (needle, reason) in EVENT_HANDLERS {
            if lower.contains(needle) {
                return Some(reason);
            }
        }

        if lower.contains("javascript:") {
            return Some("javascript: pseudo-protocol");
        }

        if lower.contains("data:text/html") || lower.contains("data:image/svg+xml") {
            return Some("dangerous data: URI");
        }

        None
    }

    /// True when no known threat pattern matches
    pub fn is_safe(text: &str) -> bool {
        Self::classify(text).is_none()
    }

    /// Validate text, returning an error naming the first threat found
    pub fn validate(text: &str) -> Result<()> {
        match Self::classify(text) {
            Some(reason) => Err(XssError::MaliciousContent(reason.to_string())),
            None => Ok(()),
        }
    }
}
