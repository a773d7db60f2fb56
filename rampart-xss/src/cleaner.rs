//! Plain-text input cleaning
//!
//! For fields that must carry no markup at all (titles, names, search
//! terms). Rich-text fields belong to [`crate::sanitizer`] instead.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

// Character sequences that can survive tag stripping, removed case-insensitively
static DENYLIST: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)javascript:",
        r"(?i)on\w+\s*=",
        r"(?i)<\s*script",
        r"(?i)<\s*iframe",
        r"(?i)<\s*object",
        r"(?i)<\s*embed",
        r"(?i)<\s*link",
        r"(?i)<\s*style",
        r"(?i)expression\s*\(",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Remove HTML tags, keeping their inner text
///
/// Stripping repeats until no tag remains, so fragments split across removed
/// tags (`<<b>script>`) cannot recombine into a new tag.
pub fn strip_tags(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let stripped = TAG_PATTERN.replace_all(&current, "").into_owned();
        if stripped == current {
            return stripped;
        }
        current = stripped;
    }
}

/// Cleaner for plain-text input fields
#[derive(Debug, Clone)]
pub struct InputCleaner {
    /// Maximum length of the cleaned value, in characters
    pub max_length: Option<usize>,
}

impl InputCleaner {
    pub fn new() -> Self {
        Self { max_length: None }
    }

    /// Truncate cleaned values to `max_length` characters
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Strip tags, delete denylisted sequences, truncate, and trim
    pub fn clean(&self, text: &str) -> String {
        let mut cleaned = strip_tags(text);

        for pattern in DENYLIST.iter() {
            cleaned = pattern.replace_all(&cleaned, "").into_owned();
        }

        if let Some(max_length) = self.max_length {
            if cleaned.chars().count() > max_length {
                cleaned = cleaned.chars().take(max_length).collect();
            }
        }

        cleaned.trim().to_string()
    }
}

impl Default for InputCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Clean a value with the default settings (no length limit)
pub fn clean_input(text: &str) -> String {
    InputCleaner::default().clean(text)
}
