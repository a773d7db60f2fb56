use crate::error::{Result, XssError};
use ammonia::Builder;
use std::collections::HashSet;

/// Allow-list HTML sanitizer for rich-text fields
#[derive(Debug, Clone)]
pub struct HtmlSanitizer {
    allowed_tags: Vec<String>,
    allowed_attributes: Vec<String>,
    strip_comments: bool,
}

impl HtmlSanitizer {
    /// Create a sanitizer allowing only inline formatting, no attributes
    pub fn new() -> Self {
        Self {
            allowed_tags: vec!["p", "br", "strong", "em", "u", "b", "i"]
                .into_iter()
                .map(String::from)
                .collect(),
            allowed_attributes: Vec::new(),
            strip_comments: true,
        }
    }

    /// Create a sanitizer that also allows links, lists, and headings
    pub fn permissive() -> Self {
        Self {
            allowed_tags: vec![
                "a", "b", "br", "code", "div", "em", "h1", "h2", "h3", "h4", "h5", "h6", "i",
                "li", "ol", "p", "pre", "span", "strong", "u", "ul",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            allowed_attributes: vec!["href", "title", "class", "id"]
                .into_iter()
                .map(String::from)
                .collect(),
            strip_comments: true,
        }
    }

    /// Set allowed HTML tags
    pub fn with_allowed_tags(mut self, tags: Vec<String>) -> Self {
        self.allowed_tags = tags;
        self
    }

    /// Set allowed attributes
    pub fn with_allowed_attributes(mut self, attributes: Vec<String>) -> Self {
        self.allowed_attributes = attributes;
        self
    }

    /// Set whether to strip HTML comments
    pub fn with_strip_comments(mut self, strip: bool) -> Self {
        self.strip_comments = strip;
        self
    }

    /// Sanitize an HTML string, keeping only allow-listed tags and attributes
    pub fn sanitize(&self, html: &str) -> String {
        let mut builder = Builder::default();

        builder.tags(self.allowed_tags.iter().map(|s| s.as_str()).collect());

        let attrs: HashSet<&str> = self.allowed_attributes.iter().map(|s| s.as_str()).collect();
        builder.generic_attributes(attrs);

        builder.strip_comments(self.strip_comments);

        builder.clean(html).to_string()
    }

    /// Sanitize and flag inputs the cleaner mostly discarded
    ///
    /// Losing more than a third of the input length usually means it was
    /// dominated by disallowed markup.
    pub fn sanitize_checked(&self, html: &str) -> Result<String> {
        let sanitized = self.sanitize(html);

        if sanitized.len() < html.len() * 2 / 3 {
            return Err(XssError::SuspiciousContent(
                "Input contains suspicious HTML".to_string(),
            ));
        }

        Ok(sanitized)
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new()
    }
}
