//! Content Security Policy (CSP) configuration
//!
//! CSP helps prevent XSS attacks by declaring which dynamic resources are
//! allowed to load. Directives are emitted in the order they were configured.

use serde::{Deserialize, Serialize};

/// Content Security Policy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CspConfig {
    /// Ordered CSP directives; re-setting a directive replaces it in place
    pub directives: Vec<(String, Vec<String>)>,

    /// Report violations only (doesn't enforce)
    pub report_only: bool,
}

impl CspConfig {
    /// Create a new CSP configuration with no directives
    pub fn new() -> Self {
        Self {
            directives: Vec::new(),
            report_only: false,
        }
    }

    /// Add a directive
    pub fn directive(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        let name = name.into();
        if let Some(entry) = self.directives.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = values;
        } else {
            self.directives.push((name, values));
        }
        self
    }

    /// Set default-src directive
    pub fn default_src(self, sources: Vec<String>) -> Self {
        self.directive("default-src", sources)
    }

    /// Set script-src directive
    pub fn script_src(self, sources: Vec<String>) -> Self {
        self.directive("script-src", sources)
    }

    /// Set style-src directive
    pub fn style_src(self, sources: Vec<String>) -> Self {
        self.directive("style-src", sources)
    }

    /// Set img-src directive
    pub fn img_src(self, sources: Vec<String>) -> Self {
        self.directive("img-src", sources)
    }

    /// Set font-src directive
    pub fn font_src(self, sources: Vec<String>) -> Self {
        self.directive("font-src", sources)
    }

    /// Set connect-src directive
    pub fn connect_src(self, sources: Vec<String>) -> Self {
        self.directive("connect-src", sources)
    }

    /// Set frame-ancestors directive
    pub fn frame_ancestors(self, sources: Vec<String>) -> Self {
        self.directive("frame-ancestors", sources)
    }

    /// Set base-uri directive
    pub fn base_uri(self, sources: Vec<String>) -> Self {
        self.directive("base-uri", sources)
    }

    /// Set form-action directive
    pub fn form_action(self, sources: Vec<String>) -> Self {
        self.directive("form-action", sources)
    }

    /// Enable report-only mode
    pub fn report_only(mut self, enabled: bool) -> Self {
        self.report_only = enabled;
        self
    }

    /// True when no directives are configured
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Header name this policy is emitted under
    pub fn header_name(&self) -> &'static str {
        if self.report_only {
            "Content-Security-Policy-Report-Only"
        } else {
            "Content-Security-Policy"
        }
    }

    /// Convert to header value
    pub fn to_header_value(&self) -> String {
        let mut parts = Vec::new();

        for (directive, values) in &self.directives {
            if values.is_empty() {
                parts.push(directive.clone());
            } else {
                parts.push(format!("{} {}", directive, values.join(" ")));
            }
        }

        parts.join("; ")
    }
}

impl Default for CspConfig {
    fn default() -> Self {
        Self::new()
            .default_src(vec!["'self'".to_string()])
            .script_src(vec!["'self'".to_string()])
            .style_src(vec!["'self'".to_string(), "'unsafe-inline'".to_string()])
            .img_src(vec!["'self'".to_string(), "data:".to_string(), "https:".to_string()])
            .font_src(vec!["'self'".to_string()])
            .connect_src(vec!["'self'".to_string()])
            .frame_ancestors(vec!["'none'".to_string()])
            .base_uri(vec!["'self'".to_string()])
            .form_action(vec!["'self'".to_string()])
    }
}
