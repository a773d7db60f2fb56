//! Suspicious-input screening middleware
//!
//! Watches query and form parameters for common XSS probe fragments and logs
//! a warning for each hit. Observation only: the request is never blocked or
//! modified, so false positives cost nothing but a log line.

use async_trait::async_trait;
use rampart_core::{Error, HttpRequest, HttpResponse, Middleware, Next};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Configuration for suspicious-input screening
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Case-insensitive substrings that mark a value as suspicious
    pub patterns: Vec<String>,

    /// Maximum number of characters of the value included in the log
    pub max_preview: usize,

    /// Path prefixes to skip entirely
    pub exclude_paths: Vec<String>,
}

impl ScreeningConfig {
    pub fn new() -> Self {
        Self {
            patterns: [
                "<script",
                "javascript:",
                "onerror=",
                "onclick=",
                "onload=",
                "<iframe",
                "<object",
                "<embed",
                "data:text/html",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            max_preview: 100,
            exclude_paths: Vec::new(),
        }
    }

    /// Replace the pattern list
    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = patterns;
        self
    }

    /// Set the logged value preview length, in characters
    pub fn with_max_preview(mut self, max_preview: usize) -> Self {
        self.max_preview = max_preview;
        self
    }

    /// Set path prefixes excluded from screening
    pub fn with_exclude_paths(mut self, paths: Vec<String>) -> Self {
        self.exclude_paths = paths;
        self
    }
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn preview(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// Middleware that logs suspicious request parameters without blocking them
#[derive(Clone)]
pub struct InputScreening {
    config: Arc<ScreeningConfig>,
}

impl InputScreening {
    pub fn new(config: ScreeningConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Check whether screening applies to this path
    pub fn applies_to(&self, path: &str) -> bool {
        !self
            .config
            .exclude_paths
            .iter()
            .any(|excluded| path.starts_with(excluded))
    }

    /// Case-insensitive test against every configured pattern
    pub fn matches(&self, value: &str) -> bool {
        let lower = value.to_lowercase();
        self.config
            .patterns
            .iter()
            .any(|pattern| lower.contains(&pattern.to_lowercase()))
    }

    /// Walk the request's parameters and log a warning for each match
    ///
    /// Form fields are only inspected on form-encoded requests; a body that
    /// does not parse is simply not screened.
    pub fn screen(&self, req: &HttpRequest) {
        if !self.applies_to(&req.path) {
            return;
        }

        let client_ip = req.client_ip().unwrap_or_else(|| "unknown".to_string());

        for (name, value) in &req.query_params {
            if self.matches(value) {
                warn!(
                    target: "security",
                    param = %name,
                    value = %preview(value, self.config.max_preview),
                    client_ip = %client_ip,
                    path = %req.path,
                    source = "query",
                    "Suspicious request parameter detected"
                );
            }
        }

        if req.is_form() {
            if let Ok(form) = req.form_params() {
                for (name, value) in &form {
                    if self.matches(value) {
                        warn!(
                            target: "security",
                            param = %name,
                            value = %preview(value, self.config.max_preview),
                            client_ip = %client_ip,
                            path = %req.path,
                            source = "form",
                            "Suspicious request parameter detected"
                        );
                    }
                }
            }
        }
    }
}

impl Default for InputScreening {
    fn default() -> Self {
        Self::new(ScreeningConfig::default())
    }
}

#[async_trait]
impl Middleware for InputScreening {
    async fn handle(&self, req: HttpRequest, next: Next) -> Result<HttpResponse, Error> {
        self.screen(&req);
        next(req).await
    }
}
