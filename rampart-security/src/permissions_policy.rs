//! Permissions Policy
//!
//! Controls which browser features a document is allowed to use. Disabling
//! unneeded APIs shrinks the attack surface of injected markup.

use serde::{Deserialize, Serialize};

/// Permissions Policy configuration
///
/// Directives are emitted in the order they were added; re-adding a feature
/// replaces its allow-list in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionsPolicy {
    /// Ordered (feature, allow-list) directives
    pub directives: Vec<(String, Vec<String>)>,
}

impl PermissionsPolicy {
    /// Create a policy with no directives
    pub fn new() -> Self {
        Self {
            directives: Vec::new(),
        }
    }

    /// Disable a feature entirely (empty allow-list)
    pub fn disable(self, feature: impl Into<String>) -> Self {
        self.set(feature.into(), Vec::new())
    }

    /// Allow a feature for the given origins
    ///
    /// Origins are emitted verbatim; use `self` for the document's own origin
    /// and quoted URLs for everything else (`"https://example.com"`).
    pub fn allow(self, feature: impl Into<String>, origins: Vec<String>) -> Self {
        self.set(feature.into(), origins)
    }

    fn set(mut self, feature: String, allowlist: Vec<String>) -> Self {
        if let Some(entry) = self.directives.iter_mut().find(|(name, _)| *name == feature) {
            entry.1 = allowlist;
        } else {
            self.directives.push((feature, allowlist));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Convert to header value, e.g. `geolocation=(), camera=(self)`
    pub fn to_header_value(&self) -> String {
        let parts: Vec<String> = self
            .directives
            .iter()
            .map(|(feature, allowlist)| format!("{}=({})", feature, allowlist.join(" ")))
            .collect();

        parts.join(", ")
    }
}

impl Default for PermissionsPolicy {
    /// Disable the browser APIs this project never grants to page content
    fn default() -> Self {
        Self::new()
            .disable("geolocation")
            .disable("microphone")
            .disable("camera")
            .disable("payment")
            .disable("usb")
            .disable("magnetometer")
            .disable("accelerometer")
            .disable("gyroscope")
    }
}
