//! X-XSS-Protection
//!
//! Enables the Cross-site scripting (XSS) filter built into browsers.

use serde::{Deserialize, Serialize};

/// XSS Filter options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum XssFilter {
    /// Disable XSS filtering
    Disabled,
    /// Enable XSS filtering
    Enabled,
    /// Enable XSS filtering and block page if attack detected
    EnabledBlock,
}

impl XssFilter {
    pub fn to_header_value(&self) -> String {
        match self {
            Self::Disabled => "0",
            Self::Enabled => "1",
            Self::EnabledBlock => "1; mode=block",
        }
        .to_string()
    }
}

impl Default for XssFilter {
    fn default() -> Self {
        Self::EnabledBlock
    }
}
