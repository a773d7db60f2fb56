//! X-Content-Type-Options
//!
//! Prevents browsers from MIME-sniffing a response away from the declared
//! content type.

use serde::{Deserialize, Serialize};

/// Content Type Options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentTypeOptions {
    /// Forbid MIME type sniffing
    NoSniff,
}

impl ContentTypeOptions {
    pub fn to_header_value(&self) -> String {
        match self {
            Self::NoSniff => "nosniff",
        }
        .to_string()
    }
}

impl Default for ContentTypeOptions {
    fn default() -> Self {
        Self::NoSniff
    }
}
