//! # Rampart XSS Protection
//!
//! Cross-Site Scripting (XSS) protection utilities for rampart applications.
//!
//! ## Features
//!
//! - ✅ **Input Cleaning** - Strip tags and dangerous sequences from plain text
//! - ✅ **HTML Sanitization** - Allow-list cleaning for rich-text fields
//! - ✅ **Content Escaping** - HTML entity and JavaScript string escaping
//! - ✅ **URL Validation** - Reject `javascript:` and friends
//! - ✅ **Threat Classification** - Name the pattern that makes text unsafe
//! - ✅ **Input Screening** - Middleware that logs suspicious parameters
//!
//! ## Quick Start
//!
//! ```rust
//! use rampart_xss::{clean_input, Escape, HtmlSanitizer};
//!
//! // Clean a plain-text field
//! let title = clean_input("<script>alert('XSS')</script>Book Title");
//! assert_eq!(title, "alert('XSS')Book Title");
//!
//! // Sanitize rich text, keeping allowed formatting
//! let sanitizer = HtmlSanitizer::new();
//! let clean = sanitizer.sanitize("<p>Hello</p><script>alert('XSS')</script>");
//! assert!(!clean.contains("script"));
//! assert!(clean.contains("<p>Hello</p>"));
//!
//! // Escape for HTML output
//! let encoded = Escape::html("<script>alert('XSS')</script>");
//! assert!(encoded.contains("&lt;"));
//! ```
//!
//! ## Input Screening
//!
//! The screening middleware watches query and form parameters for common XSS
//! probe fragments and logs a warning under the `security` target. It never
//! blocks a request; pair it with output escaping rather than relying on it.
//!
//! ```rust
//! use rampart_core::MiddlewareChain;
//! use rampart_xss::{InputScreening, ScreeningConfig};
//!
//! let mut chain = MiddlewareChain::new();
//! chain.use_middleware(InputScreening::new(
//!     ScreeningConfig::new().with_exclude_paths(vec!["/healthz".to_string()]),
//! ));
//! ```
//!
//! ## Escaping
//!
//! ```rust
//! use rampart_xss::Escape;
//!
//! // HTML context
//! let html = Escape::html("Tom & Jerry <3");
//! assert_eq!(html, "Tom &amp; Jerry &lt;3");
//!
//! // JavaScript string context
//! let js = Escape::js_string("Hello \"World\"");
//! assert_eq!(js, "Hello \\\"World\\\"");
//! ```
//!
//! ## URL Validation
//!
//! ```rust
//! use rampart_xss::is_safe_url;
//!
//! assert!(is_safe_url("https://example.com"));
//! assert!(is_safe_url("/relative/path"));
//! assert!(!is_safe_url("javascript:alert(1)"));
//! ```
//!
//! ## Threat Classification
//!
//! ```rust
//! use rampart_xss::ContentValidator;
//!
//! assert!(ContentValidator::is_safe("Normal text"));
//! assert_eq!(
//!     ContentValidator::classify("<script>alert(1)</script>"),
//!     Some("<script> tag")
//! );
//! ```

pub mod cleaner;
pub mod error;
pub mod escape;
pub mod sanitizer;
pub mod screening;
pub mod url;
pub mod validator;

pub use cleaner::{clean_input, strip_tags, InputCleaner};
pub use error::{Result, XssError};
pub use escape::Escape;
pub use sanitizer::HtmlSanitizer;
pub use screening::{InputScreening, ScreeningConfig};
pub use url::is_safe_url;
pub use validator::ContentValidator;
