//! Security response headers for rampart - inspired by Helmet for Express.js
//!
//! This crate hardens outgoing responses with a fixed set of protective
//! headers. Headers are only added when the response does not already carry
//! them, so handler-set values always win.
//!
//! # Example
//!
//! ```
//! use rampart_security::{CspConfig, ReferrerPolicy, SecurityHeaders};
//!
//! // Use the project defaults (no Content-Security-Policy)
//! let security = SecurityHeaders::new();
//!
//! // Or customize as needed
//! let security = SecurityHeaders::new()
//!     .with_referrer_policy(ReferrerPolicy::SameOrigin)
//!     .with_csp(CspConfig::default().report_only(true));
//! ```

pub mod content_security_policy;
pub mod content_type_options;
pub mod permissions_policy;
pub mod referrer_policy;
pub mod xss_filter;

pub use content_security_policy::CspConfig;
pub use content_type_options::ContentTypeOptions;
pub use permissions_policy::PermissionsPolicy;
pub use referrer_policy::ReferrerPolicy;
pub use xss_filter::XssFilter;

use async_trait::async_trait;
use rampart_core::{Error, HttpRequest, HttpResponse, Middleware, Next};

/// Middleware that adds protective headers to responses that lack them
#[derive(Debug, Clone)]
pub struct SecurityHeaders {
    /// X-XSS-Protection
    pub xss_filter: XssFilter,

    /// X-Content-Type-Options
    pub content_type_options: ContentTypeOptions,

    /// Referrer-Policy
    pub referrer_policy: ReferrerPolicy,

    /// Permissions-Policy
    pub permissions_policy: PermissionsPolicy,

    /// Content Security Policy; only emitted when configured
    pub csp: Option<CspConfig>,
}

impl SecurityHeaders {
    /// Create the middleware with the project defaults and no CSP
    pub fn new() -> Self {
        Self {
            xss_filter: XssFilter::EnabledBlock,
            content_type_options: ContentTypeOptions::NoSniff,
            referrer_policy: ReferrerPolicy::StrictOriginWhenCrossOrigin,
            permissions_policy: PermissionsPolicy::default(),
            csp: None,
        }
    }

    /// Defaults plus the default Content Security Policy
    pub fn strict() -> Self {
        Self::new().with_csp(CspConfig::default())
    }

    /// Set XSS Filter
    pub fn with_xss_filter(mut self, filter: XssFilter) -> Self {
        self.xss_filter = filter;
        self
    }

    /// Set Content Type Options
    pub fn with_content_type_options(mut self, options: ContentTypeOptions) -> Self {
        self.content_type_options = options;
        self
    }

    /// Set Referrer Policy
    pub fn with_referrer_policy(mut self, policy: ReferrerPolicy) -> Self {
        self.referrer_policy = policy;
        self
    }

    /// Set Permissions Policy
    pub fn with_permissions_policy(mut self, policy: PermissionsPolicy) -> Self {
        self.permissions_policy = policy;
        self
    }

    /// Enable Content Security Policy
    pub fn with_csp(mut self, config: CspConfig) -> Self {
        self.csp = Some(config);
        self
    }

    /// Apply security headers to a response, keeping any it already has
    pub fn apply(&self, mut response: HttpResponse) -> HttpResponse {
        if !response.has_header("X-XSS-Protection") {
            response.headers.insert(
                "X-XSS-Protection".to_string(),
                self.xss_filter.to_header_value(),
            );
        }

        if !response.has_header("X-Content-Type-Options") {
            response.headers.insert(
                "X-Content-Type-Options".to_string(),
                self.content_type_options.to_header_value(),
            );
        }

        if !response.has_header("Referrer-Policy") {
            response.headers.insert(
                "Referrer-Policy".to_string(),
                self.referrer_policy.to_header_value(),
            );
        }

        if !self.permissions_policy.is_empty() && !response.has_header("Permissions-Policy") {
            response.headers.insert(
                "Permissions-Policy".to_string(),
                self.permissions_policy.to_header_value(),
            );
        }

        if let Some(ref csp) = self.csp {
            if !csp.is_empty() && !response.has_header(csp.header_name()) {
                response
                    .headers
                    .insert(csp.header_name().to_string(), csp.to_header_value());
            }
        }

        response
    }
}

impl Default for SecurityHeaders {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Middleware for SecurityHeaders {
    async fn handle(&self, req: HttpRequest, next: Next) -> Result<HttpResponse, Error> {
        let response = next(req).await?;
        Ok(self.apply(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_headers_new() {
        let security = SecurityHeaders::new();
        assert!(security.csp.is_none());
        assert_eq!(security.xss_filter, XssFilter::EnabledBlock);
        assert_eq!(
            security.referrer_policy,
            ReferrerPolicy::StrictOriginWhenCrossOrigin
        );
    }

    #[test]
    fn test_apply_sets_missing_headers() {
        let security = SecurityHeaders::new();
        let secured = security.apply(HttpResponse::ok());

        assert_eq!(
            secured.headers.get("X-XSS-Protection"),
            Some(&"1; mode=block".to_string())
        );
        assert_eq!(
            secured.headers.get("X-Content-Type-Options"),
            Some(&"nosniff".to_string())
        );
        assert_eq!(
            secured.headers.get("Referrer-Policy"),
            Some(&"strict-origin-when-cross-origin".to_string())
        );
        assert_eq!(
            secured.headers.get("Permissions-Policy"),
            Some(
                &"geolocation=(), microphone=(), camera=(), payment=(), usb=(), \
                  magnetometer=(), accelerometer=(), gyroscope=()"
                    .to_string()
            )
        );
        assert!(!secured.headers.contains_key("Content-Security-Policy"));
    }

    #[test]
    fn test_apply_keeps_existing_headers() {
        let security = SecurityHeaders::new();
        let response = HttpResponse::ok().with_header("X-XSS-Protection", "0");
        let secured = security.apply(response);

        assert_eq!(
            secured.headers.get("X-XSS-Protection"),
            Some(&"0".to_string())
        );
        assert_eq!(
            secured.headers.get("X-Content-Type-Options"),
            Some(&"nosniff".to_string())
        );
    }

    #[test]
    fn test_apply_keeps_lowercase_headers() {
        let security = SecurityHeaders::new();
        let response = HttpResponse::ok().with_header("x-content-type-options", "nosniff");
        let secured = security.apply(response);

        assert!(!secured.headers.contains_key("X-Content-Type-Options"));
    }

    #[test]
    fn test_csp_only_when_configured() {
        let secured = SecurityHeaders::new()
            .with_csp(CspConfig::new())
            .apply(HttpResponse::ok());
        assert!(!secured.headers.contains_key("Content-Security-Policy"));

        let secured = SecurityHeaders::strict().apply(HttpResponse::ok());
        let csp = secured.headers.get("Content-Security-Policy");
        assert!(csp.is_some());
        assert!(csp.map(|v| v.starts_with("default-src 'self'")).unwrap_or(false));
    }

    #[test]
    fn test_csp_report_only_header_name() {
        let security = SecurityHeaders::new().with_csp(
            CspConfig::new()
                .default_src(vec!["'self'".to_string()])
                .report_only(true),
        );
        let secured = security.apply(HttpResponse::ok());

        assert!(!secured.headers.contains_key("Content-Security-Policy"));
        assert_eq!(
            secured.headers.get("Content-Security-Policy-Report-Only"),
            Some(&"default-src 'self'".to_string())
        );
    }

    #[test]
    fn test_empty_permissions_policy_not_emitted() {
        let security =
            SecurityHeaders::new().with_permissions_policy(PermissionsPolicy::new());
        let secured = security.apply(HttpResponse::ok());

        assert!(!secured.headers.contains_key("Permissions-Policy"));
    }
}
