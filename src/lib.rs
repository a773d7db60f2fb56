// Rampart - defense-in-depth middleware for web applications
//
// This library hardens HTTP responses with security headers, screens request
// parameters for XSS probes, and provides sanitization helpers for untrusted
// input.

// Re-export core functionality
pub use rampart_core::*;

// Re-export optional crates
#[cfg(feature = "security")]
pub use rampart_security;

#[cfg(feature = "xss")]
pub use rampart_xss;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Error,
        HandlerFn,
        HttpRequest,
        HttpResponse,
        Middleware,
        MiddlewareChain,
        Next,
    };

    #[cfg(feature = "security")]
    pub use rampart_security::{CspConfig, PermissionsPolicy, ReferrerPolicy, SecurityHeaders};

    #[cfg(feature = "xss")]
    pub use rampart_xss::{
        clean_input, is_safe_url, ContentValidator, Escape, HtmlSanitizer, InputCleaner,
        InputScreening, ScreeningConfig, XssError,
    };
}
