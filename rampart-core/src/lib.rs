// Core library for the rampart security toolkit
// Foundational request/response types, the middleware chain, and logging setup

pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;

// Re-export commonly used types
pub use error::*;
pub use http::*;
pub use middleware::*;
