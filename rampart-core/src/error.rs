// Error types shared across the rampart crates

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Payload Too Large: {0}")]
    PayloadTooLarge(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Error::BadRequest(_) | Error::Deserialization(_) => 400,
            Error::Forbidden(_) => 403,
            Error::PayloadTooLarge(_) => 413,
            _ => 500,
        }
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::BadRequest("bad".into()).status_code(), 400);
        assert_eq!(Error::Forbidden("no".into()).status_code(), 403);
        assert_eq!(Error::PayloadTooLarge("big".into()).status_code(), 413);
        assert_eq!(Error::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_error_classes() {
        assert!(Error::BadRequest("bad".into()).is_client_error());
        assert!(!Error::BadRequest("bad".into()).is_server_error());
        assert!(Error::Internal("boom".into()).is_server_error());
    }

    #[test]
    fn test_display() {
        let err = Error::BadRequest("missing field".into());
        assert_eq!(err.to_string(), "Bad Request: missing field");
    }
}
