use thiserror::Error;

#[derive(Error, Debug)]
pub enum XssError {
    #[error("Potentially malicious content detected: {0}")]
    MaliciousContent(String),

    #[error("Suspicious content detected: {0}")]
    SuspiciousContent(String),

    #[error("Sanitization failed: {0}")]
    SanitizationFailed(String),
}

pub type Result<T> = std::result::Result<T, XssError>;

impl From<XssError> for rampart_core::Error {
    fn from(err: XssError) -> Self {
        match err {
            XssError::MaliciousContent(msg) | XssError::SuspiciousContent(msg) => {
                rampart_core::Error::BadRequest(msg)
            }
            XssError::SanitizationFailed(msg) => rampart_core::Error::Internal(msg),
        }
    }
}
