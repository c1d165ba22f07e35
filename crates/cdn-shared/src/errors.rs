use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Empty not allowed")]
    Empty,
}

/// Reasons the `user` cookie failed to decode into a session identity
///
/// None of these are fatal to page initialization; callers are expected to
/// fold them into an anonymous session.
#[derive(Debug, Error)]
pub enum SessionCookieError {
    #[error("no user cookie present")]
    Missing,
    #[error("user cookie is empty")]
    Empty,
    #[error("user cookie is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("user cookie payload is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}
