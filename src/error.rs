//! Error taxonomy shared by the transport, the backends and the facade.

use core::fmt;

/// Errors surfaced by the Tado API client.
///
/// The facade never remaps these: whatever a backend or the transport raises
/// reaches the caller unchanged.
#[derive(Debug)]
pub enum TadoApiError {
    /// Login or token refresh was rejected by the auth server.
    Auth(String),
    /// The operation is not available on the detected API generation.
    NotSupported(&'static str),
    /// Network-level failure (DNS, socket, TLS, IO).
    Transport(String),
    /// The API answered with a non-success HTTP status.
    Http { status: u16, message: String },
    /// The response body did not decode into the expected shape.
    Json(String),
}

impl fmt::Display for TadoApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TadoApiError::Auth(msg) => write!(f, "auth error: {}", msg),
            TadoApiError::NotSupported(msg) => write!(f, "not supported: {}", msg),
            TadoApiError::Transport(msg) => write!(f, "transport error: {}", msg),
            TadoApiError::Http { status, message } => write!(f, "http {}: {}", status, message),
            TadoApiError::Json(msg) => write!(f, "json error: {}", msg),
        }
    }
}

impl std::error::Error for TadoApiError {}

impl From<serde_json::Error> for TadoApiError {
    fn from(value: serde_json::Error) -> Self {
        TadoApiError::Json(value.to_string())
    }
}
