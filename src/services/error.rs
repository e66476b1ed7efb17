use thiserror::Error;

/// Errors surfaced by the HTTP client adapter. Nothing here is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS...)
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("could not decode response: {0}")]
    Decode(String),

    /// Request body could not be serialized
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 401 / 403: bad credentials or acting on a record we don't own
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
