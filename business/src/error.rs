use thiserror::Error;

use crate::http::HttpError;

/// Failure of a REST API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Failed to parse {what}: {message}")]
    Decode { what: &'static str, message: String },
}

impl ApiError {
    pub fn decode(what: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            what,
            message: err.to_string(),
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        Self::Transport(err.message)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
