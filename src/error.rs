use std::fmt;

use tracing::error;

use crate::models::JokeResponse;

pub const NOT_FOUND_JOKE: &str = "No joke was found for that category, make sure it exists";
pub const NOT_FOUND_MESSAGE: &str = "404 Not found";

/// Ways a joke lookup can fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JokeError {
    /// Upstream answered 404, usually an unknown category
    NotFound,
    /// Upstream answered with some other non-200 status
    Upstream(u16),
    /// Request, transport or decoding failure
    Internal(String),
}

impl fmt::Display for JokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "{NOT_FOUND_MESSAGE}"),
            Self::Upstream(status) => write!(f, "Chuck Norris API failed with code: {status}"),
            Self::Internal(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<anyhow::Error> for JokeError {
    fn from(err: anyhow::Error) -> Self {
        JokeError::Internal(format!("{err:#}"))
    }
}

impl From<JokeError> for JokeResponse {
    fn from(err: JokeError) -> Self {
        match err {
            JokeError::NotFound => JokeResponse::failure(NOT_FOUND_JOKE, NOT_FOUND_MESSAGE),
            JokeError::Upstream(_) => JokeResponse::failure("", err.to_string()),
            JokeError::Internal(msg) => {
                error!("Internal error: {}", msg);
                JokeResponse::failure("", msg)
            }
        }
    }
}

/// Result type for joke lookups
pub type JokeResult<T> = Result<T, JokeError>;
