//! Widget Errors
//!
//! Every failure the submission pipeline can hit.

use crate::api::ApiError;

/// Common result type for pipeline operations
pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// Subreddit input was empty
    EmptyInput,
    /// A response had zero children where one was required
    MalformedResponse(String),
    /// Fetch rejected: transport, status or body decoding
    Network(ApiError),
    /// A template failed to produce markup
    Render(String),
}

impl std::fmt::Display for WidgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetError::EmptyInput => write!(f, "Empty subreddit input"),
            WidgetError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            WidgetError::Network(err) => write!(f, "Request failed: {}", err),
            WidgetError::Render(msg) => write!(f, "Render failed: {}", msg),
        }
    }
}

impl std::error::Error for WidgetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WidgetError::Network(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ApiError> for WidgetError {
    fn from(err: ApiError) -> Self {
        WidgetError::Network(err)
    }
}

impl From<std::fmt::Error> for WidgetError {
    fn from(err: std::fmt::Error) -> Self {
        WidgetError::Render(err.to_string())
    }
}
