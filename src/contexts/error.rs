use std::fmt;

/// Error types for talking to the assessment API
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The request never produced a response (connection refused, reset, body read failure)
    Transport(String),
    /// The API answered with a non-success status, optionally with its `error` message
    Status { code: u16, message: Option<String> },
    /// The HTTP client could not be built
    ClientInit(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Transport(msg) => write!(f, "Request failed: {}", msg),
            SearchError::Status { code, message: Some(msg) } => {
                write!(f, "API returned status {}: {}", code, msg)
            }
            SearchError::Status { code, message: None } => {
                write!(f, "API returned status {}", code)
            }
            SearchError::ClientInit(msg) => write!(f, "HTTP client creation failed: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => SearchError::Status {
                code: status.as_u16(),
                message: None,
            },
            None => SearchError::Transport(err.to_string()),
        }
    }
}

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;
