//! Error types for the jobmatch client.

use thiserror::Error;

/// Errors that can occur when talking to the jobmatch backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connect, DNS, timeout, body)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a 4xx/5xx status
    #[error("Server error ({status}): {message}")]
    Http { status: u16, message: String },

    /// Backend answered 401; the session has been cleared
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Invalid base URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// File not found for upload
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error reading an upload or the session file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Session store could not be read or written
    #[error("Session store error: {0}")]
    Session(String),
}

impl ClientError {
    /// HTTP status carried by the error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            ClientError::Unauthorized { .. } => Some(401),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for a 401 response.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
