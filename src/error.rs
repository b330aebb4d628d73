//! NNTP error types

use thiserror::Error;

/// NNTP protocol and connection errors
#[derive(Error, Debug)]
pub enum NntpError {
    /// IO error during network operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection timeout
    #[error("Connection timeout")]
    Timeout,

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// NNTP protocol error with response code
    #[error("NNTP error {code}: {message}")]
    Protocol {
        /// NNTP response code (e.g., 411, 430, 502)
        code: u16,
        /// Error message from server
        message: String,
    },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// No such newsgroup
    #[error("No such newsgroup: {0}")]
    NoSuchGroup(String),

    /// No such article
    #[error("No such article: {0}")]
    NoSuchArticle(String),

    /// Posting failed
    #[error("Posting failed: {0}")]
    PostingFailed(String),

    /// Connection closed unexpectedly
    #[error("Connection closed")]
    ConnectionClosed,

    /// Server does not support a capability a command requires
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// The shutdown coordinator stopped the operation before it completed
    #[error("Stopped")]
    Stopped,

    /// A test's own assertion about subject-server behavior failed
    #[error("Test assertion failed: {0}")]
    TestAssertion(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias using [`NntpError`]
pub type Result<T> = std::result::Result<T, NntpError>;
