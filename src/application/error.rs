//! Application-level errors

use thiserror::Error;

/// Application errors add context to failures of the surrounding collaborators.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("fetch failed: {context}")]
    Fetch {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
