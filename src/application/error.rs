//! Application-level errors

use thiserror::Error;

/// Application errors carry external process failures and application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    /// External `post` failed; carries its stderr verbatim.
    #[error("Post failed: {0}")]
    PostFailed(String),

    /// External `read` failed; carries its stderr verbatim.
    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
