use thiserror::Error;

/// Error for CommentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for comment operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    #[error("Invalid comment ID: {0}")]
    InvalidCommentId(#[from] CommentIdError),

    #[error("Comment not found: {0}")]
    NotFound(String),

    #[error("Review not found: {0}")]
    ReviewNotFound(String),

    #[error("Not authorized to modify this comment")]
    Forbidden,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
