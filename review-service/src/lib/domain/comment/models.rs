use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::comment::errors::CommentIdError;
use crate::domain::review::models::ReviewId;
use crate::domain::user::models::UserId;

/// Comment on a review.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    /// Recorded owner; ownership checks compare against this
    pub user_id: UserId,
    pub review_id: ReviewId,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
}

/// Comment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - the string is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CommentIdError> {
        Uuid::parse_str(s)
            .map(CommentId)
            .map_err(|e| CommentIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new comment
#[derive(Debug)]
pub struct CreateCommentCommand {
    pub user_id: UserId,
    pub review_id: ReviewId,
    pub comment_text: String,
}
