use async_trait::async_trait;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::review::models::ReviewId;
use crate::domain::user::models::UserId;

/// Port for comment domain service operations.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// Create a comment on a review on behalf of the acting user.
    ///
    /// # Errors
    /// * `ReviewNotFound` - the referenced review does not exist
    /// * `DatabaseError` - store operation failed
    async fn create_comment(&self, command: CreateCommentCommand)
        -> Result<Comment, CommentError>;

    /// List comments on a review, oldest first.
    async fn list_review_comments(&self, review_id: &ReviewId)
        -> Result<Vec<Comment>, CommentError>;

    /// List comments written by a user, newest first.
    async fn list_user_comments(&self, user_id: &UserId) -> Result<Vec<Comment>, CommentError>;

    /// Edit a comment. Only the recorded owner may edit.
    ///
    /// # Errors
    /// * `NotFound` - comment does not exist
    /// * `Forbidden` - acting user is not the recorded owner
    async fn update_comment(
        &self,
        comment_id: &CommentId,
        acting_user: &UserId,
        comment_text: String,
    ) -> Result<Comment, CommentError>;

    /// Delete a comment. Only the recorded owner may delete.
    ///
    /// # Errors
    /// * `NotFound` - comment does not exist
    /// * `Forbidden` - acting user is not the recorded owner
    async fn delete_comment(
        &self,
        comment_id: &CommentId,
        acting_user: &UserId,
    ) -> Result<(), CommentError>;
}

/// Persistence operations for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    /// Persist a new comment.
    ///
    /// # Errors
    /// * `ReviewNotFound` - foreign key to reviews violated
    /// * `DatabaseError` - store operation failed
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError>;

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;

    async fn find_by_review(&self, review_id: &ReviewId) -> Result<Vec<Comment>, CommentError>;

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Comment>, CommentError>;

    /// Replace the text of an existing comment.
    ///
    /// # Errors
    /// * `NotFound` - comment does not exist
    async fn update(&self, comment: Comment) -> Result<Comment, CommentError>;

    /// # Errors
    /// * `NotFound` - comment does not exist
    async fn delete(&self, id: &CommentId) -> Result<(), CommentError>;
}
