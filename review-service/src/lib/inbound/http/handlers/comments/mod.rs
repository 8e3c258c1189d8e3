use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::comment::models::Comment;

pub mod create_comment;
pub mod delete_comment;
pub mod list_my_comments;
pub mod list_review_comments;
pub mod update_comment;

pub use create_comment::create_comment;
pub use delete_comment::delete_comment;
pub use list_my_comments::list_my_comments;
pub use list_review_comments::list_review_comments;
pub use update_comment::update_comment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentData {
    pub id: String,
    pub user_id: String,
    pub review_id: String,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            user_id: comment.user_id.to_string(),
            review_id: comment.review_id.to_string(),
            comment_text: comment.comment_text.clone(),
            created_at: comment.created_at,
        }
    }
}
