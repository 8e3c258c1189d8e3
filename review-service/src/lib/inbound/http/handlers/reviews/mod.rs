use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::review::models::Review;

pub mod create_review;
pub mod delete_review;
pub mod get_review;
pub mod list_book_reviews;
pub mod list_my_reviews;
pub mod update_review;

pub use create_review::create_review;
pub use delete_review::delete_review;
pub use get_review::get_review;
pub use list_book_reviews::list_book_reviews;
pub use list_my_reviews::list_my_reviews;
pub use update_review::update_review;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewData {
    pub id: String,
    pub user_id: String,
    pub book_id: String,
    pub rating: i32,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Review> for ReviewData {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.to_string(),
            user_id: review.user_id.to_string(),
            book_id: review.book_id.to_string(),
            rating: review.rating.value(),
            review_text: review.review_text.clone(),
            created_at: review.created_at,
        }
    }
}
