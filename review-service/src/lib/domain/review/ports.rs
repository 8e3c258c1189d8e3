use async_trait::async_trait;

use crate::domain::book::models::BookId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::CreateReviewCommand;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;
use crate::domain::review::models::UpdateReviewCommand;
use crate::domain::user::models::UserId;

/// Port for review domain service operations.
#[async_trait]
pub trait ReviewServicePort: Send + Sync + 'static {
    /// Create a review for a book on behalf of the acting user.
    ///
    /// # Errors
    /// * `BookNotFound` - the referenced book does not exist
    /// * `DatabaseError` - store operation failed
    async fn create_review(&self, command: CreateReviewCommand) -> Result<Review, ReviewError>;

    /// List reviews of a book, newest first.
    async fn list_book_reviews(&self, book_id: &BookId) -> Result<Vec<Review>, ReviewError>;

    /// Retrieve a single review scoped to a book.
    ///
    /// # Errors
    /// * `NotFound` - no such review under this book
    async fn get_book_review(
        &self,
        book_id: &BookId,
        review_id: &ReviewId,
    ) -> Result<Review, ReviewError>;

    /// List reviews written by a user, newest first.
    async fn list_user_reviews(&self, user_id: &UserId) -> Result<Vec<Review>, ReviewError>;

    /// Edit a review. Only the recorded owner may edit.
    ///
    /// # Errors
    /// * `NotFound` - review does not exist
    /// * `Forbidden` - acting user is not the recorded owner
    async fn update_review(
        &self,
        review_id: &ReviewId,
        acting_user: &UserId,
        command: UpdateReviewCommand,
    ) -> Result<Review, ReviewError>;

    /// Delete a review. Only the recorded owner may delete.
    ///
    /// # Errors
    /// * `NotFound` - review does not exist
    /// * `Forbidden` - acting user is not the recorded owner
    async fn delete_review(
        &self,
        review_id: &ReviewId,
        acting_user: &UserId,
    ) -> Result<(), ReviewError>;
}

/// Persistence operations for reviews.
#[async_trait]
pub trait ReviewRepository: Send + Sync + 'static {
    /// Persist a new review.
    ///
    /// # Errors
    /// * `BookNotFound` - foreign key to books violated
    /// * `DatabaseError` - store operation failed
    async fn create(&self, review: Review) -> Result<Review, ReviewError>;

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewError>;

    async fn find_by_book(&self, book_id: &BookId) -> Result<Vec<Review>, ReviewError>;

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Review>, ReviewError>;

    /// Replace rating and text of an existing review.
    ///
    /// # Errors
    /// * `NotFound` - review does not exist
    async fn update(&self, review: Review) -> Result<Review, ReviewError>;

    /// # Errors
    /// * `NotFound` - review does not exist
    async fn delete(&self, id: &ReviewId) -> Result<(), ReviewError>;
}
