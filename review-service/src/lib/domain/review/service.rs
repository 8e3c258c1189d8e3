use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::book::models::BookId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::CreateReviewCommand;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;
use crate::domain::review::models::UpdateReviewCommand;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::review::ports::ReviewServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for review operations.
pub struct ReviewService<RR>
where
    RR: ReviewRepository,
{
    repository: Arc<RR>,
}

impl<RR> ReviewService<RR>
where
    RR: ReviewRepository,
{
    pub fn new(repository: Arc<RR>) -> Self {
        Self { repository }
    }

    /// Load a review and verify the acting user is its recorded owner.
    async fn owned_review(
        &self,
        review_id: &ReviewId,
        acting_user: &UserId,
    ) -> Result<Review, ReviewError> {
        let review = self
            .repository
            .find_by_id(review_id)
            .await?
            .ok_or(ReviewError::NotFound(review_id.to_string()))?;

        // Typed UserId equality; both sides come through the same parser
        if review.user_id != *acting_user {
            tracing::warn!(
                review_id = %review_id,
                owner = %review.user_id,
                acting = %acting_user,
                "Ownership check failed"
            );
            return Err(ReviewError::Forbidden);
        }

        Ok(review)
    }
}

#[async_trait]
impl<RR> ReviewServicePort for ReviewService<RR>
where
    RR: ReviewRepository,
{
    async fn create_review(&self, command: CreateReviewCommand) -> Result<Review, ReviewError> {
        let review = Review {
            id: ReviewId::new(),
            user_id: command.user_id,
            book_id: command.book_id,
            rating: command.rating,
            review_text: command.review_text,
            created_at: Utc::now(),
        };

        self.repository.create(review).await
    }

    async fn list_book_reviews(&self, book_id: &BookId) -> Result<Vec<Review>, ReviewError> {
        self.repository.find_by_book(book_id).await
    }

    async fn get_book_review(
        &self,
        book_id: &BookId,
        review_id: &ReviewId,
    ) -> Result<Review, ReviewError> {
        let review = self
            .repository
            .find_by_id(review_id)
            .await?
            .filter(|review| review.book_id == *book_id)
            .ok_or(ReviewError::NotFound(review_id.to_string()))?;

        Ok(review)
    }

    async fn list_user_reviews(&self, user_id: &UserId) -> Result<Vec<Review>, ReviewError> {
        self.repository.find_by_user(user_id).await
    }

    async fn update_review(
        &self,
        review_id: &ReviewId,
        acting_user: &UserId,
        command: UpdateReviewCommand,
    ) -> Result<Review, ReviewError> {
        let mut review = self.owned_review(review_id, acting_user).await?;

        review.rating = command.rating;
        review.review_text = command.review_text;

        self.repository.update(review).await
    }

    async fn delete_review(
        &self,
        review_id: &ReviewId,
        acting_user: &UserId,
    ) -> Result<(), ReviewError> {
        self.owned_review(review_id, acting_user).await?;

        self.repository.delete(review_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::review::models::Rating;

    mock! {
        pub TestReviewRepository {}

        #[async_trait]
        impl ReviewRepository for TestReviewRepository {
            async fn create(&self, review: Review) -> Result<Review, ReviewError>;
            async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewError>;
            async fn find_by_book(&self, book_id: &BookId) -> Result<Vec<Review>, ReviewError>;
            async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Review>, ReviewError>;
            async fn update(&self, review: Review) -> Result<Review, ReviewError>;
            async fn delete(&self, id: &ReviewId) -> Result<(), ReviewError>;
        }
    }

    fn review_owned_by(user_id: UserId) -> Review {
        Review {
            id: ReviewId::new(),
            user_id,
            book_id: BookId::new(),
            rating: Rating::new(4).unwrap(),
            review_text: "Loved it!".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_update_review_by_owner() {
        let mut repository = MockTestReviewRepository::new();

        let owner = UserId::new();
        let existing = review_owned_by(owner);
        let review_id = existing.id;

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .withf(|review| review.rating.value() == 2 && review.review_text == "changed my mind")
            .times(1)
            .returning(|review| Ok(review));

        let service = ReviewService::new(Arc::new(repository));

        let command = UpdateReviewCommand {
            rating: Rating::new(2).unwrap(),
            review_text: "changed my mind".to_string(),
        };

        let updated = service
            .update_review(&review_id, &owner, command)
            .await
            .unwrap();
        assert_eq!(updated.rating.value(), 2);
    }

    #[tokio::test]
    async fn test_update_review_by_non_owner_forbidden() {
        let mut repository = MockTestReviewRepository::new();

        let owner = UserId::new();
        let existing = review_owned_by(owner);
        let review_id = existing.id;

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_update().times(0);

        let service = ReviewService::new(Arc::new(repository));

        let intruder = UserId::new();
        let command = UpdateReviewCommand {
            rating: Rating::new(1).unwrap(),
            review_text: "hijacked".to_string(),
        };

        let result = service.update_review(&review_id, &intruder, command).await;
        assert!(matches!(result.unwrap_err(), ReviewError::Forbidden));
    }

    #[tokio::test]
    async fn test_delete_review_by_non_owner_forbidden() {
        let mut repository = MockTestReviewRepository::new();

        let owner = UserId::new();
        let existing = review_owned_by(owner);
        let review_id = existing.id;

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_delete().times(0);

        let service = ReviewService::new(Arc::new(repository));

        let result = service.delete_review(&review_id, &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), ReviewError::Forbidden));
    }

    #[tokio::test]
    async fn test_update_review_not_found() {
        let mut repository = MockTestReviewRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ReviewService::new(Arc::new(repository));

        let command = UpdateReviewCommand {
            rating: Rating::new(3).unwrap(),
            review_text: "whatever".to_string(),
        };

        let result = service
            .update_review(&ReviewId::new(), &UserId::new(), command)
            .await;
        assert!(matches!(result.unwrap_err(), ReviewError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_book_review_wrong_book() {
        let mut repository = MockTestReviewRepository::new();

        let existing = review_owned_by(UserId::new());
        let review_id = existing.id;

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = ReviewService::new(Arc::new(repository));

        // Same review id, different book
        let result = service.get_book_review(&BookId::new(), &review_id).await;
        assert!(matches!(result.unwrap_err(), ReviewError::NotFound(_)));
    }
}
