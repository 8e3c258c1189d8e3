use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::review::models::ReviewId;
use crate::domain::user::models::UserId;

/// Domain service implementation for comment operations.
pub struct CommentService<CR>
where
    CR: CommentRepository,
{
    repository: Arc<CR>,
}

impl<CR> CommentService<CR>
where
    CR: CommentRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }

    async fn owned_comment(
        &self,
        comment_id: &CommentId,
        acting_user: &UserId,
    ) -> Result<Comment, CommentError> {
        let comment = self
            .repository
            .find_by_id(comment_id)
            .await?
            .ok_or(CommentError::NotFound(comment_id.to_string()))?;

        if comment.user_id != *acting_user {
            tracing::warn!(
                comment_id = %comment_id,
                owner = %comment.user_id,
                acting = %acting_user,
                "Ownership check failed"
            );
            return Err(CommentError::Forbidden);
        }

        Ok(comment)
    }
}

#[async_trait]
impl<CR> CommentServicePort for CommentService<CR>
where
    CR: CommentRepository,
{
    async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> Result<Comment, CommentError> {
        let comment = Comment {
            id: CommentId::new(),
            user_id: command.user_id,
            review_id: command.review_id,
            comment_text: command.comment_text,
            created_at: Utc::now(),
        };

        self.repository.create(comment).await
    }

    async fn list_review_comments(
        &self,
        review_id: &ReviewId,
    ) -> Result<Vec<Comment>, CommentError> {
        self.repository.find_by_review(review_id).await
    }

    async fn list_user_comments(&self, user_id: &UserId) -> Result<Vec<Comment>, CommentError> {
        self.repository.find_by_user(user_id).await
    }

    async fn update_comment(
        &self,
        comment_id: &CommentId,
        acting_user: &UserId,
        comment_text: String,
    ) -> Result<Comment, CommentError> {
        let mut comment = self.owned_comment(comment_id, acting_user).await?;

        comment.comment_text = comment_text;

        self.repository.update(comment).await
    }

    async fn delete_comment(
        &self,
        comment_id: &CommentId,
        acting_user: &UserId,
    ) -> Result<(), CommentError> {
        self.owned_comment(comment_id, acting_user).await?;

        self.repository.delete(comment_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

    mock! {
        pub TestCommentRepository {}

        #[async_trait]
        impl CommentRepository for TestCommentRepository {
            async fn create(&self, comment: Comment) -> Result<Comment, CommentError>;
            async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;
            async fn find_by_review(&self, review_id: &ReviewId) -> Result<Vec<Comment>, CommentError>;
            async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Comment>, CommentError>;
            async fn update(&self, comment: Comment) -> Result<Comment, CommentError>;
            async fn delete(&self, id: &CommentId) -> Result<(), CommentError>;
        }
    }

    fn comment_owned_by(user_id: UserId) -> Comment {
        Comment {
            id: CommentId::new(),
            user_id,
            review_id: ReviewId::new(),
            comment_text: "RIP BOROMIR".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_update_comment_by_owner() {
        let mut repository = MockTestCommentRepository::new();

        let owner = UserId::new();
        let existing = comment_owned_by(owner);
        let comment_id = existing.id;

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .withf(|comment| comment.comment_text == "edited")
            .times(1)
            .returning(|comment| Ok(comment));

        let service = CommentService::new(Arc::new(repository));

        let updated = service
            .update_comment(&comment_id, &owner, "edited".to_string())
            .await
            .unwrap();
        assert_eq!(updated.comment_text, "edited");
    }

    #[tokio::test]
    async fn test_delete_comment_by_non_owner_forbidden() {
        let mut repository = MockTestCommentRepository::new();

        let existing = comment_owned_by(UserId::new());
        let comment_id = existing.id;

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_delete().times(0);

        let service = CommentService::new(Arc::new(repository));

        let result = service.delete_comment(&comment_id, &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), CommentError::Forbidden));
    }

    #[tokio::test]
    async fn test_update_comment_not_found() {
        let mut repository = MockTestCommentRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CommentService::new(Arc::new(repository));

        let result = service
            .update_comment(&CommentId::new(), &UserId::new(), "text".to_string())
            .await;
        assert!(matches!(result.unwrap_err(), CommentError::NotFound(_)));
    }
}
