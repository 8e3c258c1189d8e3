use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::review::models::ReviewId;
use crate::domain::user::models::UserId;

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_comment(row: &PgRow) -> Result<Comment, CommentError> {
        Ok(Comment {
            id: CommentId(
                row.try_get("id")
                    .map_err(|e| CommentError::DatabaseError(e.to_string()))?,
            ),
            user_id: UserId(
                row.try_get("user_id")
                    .map_err(|e| CommentError::DatabaseError(e.to_string()))?,
            ),
            review_id: ReviewId(
                row.try_get("review_id")
                    .map_err(|e| CommentError::DatabaseError(e.to_string()))?,
            ),
            comment_text: row
                .try_get("comment_text")
                .map_err(|e| CommentError::DatabaseError(e.to_string()))?,
            created_at: row
                .try_get("created_at")
                .map_err(|e| CommentError::DatabaseError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, user_id, review_id, comment_text, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id.0)
        .bind(comment.user_id.0)
        .bind(comment.review_id.0)
        .bind(&comment.comment_text)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return CommentError::ReviewNotFound(comment.review_id.to_string());
                }
            }
            CommentError::DatabaseError(e.to_string())
        })?;

        Ok(comment)
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, review_id, comment_text, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_comment).transpose()
    }

    async fn find_by_review(&self, review_id: &ReviewId) -> Result<Vec<Comment>, CommentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, review_id, comment_text, created_at
            FROM comments
            WHERE review_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(review_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_comment).collect()
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Comment>, CommentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, review_id, comment_text, created_at
            FROM comments
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_comment).collect()
    }

    async fn update(&self, comment: Comment) -> Result<Comment, CommentError> {
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET comment_text = $2
            WHERE id = $1
            "#,
        )
        .bind(comment.id.0)
        .bind(&comment.comment_text)
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound(comment.id.to_string()));
        }

        Ok(comment)
    }

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
