use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::book::models::BookId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::Rating;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::user::models::UserId;

pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_review(row: &PgRow) -> Result<Review, ReviewError> {
        Ok(Review {
            id: ReviewId(
                row.try_get("id")
                    .map_err(|e| ReviewError::DatabaseError(e.to_string()))?,
            ),
            user_id: UserId(
                row.try_get("user_id")
                    .map_err(|e| ReviewError::DatabaseError(e.to_string()))?,
            ),
            book_id: BookId(
                row.try_get("book_id")
                    .map_err(|e| ReviewError::DatabaseError(e.to_string()))?,
            ),
            rating: Rating::new(
                row.try_get("rating")
                    .map_err(|e| ReviewError::DatabaseError(e.to_string()))?,
            )?,
            review_text: row
                .try_get("review_text")
                .map_err(|e| ReviewError::DatabaseError(e.to_string()))?,
            created_at: row
                .try_get("created_at")
                .map_err(|e| ReviewError::DatabaseError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, ReviewError> {
        sqlx::query(
            r#"
            INSERT INTO reviews (id, user_id, book_id, rating, review_text, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(review.id.0)
        .bind(review.user_id.0)
        .bind(review.book_id.0)
        .bind(review.rating.value())
        .bind(&review.review_text)
        .bind(review.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return ReviewError::BookNotFound(review.book_id.to_string());
                }
            }
            ReviewError::DatabaseError(e.to_string())
        })?;

        Ok(review)
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, book_id, rating, review_text, created_at
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_review).transpose()
    }

    async fn find_by_book(&self, book_id: &BookId) -> Result<Vec<Review>, ReviewError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, book_id, rating, review_text, created_at
            FROM reviews
            WHERE book_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(book_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_review).collect()
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Review>, ReviewError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, book_id, rating, review_text, created_at
            FROM reviews
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_review).collect()
    }

    async fn update(&self, review: Review) -> Result<Review, ReviewError> {
        let result = sqlx::query(
            r#"
            UPDATE reviews
            SET rating = $2, review_text = $3
            WHERE id = $1
            "#,
        )
        .bind(review.id.0)
        .bind(review.rating.value())
        .bind(&review.review_text)
        .execute(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ReviewError::NotFound(review.id.to_string()));
        }

        Ok(review)
    }

    async fn delete(&self, id: &ReviewId) -> Result<(), ReviewError> {
        let result = sqlx::query(
            r#"
            DELETE FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ReviewError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
