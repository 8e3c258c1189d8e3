use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookRepository;

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_book(row: &PgRow) -> Result<Book, BookError> {
        Ok(Book {
            id: BookId(
                row.try_get("id")
                    .map_err(|e| BookError::DatabaseError(e.to_string()))?,
            ),
            title: row
                .try_get("title")
                .map_err(|e| BookError::DatabaseError(e.to_string()))?,
            author: row
                .try_get("author")
                .map_err(|e| BookError::DatabaseError(e.to_string()))?,
            description: row
                .try_get("description")
                .map_err(|e| BookError::DatabaseError(e.to_string()))?,
            created_at: row
                .try_get("created_at")
                .map_err(|e| BookError::DatabaseError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, author, description, created_at
            FROM books
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_book).collect()
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, author, description, created_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_book).transpose()
    }
}
