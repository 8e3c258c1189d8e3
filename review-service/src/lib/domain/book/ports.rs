use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;

/// Port for book domain service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// List the whole catalog, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn list_books(&self) -> Result<Vec<Book>, BookError>;

    /// Retrieve a book by identifier.
    ///
    /// # Errors
    /// * `NotFound` - book does not exist
    /// * `DatabaseError` - store operation failed
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;
}

/// Persistence operations for the book catalog.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Book>, BookError>;

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;
}
