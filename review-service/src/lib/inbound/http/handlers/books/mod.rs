use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::book::models::Book;

pub mod get_book;
pub mod list_books;

pub use get_book::get_book;
pub use list_books::list_books;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookData {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Book> for BookData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone(),
            created_at: book.created_at,
        }
    }
}
