use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use chrono::Utc;
use review_service::domain::book::errors::BookError;
use review_service::domain::book::models::Book;
use review_service::domain::book::models::BookId;
use review_service::domain::book::ports::BookRepository;
use review_service::domain::book::service::BookService;
use review_service::domain::comment::errors::CommentError;
use review_service::domain::comment::models::Comment;
use review_service::domain::comment::models::CommentId;
use review_service::domain::comment::ports::CommentRepository;
use review_service::domain::comment::service::CommentService;
use review_service::domain::review::errors::ReviewError;
use review_service::domain::review::models::Review;
use review_service::domain::review::models::ReviewId;
use review_service::domain::review::ports::ReviewRepository;
use review_service::domain::review::service::ReviewService;
use review_service::domain::user::errors::UserError;
use review_service::domain::user::models::User;
use review_service::domain::user::models::UserId;
use review_service::domain::user::models::Username;
use review_service::domain::user::ports::UserRepository;
use review_service::domain::user::service::UserService;
use review_service::inbound::http::router::create_router;
use review_service::inbound::http::router::AppState;
use tokio::sync::RwLock;

const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Shared in-memory tables standing in for Postgres.
///
/// The repositories below hold the same `Arc<InMemoryStore>` so foreign
/// key behavior (book must exist for a review, review for a comment) can
/// be emulated the way the real schema enforces it.
#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<UserId, User>>,
    books: RwLock<HashMap<BookId, Book>>,
    reviews: RwLock<HashMap<ReviewId, Review>>,
    comments: RwLock<HashMap<CommentId, Comment>>,
}

struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.store.users.write().await;
        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.store.users.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .store
            .users
            .read()
            .await
            .values()
            .find(|u| u.username == *username)
            .cloned())
    }
}

struct InMemoryBookRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        let mut books: Vec<Book> = self.store.books.read().await.values().cloned().collect();
        books.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(books)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        Ok(self.store.books.read().await.get(id).cloned())
    }
}

struct InMemoryReviewRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, ReviewError> {
        if !self.store.books.read().await.contains_key(&review.book_id) {
            return Err(ReviewError::BookNotFound(review.book_id.to_string()));
        }
        self.store
            .reviews
            .write()
            .await
            .insert(review.id, review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewError> {
        Ok(self.store.reviews.read().await.get(id).cloned())
    }

    async fn find_by_book(&self, book_id: &BookId) -> Result<Vec<Review>, ReviewError> {
        let mut reviews: Vec<Review> = self
            .store
            .reviews
            .read()
            .await
            .values()
            .filter(|r| r.book_id == *book_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Review>, ReviewError> {
        let mut reviews: Vec<Review> = self
            .store
            .reviews
            .read()
            .await
            .values()
            .filter(|r| r.user_id == *user_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    async fn update(&self, review: Review) -> Result<Review, ReviewError> {
        let mut reviews = self.store.reviews.write().await;
        if !reviews.contains_key(&review.id) {
            return Err(ReviewError::NotFound(review.id.to_string()));
        }
        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn delete(&self, id: &ReviewId) -> Result<(), ReviewError> {
        self.store
            .reviews
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(ReviewError::NotFound(id.to_string()))
    }
}

struct InMemoryCommentRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError> {
        if !self
            .store
            .reviews
            .read()
            .await
            .contains_key(&comment.review_id)
        {
            return Err(CommentError::ReviewNotFound(comment.review_id.to_string()));
        }
        self.store
            .comments
            .write()
            .await
            .insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        Ok(self.store.comments.read().await.get(id).cloned())
    }

    async fn find_by_review(&self, review_id: &ReviewId) -> Result<Vec<Comment>, CommentError> {
        let mut comments: Vec<Comment> = self
            .store
            .comments
            .read()
            .await
            .values()
            .filter(|c| c.review_id == *review_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Comment>, CommentError> {
        let mut comments: Vec<Comment> = self
            .store
            .comments
            .read()
            .await
            .values()
            .filter(|c| c.user_id == *user_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    async fn update(&self, comment: Comment) -> Result<Comment, CommentError> {
        let mut comments = self.store.comments.write().await;
        if !comments.contains_key(&comment.id) {
            return Err(CommentError::NotFound(comment.id.to_string()));
        }
        comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError> {
        self.store
            .comments
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(CommentError::NotFound(id.to_string()))
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<InMemoryStore>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryStore::default());

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(InMemoryUserRepository {
            store: Arc::clone(&store),
        });
        let book_repository = Arc::new(InMemoryBookRepository {
            store: Arc::clone(&store),
        });
        let review_repository = Arc::new(InMemoryReviewRepository {
            store: Arc::clone(&store),
        });
        let comment_repository = Arc::new(InMemoryCommentRepository {
            store: Arc::clone(&store),
        });

        let state = AppState {
            user_service: Arc::new(UserService::new(user_repository)),
            book_service: Arc::new(BookService::new(book_repository)),
            review_service: Arc::new(ReviewService::new(review_repository)),
            comment_service: Arc::new(CommentService::new(comment_repository)),
            authenticator: Arc::new(Authenticator::new(TEST_JWT_SECRET)),
            jwt_expiration_hours: 24,
        };

        let router = create_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            store,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
        }
    }

    /// Insert a book directly into the store; the catalog has no write API.
    pub async fn seed_book(&self, title: &str, author: &str) -> String {
        let book = Book {
            id: BookId::new(),
            title: title.to_string(),
            author: author.to_string(),
            description: None,
            created_at: Utc::now(),
        };
        let id = book.id.to_string();
        self.store.books.write().await.insert(book.id, book);
        id
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user through the API and return (user_id, token).
    pub async fn register_user(&self, username: &str, password: &str) -> (String, String) {
        let response = self
            .post("/api/auth/register")
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        let user_id = body["data"]["user"]["id"]
            .as_str()
            .expect("Missing user id")
            .to_string();
        let token = body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string();

        (user_id, token)
    }
}
