pub mod book;
pub mod comment;
pub mod review;
pub mod user;

pub use book::PostgresBookRepository;
pub use comment::PostgresCommentRepository;
pub use review::PostgresReviewRepository;
pub use user::PostgresUserRepository;
