pub mod book;
pub mod comment;
pub mod review;
pub mod user;
