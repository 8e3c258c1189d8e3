//! Authentication building blocks for the book-review service:
//! - Password hashing (Argon2id)
//! - JWT token issuance and verification
//! - An authenticator coordinating the two
//!
//! # Examples
//!
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash the password for storage
//! let hash = auth.hash_password("p@ss1").unwrap();
//!
//! // Login: verify and issue a token
//! let claims = Claims::for_user("user123", "ada".to_string(), 24);
//! let result = auth.authenticate("p@ss1", &hash, &claims).unwrap();
//!
//! // Per-request: verify the token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
