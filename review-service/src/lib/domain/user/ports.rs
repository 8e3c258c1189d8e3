use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// The plain text password in the command is hashed before persistence.
    /// Concurrent registrations of the same username are resolved by the
    /// database uniqueness constraint, surfaced as `UsernameAlreadyExists`.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - username is taken
    /// * `DatabaseError` - store operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `DatabaseError` - store operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - no user with this username
    /// * `DatabaseError` - store operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;
}

/// Persistence operations for the credential store.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - uniqueness constraint violated
    /// * `DatabaseError` - store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Look up a user by id. `Ok(None)` when absent, no side effects.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Look up a user by username. `Ok(None)` when absent, no side effects.
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
