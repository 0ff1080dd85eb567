use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::domain::user::value_objects::Email;

/// User data for persistence
///
/// Simple struct for user CRUD operations
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: Email,
    pub password_hash: String,
    pub full_name: String,
    pub is_active: bool,
}

/// Repository trait for portal accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user; duplicate emails fail with Conflict
    async fn create(&self, user: User) -> RepositoryResult<Uuid>;

    /// Find a user by email address, ignoring case
    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>>;

    /// All users ordered by name
    async fn find_all(&self) -> RepositoryResult<Vec<User>>;

    /// Update user's last login timestamp
    async fn update_last_login(&self, user_id: Uuid) -> RepositoryResult<()>;

    async fn count(&self) -> RepositoryResult<u64>;
}
